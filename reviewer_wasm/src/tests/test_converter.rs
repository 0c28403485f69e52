use reviewer::{Edit, Reviewer, SourceKind};

use crate::converter::Converter;
use crate::dto::v1;

fn candidate(json: &str) -> v1::Candidate {
    serde_json::from_str(json).expect("fixture candidate must parse")
}

fn review(line: &str, cursor_utf16: u32, candidates: &[&str]) -> v1::ReviewResult {
    let config = Converter::parse_config(None).unwrap();
    let reviewer = Reviewer::new(config).unwrap();
    let cursor = Converter::cursor_utf16_to_byte(line, cursor_utf16);
    let context = reviewer.context(0, line, cursor);
    let candidates = candidates
        .iter()
        .map(|json| Converter::candidate(candidate(json)))
        .collect();
    let result = reviewer.review(&context, candidates);
    Converter::review_view(reviewer.config(), &context, &result)
}

#[test]
fn converter_blank_config_means_defaults() {
    let defaults = reviewer::ReviewConfig::default();
    assert_eq!(Converter::parse_config(None).unwrap(), defaults);
    assert_eq!(Converter::parse_config(Some("  ")).unwrap(), defaults);
    assert!(Converter::parse_config(Some("{ nope")).is_err());
    assert!(Converter::parse_config(Some(r#"{ "match": { "max_results": 0 } }"#)).is_err());
}

#[test]
fn converter_cursor_utf16_to_byte() {
    assert_eq!(Converter::cursor_utf16_to_byte("é😀x", 0), 0);
    assert_eq!(Converter::cursor_utf16_to_byte("é😀x", 3), 6);
    assert_eq!(Converter::cursor_utf16_to_byte("é😀x", 40), 7);
}

#[test]
fn converter_candidate_defaults_to_plain_label_edit() {
    let converted = Converter::candidate(candidate(r#"{ "source": "buffers", "label": "foo" }"#));
    assert_eq!(converted.source, SourceKind::Buffers);
    assert_eq!(converted.edit, Edit::plain("foo"));
    assert_eq!(converted.weight_adjust, 0.0);
    assert_eq!(converted.sort_key(), "foo");
}

#[test]
fn converter_candidate_keeps_optional_fields() {
    let converted = Converter::candidate(candidate(
        r#"{
            "source": "lsp",
            "label": "foo(a)",
            "sort_by": "foo",
            "weight_adjust": 0.25,
            "kind": "Function",
            "detail": "fn foo(a: i32)",
            "edit": { "type": "snippet", "new_text": "foo(${1:a})", "grammar": "lsp" }
        }"#,
    ));
    assert_eq!(converted.sort_key(), "foo");
    assert_eq!(converted.weight_adjust, 0.25);
    assert_eq!(converted.kind.as_deref(), Some("Function"));
    assert_eq!(converted.detail.as_deref(), Some("fn foo(a: i32)"));
    assert_eq!(converted.edit.new_text(), "foo(${1:a})");
}

#[test]
fn converter_review_reports_utf16_positions() {
    // "let naï" is 8 bytes and 7 UTF-16 units.
    let out = review(
        "let naï",
        7,
        &[
            r#"{ "source": "buffers", "label": "naive" }"#,
            r#"{ "source": "buffers", "label": "naïve" }"#,
        ],
    );

    assert_eq!(out.cword, "naï");
    assert_eq!(out.replace, v1::Span { start: 4, end: 7 });
    assert_eq!(out.items.len(), 2);

    let first = &out.items[0];
    assert_eq!(first.label, "naïve");
    assert_eq!(first.short_name, "BUF");
    assert_eq!(first.prefix_matches, 3);
    assert_eq!(first.edit.range, v1::Span { start: 4, end: 7 });
    assert_eq!(first.edit.new_text, "naïve");
    assert_eq!(first.cursor, 9);
    assert_eq!(first.snippet, None);
}

#[test]
fn converter_review_range_edit_in_utf16_columns() {
    // The emoji is 4 bytes and 2 UTF-16 units.
    let out = review(
        "x😀ab",
        5,
        &[r#"{
            "source": "lsp",
            "label": "abc",
            "edit": {
                "type": "range",
                "new_text": "abc",
                "begin": { "row": 0, "col": 3 },
                "end": { "row": 0, "col": 5 },
                "encoding": "utf16",
                "fallback": "abc"
            }
        }"#],
    );

    assert_eq!(out.cword, "ab");
    let item = &out.items[0];
    assert_eq!(item.source, v1::SourceKind::Lsp);
    assert_eq!(item.weight, 0.5);
    assert_eq!(item.edit.range, v1::Span { start: 3, end: 5 });
    assert_eq!(item.cursor, 6);
}

#[test]
fn converter_review_flags_snippets() {
    let out = review(
        "fo",
        2,
        &[r#"{
            "source": "snippets",
            "label": "for",
            "edit": { "type": "snippet", "new_text": "for $1 in $2 {}", "grammar": "snu" }
        }"#],
    );

    let item = &out.items[0];
    assert_eq!(item.snippet, Some(v1::SnippetGrammar::Snu));
    assert_eq!(item.edit.new_text, "for $1 in $2 {}");
    assert_eq!(item.edit.range, v1::Span { start: 0, end: 2 });
}

#[test]
fn converter_metrics_view() {
    let m = Converter::metrics_view("supe", "supper", 2);
    assert_eq!(m.prefix_matches, 3);
    assert_eq!(m.edit_distance, 1.0);
    assert_eq!(m.quick_ratio, 0.875);
    assert_eq!(m.multi_set_ratio, 1.0);
}
