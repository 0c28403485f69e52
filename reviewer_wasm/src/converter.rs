//! Conversion utilities for the WASM/JS boundary.
//!
//! Stateless. Parses inputs, bridges UTF-16 editor columns to byte offsets, and maps
//! reviewer types to `dto::v1` views. No ranking logic lives here.

use reviewer::{
    Candidate, ConfigError, Context, Edit, Encoding, Position, RankedItem, ReviewConfig,
    ReviewResult, SnippetGrammar, SourceKind, Span, apply_text_edits, byte_offset_from_column,
    column_of,
};

use crate::dto::v1;

pub struct Converter;

impl Converter {
    /// Parses the JS-provided config JSON; blank or absent input means defaults.
    pub fn parse_config(config_json: Option<&str>) -> Result<ReviewConfig, ConfigError> {
        match config_json.map(str::trim) {
            None | Some("") => Ok(ReviewConfig::default()),
            Some(json) => ReviewConfig::from_json(json),
        }
    }

    /// Convert a UTF-16 cursor column (CodeMirror) to a byte offset (Rust strings).
    pub fn cursor_utf16_to_byte(line: &str, cursor_utf16: u32) -> usize {
        byte_offset_from_column(line, cursor_utf16, Encoding::Utf16)
    }

    pub fn candidate(input: v1::Candidate) -> Candidate {
        let mut candidate = Candidate::new(source_kind(input.source), input.label)
            .with_weight_adjust(input.weight_adjust);
        if let Some(sort_by) = input.sort_by {
            candidate = candidate.with_sort_by(sort_by);
        }
        if let Some(edit) = input.edit {
            candidate = candidate.with_edit(edit_from_dto(edit));
        }
        if let Some(kind) = input.kind {
            candidate = candidate.with_kind(kind);
        }
        if let Some(detail) = input.detail {
            candidate = candidate.with_detail(detail);
        }
        candidate
    }

    pub fn review_view(
        config: &ReviewConfig,
        context: &Context,
        result: &ReviewResult,
    ) -> v1::ReviewResult {
        v1::ReviewResult {
            cword: result.cword.clone(),
            replace: Self::span_dto(&context.line, result.replace),
            items: result
                .items
                .iter()
                .map(|item| Self::item_view(config, context, item))
                .collect(),
        }
    }

    pub fn item_view(config: &ReviewConfig, context: &Context, item: &RankedItem) -> v1::ReviewItem {
        let candidate = &item.candidate;
        let realized = candidate.edit.realize(context);
        let (updated, _) = apply_text_edits(&context.line, &[realized.edit.clone()], 0);

        v1::ReviewItem {
            label: candidate.label.clone(),
            source: source_kind_view(candidate.source),
            short_name: config.sources.resolve(candidate.source).short_name.to_string(),
            kind: candidate.kind.clone(),
            detail: candidate.detail.clone(),
            prefix_matches: item.metrics.prefix_matches as u32,
            edit_distance: item.metrics.edit_distance,
            weight: item.weight,
            edit: v1::TextEdit {
                range: Self::span_dto(&context.line, realized.edit.range),
                new_text: realized.edit.new_text,
            },
            cursor: column_of(&updated, realized.cursor as usize, Encoding::Utf16),
            snippet: realized.snippet.map(snippet_grammar_view),
        }
    }

    pub fn metrics_view(cword: &str, candidate: &str, look_ahead: usize) -> v1::Metrics {
        let m = scorer::metrics(cword, candidate, look_ahead);
        v1::Metrics {
            prefix_matches: m.prefix_matches as u32,
            edit_distance: m.edit_distance,
            quick_ratio: scorer::quick_ratio(cword, candidate, look_ahead),
            multi_set_ratio: scorer::multi_set_ratio(cword, candidate, look_ahead),
        }
    }

    pub fn span_dto(line: &str, span: Span) -> v1::Span {
        v1::Span {
            start: column_of(line, span.start as usize, Encoding::Utf16),
            end: column_of(line, span.end as usize, Encoding::Utf16),
        }
    }
}

fn edit_from_dto(edit: v1::Edit) -> Edit {
    match edit {
        v1::Edit::Plain { new_text } => Edit::Plain { new_text },
        v1::Edit::Contextual {
            new_text,
            old_prefix,
            old_suffix,
            new_prefix,
        } => Edit::Contextual {
            new_text,
            old_prefix,
            old_suffix,
            new_prefix,
        },
        v1::Edit::Range {
            new_text,
            begin,
            end,
            encoding,
            fallback,
        } => Edit::Range {
            new_text,
            begin: position(begin),
            end: position(end),
            encoding: encoding_from_dto(encoding),
            fallback,
        },
        v1::Edit::Snippet { new_text, grammar } => Edit::Snippet {
            new_text,
            grammar: snippet_grammar(grammar),
        },
    }
}

fn position(position: v1::Position) -> Position {
    Position::new(position.row, position.col)
}

fn encoding_from_dto(encoding: v1::Encoding) -> Encoding {
    match encoding {
        v1::Encoding::Utf8 => Encoding::Utf8,
        v1::Encoding::Utf16 => Encoding::Utf16,
        v1::Encoding::Utf32 => Encoding::Utf32,
    }
}

fn snippet_grammar(grammar: v1::SnippetGrammar) -> SnippetGrammar {
    match grammar {
        v1::SnippetGrammar::Lsp => SnippetGrammar::Lsp,
        v1::SnippetGrammar::Snu => SnippetGrammar::Snu,
    }
}

fn snippet_grammar_view(grammar: SnippetGrammar) -> v1::SnippetGrammar {
    match grammar {
        SnippetGrammar::Lsp => v1::SnippetGrammar::Lsp,
        SnippetGrammar::Snu => v1::SnippetGrammar::Snu,
    }
}

fn source_kind(kind: v1::SourceKind) -> SourceKind {
    use v1::SourceKind::*;
    match kind {
        Buffers => SourceKind::Buffers,
        Paths => SourceKind::Paths,
        TreeSitter => SourceKind::TreeSitter,
        Lsp => SourceKind::Lsp,
        Snippets => SourceKind::Snippets,
        Tags => SourceKind::Tags,
        Tmux => SourceKind::Tmux,
        Tabnine => SourceKind::Tabnine,
    }
}

fn source_kind_view(kind: SourceKind) -> v1::SourceKind {
    match kind {
        SourceKind::Buffers => v1::SourceKind::Buffers,
        SourceKind::Paths => v1::SourceKind::Paths,
        SourceKind::TreeSitter => v1::SourceKind::TreeSitter,
        SourceKind::Lsp => v1::SourceKind::Lsp,
        SourceKind::Snippets => v1::SourceKind::Snippets,
        SourceKind::Tags => v1::SourceKind::Tags,
        SourceKind::Tmux => v1::SourceKind::Tmux,
        SourceKind::Tabnine => v1::SourceKind::Tabnine,
    }
}
