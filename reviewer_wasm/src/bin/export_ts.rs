use std::fs;
use std::path::PathBuf;

use reviewer_wasm::dto::v1::{
    Candidate, Edit, Encoding, Metrics, Position, ReviewItem, ReviewResult, SnippetGrammar,
    SourceKind, Span, TextEdit,
};
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("generated/review_dto.ts");
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = String::new();
    out.push_str("/* eslint-disable */\n");
    out.push_str("/* prettier-ignore */\n");
    out.push_str("// AUTO-GENERATED: `cargo run -p reviewer_wasm --bin export_ts`\n\n");

    for decl in [
        Span::decl(),
        SourceKind::decl(),
        SnippetGrammar::decl(),
        Encoding::decl(),
        Position::decl(),
        Edit::decl(),
        Candidate::decl(),
        TextEdit::decl(),
        ReviewItem::decl(),
        ReviewResult::decl(),
        Metrics::decl(),
    ] {
        out.push_str(&exported(decl));
        out.push_str("\n\n");
    }

    fs::write(out_path, out)?;
    Ok(())
}

fn exported(decl: String) -> String {
    let trimmed = decl.trim();
    if trimmed.starts_with("export ") {
        trimmed.to_string()
    } else {
        format!("export {trimmed}")
    }
}
