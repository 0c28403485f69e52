use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Buffers,
    Paths,
    TreeSitter,
    Lsp,
    Snippets,
    Tags,
    Tmux,
    Tabnine,
}

#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SnippetGrammar {
    Lsp,
    Snu,
}

#[derive(Deserialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
}

#[derive(Deserialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

#[derive(Deserialize, TS, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Edit {
    Plain {
        new_text: String,
    },
    Contextual {
        new_text: String,
        old_prefix: String,
        old_suffix: String,
        #[serde(default)]
        new_prefix: Option<String>,
    },
    Range {
        new_text: String,
        begin: Position,
        end: Position,
        encoding: Encoding,
        fallback: String,
    },
    Snippet {
        new_text: String,
        grammar: SnippetGrammar,
    },
}

/// A candidate as sent by the editor.
#[derive(Deserialize, TS, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub source: SourceKind,
    pub label: String,
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Inserts `label` over the typed word when absent.
    #[serde(default)]
    pub edit: Option<Edit>,
    #[serde(default)]
    pub weight_adjust: f64,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq)]
pub struct ReviewItem {
    pub label: String,
    pub source: SourceKind,
    pub short_name: String,
    pub kind: Option<String>,
    pub detail: Option<String>,
    pub prefix_matches: u32,
    pub edit_distance: f64,
    pub weight: f64,
    pub edit: TextEdit,
    /// Cursor in the line after `edit` is applied.
    pub cursor: u32,
    /// Set when `edit.new_text` still has to go through the snippet engine.
    pub snippet: Option<SnippetGrammar>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq)]
pub struct ReviewResult {
    pub cword: String,
    pub replace: Span,
    pub items: Vec<ReviewItem>,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub prefix_matches: u32,
    pub edit_distance: f64,
    pub quick_ratio: f64,
    pub multi_set_ratio: f64,
}
