use serde::{Deserialize, Serialize};

use crate::context::{Context, Encoding, byte_offset_from_column};
use crate::text_edit::{Span, TextEdit};

/// Zero-based buffer position; `col` is counted in the owning edit's encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Template syntax of a snippet body, expanded outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetGrammar {
    Lsp,
    Snu,
}

/// What accepting a candidate does to the buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Edit {
    /// Replace the typed word.
    Plain { new_text: String },
    /// Replace `old_prefix` before and `old_suffix` after the cursor.
    Contextual {
        new_text: String,
        old_prefix: String,
        old_suffix: String,
        /// Part of `new_text` that ends up before the cursor; all of it when absent.
        new_prefix: Option<String>,
    },
    /// Replace an explicit range, as LSP `textEdit` does.
    Range {
        new_text: String,
        begin: Position,
        end: Position,
        encoding: Encoding,
        /// Inserted as a plain edit when the range cannot be honoured.
        fallback: String,
    },
    Snippet {
        new_text: String,
        grammar: SnippetGrammar,
    },
}

/// An edit resolved against a concrete cursor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealizedEdit {
    pub edit: TextEdit,
    /// Byte offset of the cursor in the edited line.
    pub cursor: u32,
    /// Set when `edit.new_text` is a template the snippet engine must expand.
    pub snippet: Option<SnippetGrammar>,
}

impl Edit {
    pub fn plain(new_text: impl Into<String>) -> Self {
        Edit::Plain {
            new_text: new_text.into(),
        }
    }

    pub fn new_text(&self) -> &str {
        match self {
            Edit::Plain { new_text }
            | Edit::Contextual { new_text, .. }
            | Edit::Range { new_text, .. }
            | Edit::Snippet { new_text, .. } => new_text,
        }
    }

    /// Reduces the edit to a form that is safe to replay on a later keystroke.
    ///
    /// Ranges go stale as soon as the line changes, so they collapse to their fallback.
    pub fn sanitize(self) -> Edit {
        match self {
            Edit::Range { fallback, .. } => Edit::Plain { new_text: fallback },
            Edit::Snippet { .. } => self,
            Edit::Plain { new_text } | Edit::Contextual { new_text, .. } => {
                Edit::Plain { new_text }
            }
        }
    }

    pub fn realize(&self, context: &Context) -> RealizedEdit {
        match self {
            Edit::Plain { new_text } => replace_cword(context, new_text, None),
            Edit::Contextual {
                new_text,
                old_prefix,
                old_suffix,
                new_prefix,
            } => {
                let cursor = context.cursor;
                let start = if context.line_before().ends_with(old_prefix.as_str()) {
                    cursor - old_prefix.len()
                } else {
                    context.cword_span().start as usize
                };
                let end = if context.line_after().starts_with(old_suffix.as_str()) {
                    cursor + old_suffix.len()
                } else {
                    cursor
                };
                let before = new_prefix
                    .as_ref()
                    .map_or(new_text.len(), |prefix| prefix.len().min(new_text.len()));

                RealizedEdit {
                    edit: TextEdit {
                        range: Span::new(start as u32, end as u32),
                        new_text: new_text.clone(),
                    },
                    cursor: (start + before) as u32,
                    snippet: None,
                }
            }
            Edit::Range {
                new_text,
                begin,
                end,
                encoding,
                fallback,
            } => {
                if begin.row != context.row || end.row != context.row {
                    return replace_cword(context, fallback, None);
                }
                let start = byte_offset_from_column(&context.line, begin.col, *encoding);
                let stop = byte_offset_from_column(&context.line, end.col, *encoding);
                if start > stop {
                    return replace_cword(context, fallback, None);
                }
                RealizedEdit {
                    edit: TextEdit {
                        range: Span::new(start as u32, stop as u32),
                        new_text: new_text.clone(),
                    },
                    cursor: (start + new_text.len()) as u32,
                    snippet: None,
                }
            }
            Edit::Snippet { new_text, grammar } => {
                replace_cword(context, new_text, Some(*grammar))
            }
        }
    }
}

fn replace_cword(context: &Context, new_text: &str, snippet: Option<SnippetGrammar>) -> RealizedEdit {
    let range = context.cword_span();
    RealizedEdit {
        edit: TextEdit {
            range,
            new_text: new_text.to_string(),
        },
        cursor: range.start + new_text.len() as u32,
        snippet,
    }
}
