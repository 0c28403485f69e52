use serde::{Deserialize, Serialize};
use tracing::warn;

/// Half-open byte range `[start, end)` in the cursor line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

/// Applies byte-offset text edits and rebases a byte cursor through them.
///
/// Edits must be sorted by `(start, end)` and must not overlap. An edit that is
/// inverted, out of bounds, off a char boundary or overlapping its predecessor is
/// skipped.
///
/// Cursor rules:
/// - edits fully before the cursor shift it by the byte delta
/// - a cursor strictly inside a replaced range snaps to the edit `start`
pub fn apply_text_edits(source: &str, edits: &[TextEdit], cursor: u32) -> (String, u32) {
    let mut out = String::with_capacity(source.len());
    let mut copied = 0usize;
    let mut shift = 0i64;
    let mut new_cursor = i64::from(cursor);

    for edit in edits {
        let start = edit.range.start as usize;
        let end = edit.range.end as usize;
        let valid = start <= end
            && start >= copied
            && end <= source.len()
            && source.is_char_boundary(start)
            && source.is_char_boundary(end);
        if !valid {
            warn!(range = ?edit.range, "skipping invalid text edit");
            continue;
        }

        out.push_str(&source[copied..start]);
        out.push_str(&edit.new_text);
        copied = end;

        let delta = edit.new_text.len() as i64 - (end - start) as i64;
        if edit.range.end <= cursor {
            shift += delta;
        } else if edit.range.start < cursor {
            new_cursor = i64::from(edit.range.start);
        }
    }
    out.push_str(&source[copied..]);

    let cursor = (new_cursor + shift).clamp(0, out.len() as i64);
    (out, cursor as u32)
}
