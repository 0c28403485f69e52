//! The cursor line, split into the pieces completion cares about.

use serde::{Deserialize, Serialize};

use crate::text_edit::Span;

/// Unit a column is counted in.
///
/// LSP positions count UTF-16 code units unless negotiated otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Utf8,
    #[default]
    Utf16,
    Utf32,
}

impl Encoding {
    fn units(self, ch: char) -> usize {
        match self {
            Encoding::Utf8 => ch.len_utf8(),
            Encoding::Utf16 => ch.len_utf16(),
            Encoding::Utf32 => 1,
        }
    }
}

/// Alphanumeric, or one of `unifying_chars`.
pub fn is_word(ch: char, unifying_chars: &str) -> bool {
    ch.is_alphanumeric() || unifying_chars.contains(ch)
}

/// Column of byte offset `byte` in `line`, counted in `encoding` units.
pub fn column_of(line: &str, byte: usize, encoding: Encoding) -> u32 {
    let byte = floor_char_boundary(line, byte);
    let units: usize = line[..byte].chars().map(|ch| encoding.units(ch)).sum();
    units as u32
}

/// Byte offset of `col` (in `encoding` units) in `line`.
///
/// A column inside a multi-unit char resolves to that char's start; past the end
/// resolves to `line.len()`.
pub fn byte_offset_from_column(line: &str, col: u32, encoding: Encoding) -> usize {
    let col = col as usize;
    if col == 0 {
        return 0;
    }

    let mut units = 0usize;
    for (byte_idx, ch) in line.char_indices() {
        let next = units + encoding.units(ch);
        if next > col {
            return byte_idx;
        }
        units = next;
        if units == col {
            return byte_idx + ch.len_utf8();
        }
    }

    line.len()
}

fn floor_char_boundary(line: &str, byte: usize) -> usize {
    let mut byte = byte.min(line.len());
    while !line.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

/// Cursor line state for one review pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Zero-based line index in the buffer.
    pub row: u32,
    pub line: String,
    /// Byte offset of the cursor in `line`, always on a char boundary.
    pub cursor: usize,
    /// Trailing word chars before the cursor; the typed word.
    pub words_before: String,
    /// Trailing non-whitespace chars before the cursor.
    pub syms_before: String,
    /// Leading word chars after the cursor.
    pub words_after: String,
}

impl Context {
    pub fn new(row: u32, line: impl Into<String>, cursor: usize, unifying_chars: &str) -> Self {
        let line = line.into();
        let cursor = floor_char_boundary(&line, cursor);
        let (before, after) = line.split_at(cursor);

        let words_before = trailing(before, |ch| is_word(ch, unifying_chars)).to_string();
        let syms_before = trailing(before, |ch| !ch.is_whitespace()).to_string();
        let words_after = after
            .char_indices()
            .find(|&(_, ch)| !is_word(ch, unifying_chars))
            .map_or(after, |(idx, _)| &after[..idx])
            .to_string();

        Self {
            row,
            cursor,
            words_before,
            syms_before,
            words_after,
            line,
        }
    }

    pub fn line_before(&self) -> &str {
        &self.line[..self.cursor]
    }

    pub fn line_after(&self) -> &str {
        &self.line[self.cursor..]
    }

    /// The word being typed.
    pub fn cword(&self) -> &str {
        &self.words_before
    }

    /// Byte span of the typed word, ending at the cursor.
    pub fn cword_span(&self) -> Span {
        Span {
            start: (self.cursor - self.words_before.len()) as u32,
            end: self.cursor as u32,
        }
    }

    pub fn column(&self, encoding: Encoding) -> u32 {
        column_of(&self.line, self.cursor, encoding)
    }
}

fn trailing(text: &str, keep: impl Fn(char) -> bool) -> &str {
    let start = text
        .char_indices()
        .rev()
        .find(|&(_, ch)| !keep(ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8());
    &text[start..]
}
