//! JS-facing DTO types for `reviewer_wasm`.
//!
//! Spans, columns and cursors use UTF-16 code units and are half-open `[start, end)`.
pub mod v1;
