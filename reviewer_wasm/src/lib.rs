//! WASM bindings for candidate review.
//!
//! Columns and cursors cross the boundary as UTF-16 code units; the editor owns one line
//! at a time.

pub mod converter;
pub mod dto;

use js_sys::Error as JsError;
use reviewer::Reviewer;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::converter::Converter;
use crate::dto::v1;

/// Reviews `candidates` (an array of `Candidate` DTOs) typed at `cursor_utf16` in `line`.
#[wasm_bindgen]
pub fn review(
    line: String,
    cursor_utf16: u32,
    candidates: JsValue,
    config_json: Option<String>,
) -> Result<JsValue, JsValue> {
    let config = Converter::parse_config(config_json.as_deref()).map_err(js_error)?;
    let inputs: Vec<v1::Candidate> = serde_wasm_bindgen::from_value(candidates)?;

    let reviewer = Reviewer::new(config).map_err(js_error)?;
    let cursor = Converter::cursor_utf16_to_byte(&line, cursor_utf16);
    let context = reviewer.context(0, line, cursor);
    let candidates = inputs.into_iter().map(Converter::candidate).collect();

    let result = reviewer.review(&context, candidates);
    to_js(&Converter::review_view(reviewer.config(), &context, &result))
}

/// Scores one candidate against the typed word.
#[wasm_bindgen]
pub fn metrics(cword: String, candidate: String, look_ahead: u32) -> Result<JsValue, JsValue> {
    if look_ahead as usize > scorer::MAX_LOOK_AHEAD {
        return Err(JsValue::from(JsError::new("look_ahead is too large")));
    }
    to_js(&Converter::metrics_view(&cword, &candidate, look_ahead as usize))
}

#[wasm_bindgen]
pub fn dl_distance(lhs: String, rhs: String) -> u32 {
    scorer::dl_distance(&lhs, &rhs) as u32
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from(JsError::new(&err.to_string()))
}

#[cfg(test)]
mod tests;
