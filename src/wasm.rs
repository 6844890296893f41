//! WASM bindings for absfmt
//!
//! This module provides JavaScript-accessible functions so a browser host
//! (textarea + message list) can drive the pipeline directly.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::pipeline::{FormatOptions, Formatter};
#[cfg(feature = "wasm")]
use crate::sentiment::{self, Lexicon};

/// Formatting options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct FormatRequestOptions {
    /// Collapse all paragraphs into one flat block
    #[serde(default)]
    pub flatten: bool,
    /// Wrap sentiment-bearing words in highlight spans
    #[serde(default)]
    pub annotate: bool,
}

/// Minimal error payload when serialization fails.
#[cfg(feature = "wasm")]
#[derive(Serialize)]
struct WasmError {
    error: String,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = WasmError {
            error: format!("Serialization error: {}", e),
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Install the panic hook so failures surface in the browser console.
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format one abstract and return the full outcome (html, plain text, word
/// count, diagnostics keyed by id, sentiment) as a JS object.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn format_abstract_js(input: &str, options: JsValue) -> JsValue {
    let request: FormatRequestOptions = if options.is_undefined() || options.is_null() {
        FormatRequestOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_default()
    };

    let formatter = Formatter::new(FormatOptions {
        flatten_paragraphs: request.flatten,
    });
    let mut outcome = formatter.format(input);
    if request.annotate {
        outcome.html = sentiment::annotate(&outcome.html, &Lexicon::afinn());
    }
    to_js_value(&outcome)
}
