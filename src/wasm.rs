//! WASM bindings for htmlgrid
//!
//! This module provides JavaScript-accessible functions for resolving HTML
//! tables into grids.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

#[cfg(feature = "wasm")]
use crate::core::ParseOptions;
#[cfg(feature = "wasm")]
use crate::model::Table;

/// Resolution result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct ParseResult {
    /// The resolved tables
    pub tables: Vec<Table>,
    /// Whether resolution was successful
    pub success: bool,
    /// Error message if resolution failed
    pub error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Resolve every table of an HTML document
///
/// # Arguments
/// * `html` - HTML document or fragment
/// * `options` - `{ computeAutoWidth, defaultLinkStyle }`, all optional
///
/// # Returns
/// `{ tables, success, error }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseHtmlTables")]
pub fn parse_html_tables_wasm(html: &str, options: JsValue) -> JsValue {
    let parse_options: ParseOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        crate::parse_html_tables(html, &parse_options)
    })) {
        Ok(tables) => ParseResult {
            tables,
            success: true,
            error: None,
        },
        Err(e) => {
            // Try to extract panic message for better error reporting
            let error_msg = if let Some(s) = e.downcast_ref::<&str>() {
                format!("Parsing failed: {}", s)
            } else if let Some(s) = e.downcast_ref::<String>() {
                format!("Parsing failed: {}", s)
            } else {
                "Parsing failed: unknown error (check browser console for details)".to_string()
            };
            ParseResult {
                tables: Vec::new(),
                success: false,
                error: Some(error_msg),
            }
        }
    };

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    result.serialize(&serializer).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
