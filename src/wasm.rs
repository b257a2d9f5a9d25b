//! WASM bindings for the block editor.
//!
//! This module exposes the converters to JavaScript via wasm-bindgen so the
//! editor preview can produce the same CSS as the server.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::{
    BlockAttributes, Border, BorderRadius, Spacing, border_radius_to_css, border_to_css,
    convert_preset_value, padding_to_css, render_style,
};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render the inline style for a block's attributes.
///
/// Takes the attributes as a JSON string.
#[wasm_bindgen]
pub fn render_style_json(json: &str) -> Result<String, JsValue> {
    let attrs = BlockAttributes::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(render_style(&attrs).to_inline_style())
}

/// Rewrite a `var:preset|type|slug` reference to a CSS variable lookup.
#[wasm_bindgen]
pub fn convert_preset(value: &str) -> String {
    convert_preset_value(value).into_owned()
}

/// Border object (JSON) to `property: value` declarations.
#[wasm_bindgen]
pub fn border_declarations(json: &str) -> Result<Vec<String>, JsValue> {
    let value = parse_value(json)?;
    Ok(border_to_css(&Border::from(&value))
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Border radius (JSON string or corner object) to a `border-radius` value.
#[wasm_bindgen]
pub fn border_radius(json: &str) -> Result<String, JsValue> {
    let value = parse_value(json)?;
    Ok(border_radius_to_css(&BorderRadius::from(&value)))
}

/// Spacing object (JSON) to a padding shorthand.
#[wasm_bindgen]
pub fn padding(json: &str) -> Result<String, JsValue> {
    let value = parse_value(json)?;
    Ok(padding_to_css(&Spacing::from(&value)))
}

fn parse_value(json: &str) -> Result<Value, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))
}
