use diffscale::{Conversion, Input, Scale, ScaleError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Shape handed to the page's results panel
#[derive(Serialize)]
pub struct ConversionView {
    pub input: String,
    pub from: String,
    pub to: String,
    pub value: Option<f64>,
    pub formatted: String,
    pub visual: String,
}

impl From<Conversion> for ConversionView {
    fn from(c: Conversion) -> Self {
        Self {
            value: c.ok().then_some(c.value),
            input: c.input,
            from: c.from.to_string(),
            to: c.to.to_string(),
            formatted: c.formatted,
            visual: c.visual,
        }
    }
}

fn scale(name: &str) -> Result<Scale, ScaleError> {
    name.parse()
}

fn describe_inner(input: Input<'_>, from: &str, to: &str) -> Result<ConversionView, ScaleError> {
    Ok(Conversion::run(input, scale(from)?, scale(to)?).into())
}

fn to_js_error(err: ScaleError) -> JsError {
    JsError::new(&err.to_string())
}

/// Convert a number between scales
#[wasm_bindgen]
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, JsError> {
    let (from, to) = (scale(from).map_err(to_js_error)?, scale(to).map_err(to_js_error)?);
    Ok(diffscale::convert(value, from, to))
}

/// Convert a typed label (or numeric text) between scales
#[wasm_bindgen(js_name = convertLabel)]
pub fn convert_label(text: &str, from: &str, to: &str) -> Result<f64, JsError> {
    let (from, to) = (scale(from).map_err(to_js_error)?, scale(to).map_err(to_js_error)?);
    let result = diffscale::convert(text, from, to);
    if result.is_nan() {
        web_sys::console::warn_1(&format!("diffscale: '{}' is not a {} difficulty", text, from).into());
    }
    Ok(result)
}

#[wasm_bindgen(js_name = toVisual)]
pub fn to_visual(value: f64, scale_name: &str) -> Result<String, JsError> {
    Ok(diffscale::to_visual(value, scale(scale_name).map_err(to_js_error)?))
}

#[wasm_bindgen(js_name = visualToNumber)]
pub fn visual_to_number(text: &str, scale_name: &str) -> Result<f64, JsError> {
    Ok(diffscale::visual_to_number(text, scale(scale_name).map_err(to_js_error)?))
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    diffscale::format_number(value)
}

/// Full conversion for the results panel: number, display form and label
#[wasm_bindgen]
pub fn describe(value: JsValue, from: &str, to: &str) -> Result<JsValue, JsError> {
    let text = value.as_string();
    let input = match (value.as_f64(), text.as_deref()) {
        (Some(n), _) => Input::Value(n),
        (None, Some(t)) => Input::Label(t),
        (None, None) => return Err(JsError::new("expected a number or a string")),
    };

    let view = describe_inner(input, from, to).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&view).map_err(|e| JsError::new(&e.to_string()))
}

/// Scale identifiers in display order
#[wasm_bindgen]
pub fn scales() -> js_sys::Array {
    Scale::ALL
        .iter()
        .map(|s| JsValue::from_str(s.id()))
        .collect()
}
