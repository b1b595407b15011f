use console_error_panic_hook::set_once as set_panic_hook;
use log::debug;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod config;
pub mod convert;
pub mod error;

pub use config::ConverterConfig;
pub use convert::{convert, ConversionResult, Format};
pub use error::ConversionError;

#[cfg(test)]
mod lib_tests;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

/// Incoming request as sent by a client. Fields stay optional so an absent one
/// can be reported by name instead of failing the whole decode.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub input: Option<String>,
    pub input_type: Option<String>,
    pub output_type: Option<String>,
}

impl ConversionRequest {
    pub fn new(input: &str, input_type: &str, output_type: &str) -> Self {
        Self {
            input: Some(input.to_string()),
            input_type: Some(input_type.to_string()),
            output_type: Some(output_type.to_string()),
        }
    }

    /// Checks `input`, `inputType` and `outputType` are present, in that order.
    fn fields(&self) -> Result<(&str, &str, &str), ConversionError> {
        let input = self
            .input
            .as_deref()
            .ok_or(ConversionError::MissingField("input"))?;
        let input_type = self
            .input_type
            .as_deref()
            .ok_or(ConversionError::MissingField("inputType"))?;
        let output_type = self
            .output_type
            .as_deref()
            .ok_or(ConversionError::MissingField("outputType"))?;
        Ok((input, input_type, output_type))
    }
}

#[wasm_bindgen]
pub fn convert_number(input: &str, input_type: &str, output_type: &str) -> JsValue {
    to_js(&convert(input, input_type, output_type))
}

#[wasm_bindgen]
pub fn convert_request(payload: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<ConversionRequest>(payload) {
        Ok(request) => convert_request_internal(&request),
        Err(err) => ConversionResult::failure(&ConversionError::InvalidPayload(err.to_string())),
    };
    to_js(&result)
}

#[wasm_bindgen]
pub fn supported_formats() -> JsValue {
    serde_wasm_bindgen::to_value(&Format::ALL).unwrap_or(JsValue::NULL)
}

/// Handles a JSON request body and returns the JSON response envelope.
///
/// Business failures (bad tags, unparsable input, missing fields, malformed
/// JSON) all come back inside the envelope's `error` field.
///
/// # Example
/// ```
/// use numconv_core::convert_request_json;
///
/// let body = convert_request_json(r#"{"input":"2a","inputType":"hexadecimal","outputType":"octal"}"#);
/// assert_eq!(body, r#"{"error":null,"result":"52"}"#);
/// ```
pub fn convert_request_json(payload: &str) -> String {
    let result = match serde_json::from_str::<ConversionRequest>(payload) {
        Ok(request) => convert_request_internal(&request),
        Err(err) => ConversionResult::failure(&ConversionError::InvalidPayload(err.to_string())),
    };
    encode_result(&result)
}

fn convert_request_internal(request: &ConversionRequest) -> ConversionResult {
    match request.fields() {
        Ok((input, input_type, output_type)) => convert(input, input_type, output_type),
        Err(err) => {
            debug!("rejecting request: {err}");
            ConversionResult::failure(&err)
        }
    }
}

fn encode_result(result: &ConversionResult) -> String {
    serde_json::json!({
        "result": result.result,
        "error": result.error,
    })
    .to_string()
}

fn to_js(result: &ConversionResult) -> JsValue {
    // Absent fields must reach JS as `null`, not `undefined`.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    result.serialize(&serializer).unwrap_or(JsValue::NULL)
}
