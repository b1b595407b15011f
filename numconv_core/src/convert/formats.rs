//! Number conversion dispatch.
//!
//! Every conversion is a straight pipeline: validate both format tags, parse
//! the input into a `BigInt`, then render that value in the target format.
//! Failures never escape as panics; they come back as the `error` half of a
//! [`ConversionResult`].
//!
//! # Examples
//!
//! ```rust
//! use numconv_core::convert::formats::convert;
//!
//! let res = convert("101010", "binary", "hexadecimal");
//! assert_eq!(res.result.as_deref(), Some("2a"));
//! assert!(res.error.is_none());
//! ```
use std::fmt;
use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::config::ConverterConfig;
use crate::convert::base64_le::{base64_to_number, number_to_base64};
use crate::convert::radix::{format_radix, parse_radix};
use crate::convert::words::{number_to_text, text_to_number};
use crate::error::ConversionError;

const FORMAT_TEXT: &str = "text";
const FORMAT_DECIMAL: &str = "decimal";
const FORMAT_BINARY: &str = "binary";
const FORMAT_OCTAL: &str = "octal";
const FORMAT_HEXADECIMAL: &str = "hexadecimal";
const FORMAT_BASE64: &str = "base64";

/// One of the six supported textual encodings of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
    Base64,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Text,
        Format::Decimal,
        Format::Binary,
        Format::Octal,
        Format::Hexadecimal,
        Format::Base64,
    ];

    /// Wire tag, e.g. `"hexadecimal"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => FORMAT_TEXT,
            Format::Decimal => FORMAT_DECIMAL,
            Format::Binary => FORMAT_BINARY,
            Format::Octal => FORMAT_OCTAL,
            Format::Hexadecimal => FORMAT_HEXADECIMAL,
            Format::Base64 => FORMAT_BASE64,
        }
    }

    /// Radix for the positional notations, `None` for text and base64.
    pub fn radix(self) -> Option<u32> {
        match self {
            Format::Decimal => Some(10),
            Format::Binary => Some(2),
            Format::Octal => Some(8),
            Format::Hexadecimal => Some(16),
            Format::Text | Format::Base64 => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag that is not one of the six format names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Response envelope: exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub result: Option<String>,
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn success(result: String) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: &ConversionError) -> Self {
        Self {
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

impl From<Result<String, ConversionError>> for ConversionResult {
    fn from(res: Result<String, ConversionError>) -> Self {
        match res {
            Ok(result) => ConversionResult::success(result),
            Err(err) => ConversionResult::failure(&err),
        }
    }
}

/// Parses `input` according to `format` into the canonical integer.
pub fn parse_value(input: &str, format: Format) -> Result<BigInt, ConversionError> {
    match format {
        Format::Text => text_to_number(input),
        Format::Decimal | Format::Binary | Format::Octal | Format::Hexadecimal => {
            parse_radix(format, input)
        }
        Format::Base64 => base64_to_number(input),
    }
}

/// Renders the canonical integer in `format`.
pub fn format_value(value: &BigInt, format: Format) -> Result<String, ConversionError> {
    match format {
        Format::Text => Ok(number_to_text(value)),
        Format::Decimal | Format::Binary | Format::Octal | Format::Hexadecimal => {
            let radix = format
                .radix()
                .ok_or(ConversionError::InvalidOutputType)?;
            Ok(format_radix(value, radix))
        }
        Format::Base64 => number_to_base64(value),
    }
}

/// Typed conversion core shared by every entry point.
pub fn convert_value(
    input: &str,
    input_type: Format,
    output_type: Format,
    config: &ConverterConfig,
) -> Result<String, ConversionError> {
    if input.chars().count() > config.max_input_len {
        return Err(ConversionError::InputTooLong {
            limit: config.max_input_len,
        });
    }
    let value = parse_value(input, input_type)?;
    let rendered = format_value(&value, output_type)?;
    // Every format renders ASCII, so bytes are characters here.
    if rendered.len() > config.max_output_len {
        return Err(ConversionError::OutputTooLong {
            limit: config.max_output_len,
        });
    }
    Ok(rendered)
}

/// Validates both tags and runs the conversion with explicit limits.
pub fn convert_with_config(
    input: &str,
    input_type: &str,
    output_type: &str,
    config: &ConverterConfig,
) -> Result<String, ConversionError> {
    let from: Format = input_type
        .parse()
        .map_err(|_| ConversionError::InvalidInputType)?;
    let to: Format = output_type
        .parse()
        .map_err(|_| ConversionError::InvalidOutputType)?;
    debug!("converting {} -> {} ({} bytes)", from, to, input.len());
    convert_value(input, from, to, config)
}

/// Converts `input` from `input_type` to `output_type` using default limits.
///
/// Never panics; every failure is reported through the `error` field.
pub fn convert(input: &str, input_type: &str, output_type: &str) -> ConversionResult {
    let res = convert_with_config(input, input_type, output_type, &ConverterConfig::default());
    if let Err(err) = &res {
        debug!("conversion {input_type} -> {output_type} failed: {err}");
    }
    res.into()
}
