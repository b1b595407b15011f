//! Failure taxonomy for the converter.
//!
//! Every failure is terminal for its request and is reported to the caller as
//! data, so the messages here are exactly what ends up in the `error` field of
//! a response envelope.

use thiserror::Error;

use crate::convert::Format;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Invalid input type")]
    InvalidInputType,
    #[error("Invalid output type")]
    InvalidOutputType,
    /// The input does not match the digit grammar of its declared base.
    #[error("invalid literal for int() with base {radix}: '{literal}'")]
    InvalidLiteral { radix: u32, literal: String },
    #[error("Unable to convert text to number")]
    UnknownText,
    #[error("Invalid base64 input")]
    InvalidBase64,
    #[error("Negative numbers cannot be encoded as base64")]
    NegativeBase64,
    #[error("Input exceeds the maximum length of {limit} characters")]
    InputTooLong { limit: usize },
    #[error("Result exceeds the maximum length of {limit} characters")]
    OutputTooLong { limit: usize },
    /// A required request field was absent; holds the wire name of the field.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
}

impl ConversionError {
    pub(crate) fn invalid_literal(format: Format, literal: &str) -> Self {
        ConversionError::InvalidLiteral {
            radix: format.radix().unwrap_or(10),
            literal: literal.to_string(),
        }
    }
}
