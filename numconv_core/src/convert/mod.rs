pub mod base64_le;
pub mod formats;
pub mod helpers;
pub mod radix;
pub mod words;

pub use formats::{
    convert, convert_value, convert_with_config, format_value, parse_value, ConversionResult,
    Format,
};
