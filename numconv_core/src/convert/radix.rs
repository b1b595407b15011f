//! Positional notations: decimal, binary, octal and hexadecimal.
//!
//! Parsing accepts an optional sign, `_` digit separators and the usual base
//! prefix (`0b`, `0o`, `0x`). Rendering never emits a prefix. Negative values
//! rendered in a sign-less base use two's complement at the narrowest whole
//! number of bytes that can hold them, so `-42` becomes `11010110` in binary
//! and `d6` in hexadecimal.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};

use crate::convert::Format;
use crate::error::ConversionError;

/// Parses `value` as an integer written in the positional notation of `format`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use numconv_core::convert::radix::parse_radix;
/// use numconv_core::convert::Format;
///
/// let num = parse_radix(Format::Hexadecimal, "0x2A").unwrap();
/// assert_eq!(num, BigInt::from(42));
/// ```
pub fn parse_radix(format: Format, value: &str) -> Result<BigInt, ConversionError> {
    let invalid = || ConversionError::invalid_literal(format, value);
    let radix = format.radix().ok_or_else(invalid)?;

    let mut slice = value.trim();
    let mut negative = false;
    if let Some(rest) = slice.strip_prefix('-') {
        negative = true;
        slice = rest;
    } else if let Some(rest) = slice.strip_prefix('+') {
        slice = rest;
    }
    if let Some(prefix) = base_prefix(format) {
        let has_prefix = slice
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if has_prefix && slice.len() > prefix.len() {
            slice = &slice[prefix.len()..];
            // A single separator may follow the prefix, as in `0x_ff`.
            slice = slice.strip_prefix('_').unwrap_or(slice);
        }
    }
    // BigInt::parse_bytes would accept a second sign, so the digits are checked here.
    if !valid_digits(slice, radix) {
        return Err(invalid());
    }
    let digits: String = slice.chars().filter(|ch| *ch != '_').collect();
    let mut num = BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)?;
    if negative {
        num = -num;
    }
    Ok(num)
}

/// Renders `value` in `radix` with lowercase digits and no prefix.
pub fn format_radix(value: &BigInt, radix: u32) -> String {
    if radix != 10 && value.is_negative() {
        return twos_complement(value).to_str_radix(radix);
    }
    value.to_str_radix(radix)
}

/// Digits of `radix`, with `_` allowed only between two digits.
fn valid_digits(slice: &str, radix: u32) -> bool {
    slice.split('_').all(|group| {
        !group.is_empty() && group.chars().all(|ch| ch.is_digit(radix))
    })
}

fn base_prefix(format: Format) -> Option<&'static str> {
    match format {
        Format::Binary => Some("0b"),
        Format::Octal => Some("0o"),
        Format::Hexadecimal => Some("0x"),
        _ => None,
    }
}

/// Smallest multiple of eight bits whose signed range reaches down to `value`.
fn twos_complement_width(magnitude: &BigUint) -> u64 {
    let bits = (magnitude.clone() - 1u32).bits() + 1;
    bits.div_ceil(8) * 8
}

fn twos_complement(value: &BigInt) -> BigUint {
    let magnitude = value.magnitude();
    let width = twos_complement_width(magnitude);
    (BigUint::one() << width) - magnitude
}
