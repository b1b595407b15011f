// Integers carried as base64 of their little-endian byte representation.
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use num_bigint::{BigInt, Sign};
use num_traits::Signed;

use crate::error::ConversionError;

// Padding optional, non-zero leftover bits in the final symbol tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes standard base64 (padding optional) and reads the bytes as an
/// unsigned little-endian integer. An empty payload is zero.
pub fn base64_to_number(input: &str) -> Result<BigInt, ConversionError> {
    let trimmed = input.trim();
    let bytes = LENIENT
        .decode(trimmed)
        .map_err(|_| ConversionError::InvalidBase64)?;
    Ok(BigInt::from_bytes_le(Sign::Plus, &bytes))
}

/// Encodes the minimal little-endian bytes of `value`; zero is one zero byte.
pub fn number_to_base64(value: &BigInt) -> Result<String, ConversionError> {
    if value.is_negative() {
        return Err(ConversionError::NegativeBase64);
    }
    let bytes = value.magnitude().to_bytes_le();
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_little_endian_minimal_bytes() {
        assert_eq!(number_to_base64(&BigInt::from(0)).unwrap(), "AA==");
        assert_eq!(number_to_base64(&BigInt::from(1)).unwrap(), "AQ==");
        assert_eq!(number_to_base64(&BigInt::from(42)).unwrap(), "Kg==");
        assert_eq!(number_to_base64(&BigInt::from(255)).unwrap(), "/w==");
        assert_eq!(number_to_base64(&BigInt::from(256)).unwrap(), "AAE=");
        assert_eq!(number_to_base64(&BigInt::from(65535)).unwrap(), "//8=");
    }

    #[test]
    fn decodes_least_significant_byte_first() {
        assert_eq!(base64_to_number("Kg==").unwrap(), BigInt::from(42));
        assert_eq!(base64_to_number("AAQ=").unwrap(), BigInt::from(1024));
        assert_eq!(base64_to_number("AAQ").unwrap(), BigInt::from(1024));
        assert_eq!(base64_to_number(" QOIB ").unwrap(), BigInt::from(123456));
    }

    #[test]
    fn tolerates_non_zero_trailing_bits() {
        assert_eq!(base64_to_number("Kh==").unwrap(), BigInt::from(42));
        assert_eq!(base64_to_number("Kh").unwrap(), BigInt::from(42));
        assert_eq!(base64_to_number("AAR=").unwrap(), BigInt::from(1024));
    }

    #[test]
    fn round_trips_sample_values() {
        for n in [0u32, 1, 42, 255, 256, 1024, 65535, 123456] {
            let value = BigInt::from(n);
            let encoded = number_to_base64(&value).unwrap();
            assert_eq!(base64_to_number(&encoded).unwrap(), value, "value {n}");
        }
    }

    #[test]
    fn empty_payload_is_zero() {
        assert_eq!(base64_to_number("").unwrap(), BigInt::from(0));
    }

    #[test]
    fn rejects_malformed_payloads() {
        for input in ["invalid_base64!", "not_base64", "A", "Kg=A"] {
            assert_eq!(
                base64_to_number(input).unwrap_err(),
                ConversionError::InvalidBase64,
                "input {input}"
            );
        }
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(
            number_to_base64(&BigInt::from(-42)).unwrap_err(),
            ConversionError::NegativeBase64
        );
    }
}
