use super::*;
use base64::engine::general_purpose::STANDARD as B64_STD;
use base64::Engine;
use serde_json::Value as JsonValue;

fn request(input: &str, input_type: &str, output_type: &str) -> JsonValue {
    let payload = serde_json::json!({
        "input": input,
        "inputType": input_type,
        "outputType": output_type,
    });
    let body = convert_request_json(&payload.to_string());
    serde_json::from_str(&body).expect("response is JSON")
}

fn assert_result(response: &JsonValue, expected: &str) {
    assert_eq!(response["error"], JsonValue::Null, "response: {response}");
    assert_eq!(response["result"], expected, "response: {response}");
}

fn assert_error_contains(response: &JsonValue, needle: &str) {
    assert_eq!(response["result"], JsonValue::Null, "response: {response}");
    let error = response["error"].as_str().expect("error string");
    assert!(error.contains(needle), "expected {needle:?} in {error:?}");
}

#[test]
fn convert_request_json_text_to_decimal() {
    assert_result(&request("forty-two", "text", "decimal"), "42");
}

#[test]
fn convert_request_json_decimal_to_text() {
    assert_result(&request("42", "decimal", "text"), "forty-two");
    assert_result(&request("-42", "decimal", "text"), "minus forty-two");
}

#[test]
fn convert_request_json_between_bases() {
    assert_result(&request("101010", "binary", "hexadecimal"), "2a");
    assert_result(&request("2a", "hexadecimal", "octal"), "52");
}

#[test]
fn convert_request_json_base64_is_little_endian() {
    let expected = B64_STD.encode([42u8]);
    assert_result(&request("42", "decimal", "base64"), &expected);
    assert_result(&request(&expected, "base64", "decimal"), "42");
    let le_1024 = B64_STD.encode(1024u16.to_le_bytes());
    assert_result(&request(&le_1024, "base64", "decimal"), "1024");
}

#[test]
fn convert_request_json_large_numbers() {
    assert_result(&request("1234", "decimal", "binary"), "10011010010");
    assert_result(
        &request("1234", "decimal", "text"),
        "one thousand, two hundred and thirty-four",
    );
}

#[test]
fn convert_request_json_negative_bases_are_digit_only() {
    for (output_type, alphabet) in [
        ("binary", "01"),
        ("octal", "01234567"),
        ("hexadecimal", "0123456789abcdef"),
    ] {
        let response = request("-42", "decimal", output_type);
        let result = response["result"].as_str().expect("result string");
        assert!(
            result.chars().all(|ch| alphabet.contains(ch)),
            "{output_type}: {result}"
        );
    }
}

#[test]
fn convert_request_json_reports_invalid_types() {
    assert_error_contains(&request("42", "invalid", "decimal"), "Invalid input type");
    assert_error_contains(&request("42", "decimal", "invalid"), "Invalid output type");
}

#[test]
fn convert_request_json_reports_parse_failures() {
    assert_error_contains(
        &request("invalid text", "text", "decimal"),
        "Unable to convert text to number",
    );
    assert_error_contains(&request("123", "binary", "decimal"), "invalid literal for int()");
    assert_error_contains(&request("89", "octal", "decimal"), "invalid literal for int()");
    assert_error_contains(&request("gh", "hexadecimal", "decimal"), "invalid literal for int()");
    assert_error_contains(&request("", "decimal", "text"), "invalid literal for int()");
    assert_error_contains(&request("   ", "decimal", "text"), "invalid literal for int()");
    assert_error_contains(
        &request("invalid_base64!", "base64", "decimal"),
        "Invalid base64 input",
    );
}

#[test]
fn convert_request_json_names_missing_fields() {
    let cases = [
        (r#"{"inputType":"decimal","outputType":"text"}"#, "'input'"),
        (r#"{"input":"42","outputType":"text"}"#, "'inputType'"),
        (r#"{"input":"42","inputType":"decimal"}"#, "'outputType'"),
        (r#"{"input":null,"inputType":"decimal","outputType":"text"}"#, "'input'"),
    ];
    for (payload, field) in cases {
        let response: JsonValue =
            serde_json::from_str(&convert_request_json(payload)).expect("response is JSON");
        assert_error_contains(&response, field);
    }
}

#[test]
fn convert_request_json_rejects_malformed_payloads() {
    let response: JsonValue =
        serde_json::from_str(&convert_request_json("{not json")).expect("response is JSON");
    assert_error_contains(&response, "Invalid request payload");

    let response: JsonValue = serde_json::from_str(&convert_request_json(
        r#"{"input":42,"inputType":"decimal","outputType":"text"}"#,
    ))
    .expect("response is JSON");
    assert_error_contains(&response, "Invalid request payload");
}

#[test]
fn convert_request_json_round_trips_through_bases() {
    for intermediate in ["binary", "hexadecimal", "octal"] {
        let first = request("42", "decimal", intermediate);
        let encoded = first["result"].as_str().expect("result string");
        assert_result(&request(encoded, intermediate, "decimal"), "42");
    }
}

#[test]
fn conversion_request_fields_are_checked_in_order() {
    let empty = ConversionRequest::default();
    assert_eq!(
        convert_request_internal(&empty).error.as_deref(),
        Some("Missing required field 'input'")
    );
    let full = ConversionRequest::new("ten", "text", "octal");
    assert_eq!(convert_request_internal(&full).result.as_deref(), Some("12"));
}

#[test]
fn encode_result_always_carries_both_keys() {
    let body = encode_result(&ConversionResult::success("1".into()));
    assert_eq!(body, r#"{"error":null,"result":"1"}"#);
    let body = encode_result(&ConversionResult::failure(&ConversionError::InvalidBase64));
    assert_eq!(body, r#"{"error":"Invalid base64 input","result":null}"#);
}
