// Shared text-shaping helpers used by the number-word parser.

/// Lower-cases the input and drops surrounding whitespace plus any trailing
/// punctuation, so `"Forty-Two!"` becomes `"forty-two"`.
pub fn normalize_text(input: &str) -> String {
    input
        .trim_start()
        .trim_end_matches(|ch: char| !ch.is_alphanumeric())
        .to_lowercase()
}

/// Splits number words on whitespace, commas and hyphens, dropping empty pieces.
pub fn split_words(s: &str) -> Vec<&str> {
    s.split(|ch: char| ch.is_whitespace() || ch == ',' || ch == '-')
        .filter(|part| !part.is_empty())
        .collect()
}

/// Returns true when every character is an ASCII digit (and there is at least one).
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
