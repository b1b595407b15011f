//! English number words.
//!
//! Rendering follows the British "and" style: `123` is "one hundred and
//! twenty-three" and `1234` is "one thousand, two hundred and thirty-four".
//! Scale words run from thousand to decillion; larger values chain scale words
//! ("one thousand decillion").
//!
//! Parsing is a static word table plus a small grammar over groups below one
//! thousand. A group is an optional hundreds part followed by tens and units,
//! each group may be closed by a scale word, and scales must descend. `and`,
//! commas and hyphens are accepted as connectors, `minus`/`negative` (or a
//! leading `-`) negate, `nil` is zero and `a` stands for one before `hundred`
//! or a scale word.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::convert::helpers::{is_all_digits, normalize_text, split_words};
use crate::error::ConversionError;

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Index `i` is 1000^(i + 1).
const SCALES: [&str; 11] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

// Power of one thousand named by the last scale word.
const DECILLION: u32 = SCALES.len() as u32;

/// Renders `value` as English words; negatives get a "minus " prefix.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use numconv_core::convert::words::number_to_text;
///
/// assert_eq!(number_to_text(&BigInt::from(-42)), "minus forty-two");
/// ```
pub fn number_to_text(value: &BigInt) -> String {
    if value.is_zero() {
        return UNITS[0].to_string();
    }
    let words = magnitude_words(value.magnitude());
    if value.is_negative() {
        format!("minus {words}")
    } else {
        words
    }
}

fn magnitude_words(n: &BigUint) -> String {
    let mut groups = Vec::new();
    let mut rest = n.clone();
    while !rest.is_zero() {
        groups.push((&rest % 1000u32).to_u32().unwrap_or_default());
        rest /= 1000u32;
    }

    let mut parts = Vec::new();
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let mut part = group_words(group);
        if index > 0 {
            part.push(' ');
            part.push_str(&scale_name(index));
        }
        parts.push(part);
    }

    let lowest = groups.first().copied().unwrap_or_default();
    match parts.pop() {
        Some(last) if !parts.is_empty() && lowest > 0 && lowest < 100 => {
            format!("{} and {}", parts.join(", "), last)
        }
        Some(last) => {
            parts.push(last);
            parts.join(", ")
        }
        None => UNITS[0].to_string(),
    }
}

/// Words for 1..=999.
fn group_words(group: u32) -> String {
    let hundreds = group / 100;
    let rem = group % 100;
    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(UNITS[hundreds as usize]);
        out.push_str(" hundred");
        if rem > 0 {
            out.push_str(" and ");
        }
    }
    if rem > 0 {
        out.push_str(&tens_words(rem));
    }
    out
}

fn tens_words(n: u32) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }
    let tens = TENS[(n / 10 - 2) as usize];
    match n % 10 {
        0 => tens.to_string(),
        unit => format!("{}-{}", tens, UNITS[unit as usize]),
    }
}

/// Scale word for the thousands group at `index` (1 = thousand).
fn scale_name(index: usize) -> String {
    let mut index = index;
    let mut chained = 0;
    while index > SCALES.len() {
        index -= SCALES.len();
        chained += 1;
    }
    let mut name = SCALES[index - 1].to_string();
    for _ in 0..chained {
        name.push(' ');
        name.push_str(SCALES[SCALES.len() - 1]);
    }
    name
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Word {
    Zero,
    /// 1..=9
    Unit(u32),
    /// 10..=19
    Teen(u32),
    /// 20, 30, .., 90
    Tens(u32),
    Hundred,
    /// Power of one thousand.
    Scale(u32),
    And,
    Article,
    Digits(BigUint),
}

fn classify(token: &str) -> Option<Word> {
    if token == "nil" {
        return Some(Word::Zero);
    }
    if let Some(value) = UNITS.iter().position(|unit| *unit == token) {
        let value = value as u32;
        return Some(match value {
            0 => Word::Zero,
            1..=9 => Word::Unit(value),
            _ => Word::Teen(value),
        });
    }
    if let Some(index) = TENS.iter().position(|tens| *tens == token) {
        return Some(Word::Tens((index as u32 + 2) * 10));
    }
    if let Some(index) = SCALES.iter().position(|scale| *scale == token) {
        return Some(Word::Scale(index as u32 + 1));
    }
    match token {
        "hundred" => Some(Word::Hundred),
        "and" => Some(Word::And),
        "a" => Some(Word::Article),
        _ if is_all_digits(token) => BigUint::parse_bytes(token.as_bytes(), 10).map(Word::Digits),
        _ => None,
    }
}

/// The group below one thousand currently being read.
#[derive(Default)]
struct Group {
    value: BigUint,
    started: bool,
    hundred: bool,
    tens: bool,
    unit: bool,
}

impl Group {
    fn value_or_one(&self) -> BigUint {
        if self.started {
            self.value.clone()
        } else {
            BigUint::one()
        }
    }
}

/// Parses English number words into an integer.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use numconv_core::convert::words::text_to_number;
///
/// let value = text_to_number("One thousand, two hundred and thirty-four.").unwrap();
/// assert_eq!(value, BigInt::from(1234));
/// ```
pub fn text_to_number(input: &str) -> Result<BigInt, ConversionError> {
    let normalized = normalize_text(input);
    let (dash_sign, body) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };
    let (word_sign, body) = match strip_sign_word(body) {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    if dash_sign && word_sign {
        return Err(ConversionError::UnknownText);
    }
    let tokens = split_words(body);
    let magnitude = parse_magnitude(&tokens).ok_or(ConversionError::UnknownText)?;
    let sign = if dash_sign || word_sign {
        Sign::Minus
    } else {
        Sign::Plus
    };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Strips a leading `minus`/`negative`, optionally hyphen-joined ("minus-five").
/// Returns `None` when there is no sign word or another `-` follows it.
fn strip_sign_word(body: &str) -> Option<&str> {
    let body = body.trim_start();
    let rest = ["minus", "negative"]
        .into_iter()
        .find_map(|word| body.strip_prefix(word))?;
    let rest = match rest.strip_prefix('-') {
        Some(joined) => joined,
        None if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        None => return None,
    };
    let rest = rest.trim_start();
    if rest.starts_with('-') {
        return None;
    }
    Some(rest)
}

fn parse_magnitude(tokens: &[&str]) -> Option<BigUint> {
    let words = tokens
        .iter()
        .map(|token| classify(token))
        .collect::<Option<Vec<_>>>()?;
    match words.as_slice() {
        [] => return None,
        [Word::Zero] => return Some(BigUint::zero()),
        _ => {}
    }

    let thousand = BigUint::from(1000u32);
    let mut total = BigUint::zero();
    let mut group = Group::default();
    let mut last_scale: Option<u32> = None;
    let mut idx = 0;
    while idx < words.len() {
        let next = words.get(idx + 1);
        match &words[idx] {
            Word::Zero => return None,
            Word::And => {
                let has_before = group.started || last_scale.is_some();
                if !has_before || next.is_none() || next == Some(&Word::And) {
                    return None;
                }
            }
            Word::Article => {
                if group.started || !matches!(next, Some(Word::Hundred | Word::Scale(_))) {
                    return None;
                }
                group.value = BigUint::one();
                group.started = true;
                group.unit = true;
            }
            Word::Unit(n) => {
                if group.unit {
                    return None;
                }
                group.value += *n;
                group.started = true;
                group.unit = true;
            }
            Word::Teen(n) => {
                if group.tens || group.unit {
                    return None;
                }
                group.value += *n;
                group.started = true;
                group.tens = true;
                group.unit = true;
            }
            Word::Tens(n) => {
                if group.tens || group.unit {
                    return None;
                }
                group.value += *n;
                group.started = true;
                group.tens = true;
            }
            Word::Hundred => {
                // "twelve hundred" is fine, "one hundred hundred" and
                // "one thousand hundred" are not.
                if group.hundred
                    || group.value >= BigUint::from(100u32)
                    || (last_scale.is_some() && !group.started)
                {
                    return None;
                }
                group.value = group.value_or_one() * 100u32;
                group.started = true;
                group.hundred = true;
                group.tens = false;
                group.unit = false;
            }
            Word::Digits(n) => {
                if group.started {
                    return None;
                }
                group.value = n.clone();
                group.started = true;
                group.tens = true;
                group.unit = true;
            }
            Word::Scale(first) => {
                let mut exponent = *first;
                // Only decillion chains onto a scale: "thousand decillion".
                while let Some(Word::Scale(more)) = words.get(idx + 1) {
                    if *more != DECILLION {
                        return None;
                    }
                    exponent += *more;
                    idx += 1;
                }
                if let Some(previous) = last_scale {
                    if exponent >= previous || group.value >= thousand {
                        return None;
                    }
                }
                total += group.value_or_one() * thousand.pow(exponent);
                last_scale = Some(exponent);
                group = Group::default();
            }
        }
        idx += 1;
    }
    if last_scale.is_some() && group.value >= thousand {
        return None;
    }
    Some(total + group.value)
}
