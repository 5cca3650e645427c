//! Canonical display values for literal tokens.

use super::tokens::{TokenKind, MAX_IDENTIFIER_LEN};

/// Exponents beyond this magnitude are left unnormalized.
pub const MAX_EXPONENT_SHIFT: usize = 4096;

/// Display value for a lexeme of the given kind, if that kind carries one.
pub fn normalize(kind: TokenKind, lexeme: &str) -> Option<String> {
    match kind {
        TokenKind::IntConstant => Some(normalize_int(lexeme)),
        TokenKind::DoubleConstant => Some(normalize_double(lexeme)),
        TokenKind::BoolConstant | TokenKind::StringConstant => Some(lexeme.to_string()),
        TokenKind::TruncatedIdentifier => {
            Some(lexeme.chars().take(MAX_IDENTIFIER_LEN).collect())
        }
        TokenKind::Keyword | TokenKind::Identifier | TokenKind::Operator | TokenKind::Unknown => {
            None
        }
    }
}

pub fn normalize_int(lexeme: &str) -> String {
    match lexeme
        .strip_prefix("0x")
        .or_else(|| lexeme.strip_prefix("0X"))
    {
        Some(hex) => hex_to_decimal(hex),
        None => strip_leading_zeros(lexeme),
    }
}

pub fn strip_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        String::from("0")
    } else {
        trimmed.to_string()
    }
}

/// Converts hex digits to decimal without an upper bound on the value.
pub fn hex_to_decimal(hex: &str) -> String {
    // Little-endian base-10 digits
    let mut digits: Vec<u32> = vec![0];

    for ch in hex.chars() {
        let mut carry = ch.to_digit(16).unwrap_or(0);
        for digit in digits.iter_mut() {
            let value = *digit * 16 + carry;
            *digit = value % 10;
            carry = value / 10;
        }
        while carry > 0 {
            digits.push(carry % 10);
            carry /= 10;
        }
    }

    digits
        .iter()
        .rev()
        .filter_map(|digit| char::from_digit(*digit, 10))
        .collect()
}

pub fn normalize_double(lexeme: &str) -> String {
    let (mantissa, exponent) = match lexeme.find(&['e', 'E'][..]) {
        Some(marker) => (&lexeme[..marker], Some(&lexeme[marker + 1..])),
        None => (lexeme, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    match exponent {
        Some(exponent) => shift_point(whole, fraction, exponent)
            .unwrap_or_else(|| lexeme.to_string()),
        None if fraction.is_empty() => strip_leading_zeros(whole),
        None => format!("{}.{}", strip_leading_zeros(whole), fraction),
    }
}

/// Applies a decimal exponent by moving the point, padding with zeros.
fn shift_point(whole: &str, fraction: &str, exponent: &str) -> Option<String> {
    let exponent = exponent.trim_start_matches('+');
    let (negative, magnitude) = match exponent.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, exponent),
    };
    let shift: usize = magnitude.parse().ok()?;
    if shift > MAX_EXPONENT_SHIFT {
        return None;
    }

    let mut digits = format!("{whole}{fraction}");
    let mut point = whole.len();

    if negative {
        if shift > point {
            digits.insert_str(0, &"0".repeat(shift - point));
            point = 0;
        } else {
            point -= shift;
        }
    } else {
        point += shift;
        if point > digits.len() {
            digits.push_str(&"0".repeat(point - digits.len()));
        }
    }

    let integer = strip_leading_zeros(&digits[..point]);
    let fraction = digits[point..].trim_end_matches('0');

    if fraction.is_empty() {
        Some(integer)
    } else {
        Some(format!("{integer}.{fraction}"))
    }
}
