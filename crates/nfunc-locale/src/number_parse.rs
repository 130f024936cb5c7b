//! Culture-aware number parsing
//!
//! Accepts an optional leading sign, grouped integer digits, the culture's
//! decimal separator and an optional exponent. Surrounding whitespace is
//! ignored. The culture's NaN and infinity symbols are recognized too.

use nfunc_core::culture::NumberFormatInfo;
use nfunc_core::error::{NfuncError, Result};

/// Parse `text` as a number under `info`
///
/// # Examples
///
/// ```
/// use nfunc_core::Culture;
/// use nfunc_locale::parse_number;
///
/// let de = Culture::resolve("de-DE").unwrap();
/// assert_eq!(parse_number("1.234,5", &de.number).unwrap(), 1234.5);
/// assert!(parse_number("12abc", &de.number).is_err());
/// ```
pub fn parse_number(text: &str, info: &NumberFormatInfo) -> Result<f64> {
    try_parse_number(text, info).ok_or_else(|| NfuncError::InvalidNumber(text.to_string()))
}

/// Like [`parse_number`], returning `None` instead of an error
pub fn try_parse_number(text: &str, info: &NumberFormatInfo) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed == info.nan_symbol {
        return Some(f64::NAN);
    }
    if trimmed == info.positive_infinity_symbol {
        return Some(f64::INFINITY);
    }
    if trimmed == info.negative_infinity_symbol {
        return Some(f64::NEG_INFINITY);
    }

    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix(info.negative_sign) {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix(info.positive_sign) {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let (mantissa, exponent) = split_exponent(unsigned);
    let (integer, fraction) = match mantissa.split_once(info.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    let integer = strip_groups(integer, info.group_separator)?;
    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
    } else if integer.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(unsigned.len() + 1);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if integer.is_empty() { "0" } else { &integer });
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    if let Some(exponent) = exponent {
        let digits = exponent
            .strip_prefix('+')
            .or_else(|| exponent.strip_prefix('-'))
            .unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        normalized.push('e');
        normalized.push_str(exponent);
    }

    normalized.parse::<f64>().ok()
}

fn split_exponent(text: &str) -> (&str, Option<&str>) {
    match text.find(['e', 'E']) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    }
}

/// Integer digits with group separators removed
///
/// A whitespace separator also accepts a plain or non-breaking space.
fn strip_groups(integer: &str, separator: &str) -> Option<String> {
    let whitespace_separator = separator.chars().all(char::is_whitespace);
    let mut digits = String::with_capacity(integer.len());
    let mut rest = integer;

    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            digits.push(c);
            rest = &rest[1..];
        } else if !separator.is_empty() && rest.starts_with(separator) && !digits.is_empty() {
            rest = &rest[separator.len()..];
        } else if whitespace_separator && (c == ' ' || c == '\u{a0}') && !digits.is_empty() {
            rest = &rest[c.len_utf8()..];
        } else {
            return None;
        }
    }

    Some(digits)
}
