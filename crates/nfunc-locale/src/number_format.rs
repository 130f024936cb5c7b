//! Culture-aware numeric formatting
//!
//! Supports the one-letter standard formats (`C`, `E`, `F`, `G`, `N`, `P`,
//! `R`, each with an optional precision) and custom patterns built from `0`,
//! `#`, `.`, `,`, `%`, `‰`, exponent markers, `;` sections, quoted literals
//! and `\` escapes.
//!
//! # Examples
//!
//! ```
//! use nfunc_core::Culture;
//! use nfunc_locale::NumberFormatter;
//!
//! let culture = Culture::resolve("en-US").unwrap();
//! let formatter = NumberFormatter::new(&culture.number);
//! assert_eq!(formatter.format(1234.567, "N2").unwrap(), "1,234.57");
//! assert_eq!(formatter.format(-0.5, "0.0;(0.0)").unwrap(), "(0.5)");
//! assert_eq!(formatter.format(1234.5, "C").unwrap(), "$1,234.50");
//! ```

use nfunc_core::culture::{
    CURRENCY_NEGATIVE_PATTERNS, CURRENCY_POSITIVE_PATTERNS, NUMBER_NEGATIVE_PATTERNS,
    NumberFormatInfo, PERCENT_NEGATIVE_PATTERNS, PERCENT_POSITIVE_PATTERNS,
};
use nfunc_core::error::{NfuncError, Result};

use crate::digits::{CUSTOM_FORMAT_PRECISION, Digits};

/// Largest precision accepted after a standard format letter
pub const MAX_PRECISION: usize = 999;

/// Significant digits that decide when `G`/`R` switch to scientific notation
const GENERAL_SCIENTIFIC_THRESHOLD: i32 = 15;

/// Formats `f64` values under one culture's numeric conventions
///
/// The currency symbol and currency decimal digits start as the culture's
/// and can be overridden per call site.
#[derive(Debug, Clone, Copy)]
pub struct NumberFormatter<'a> {
    info: &'a NumberFormatInfo,
    currency_symbol: &'a str,
    currency_decimal_digits: usize,
}

impl<'a> NumberFormatter<'a> {
    /// Create a formatter using the culture's conventions unchanged
    pub fn new(info: &'a NumberFormatInfo) -> Self {
        Self {
            info,
            currency_symbol: info.currency_symbol,
            currency_decimal_digits: info.currency_decimal_digits,
        }
    }

    /// Replace the currency symbol
    pub fn with_currency_symbol(mut self, symbol: &'a str) -> Self {
        self.currency_symbol = symbol;
        self
    }

    /// Replace the default number of currency decimal digits
    pub fn with_currency_decimal_digits(mut self, digits: usize) -> Self {
        self.currency_decimal_digits = digits;
        self
    }

    /// Format `value` with a standard or custom numeric format string
    ///
    /// An empty format behaves like `G`.
    pub fn format(&self, value: f64, format: &str) -> Result<String> {
        if value.is_nan() {
            return Ok(self.info.nan_symbol.to_string());
        }
        if value.is_infinite() {
            let symbol = if value > 0.0 {
                self.info.positive_infinity_symbol
            } else {
                self.info.negative_infinity_symbol
            };
            return Ok(symbol.to_string());
        }

        match parse_standard(format)? {
            Some((specifier, precision)) => self.format_standard(value, specifier, precision),
            None => Ok(self.format_custom(value, format)),
        }
    }

    fn format_standard(
        &self,
        value: f64,
        specifier: char,
        precision: Option<usize>,
    ) -> Result<String> {
        let info = self.info;
        let negative = value.is_sign_negative();

        let text = match specifier.to_ascii_uppercase() {
            'C' => {
                let digits = precision.unwrap_or(self.currency_decimal_digits);
                let body = self.fixed(value, digits, true, 0);
                let pattern = if negative {
                    CURRENCY_NEGATIVE_PATTERNS[info.currency_negative_pattern]
                } else {
                    CURRENCY_POSITIVE_PATTERNS[info.currency_positive_pattern]
                };
                self.apply_pattern(pattern, &body, self.currency_symbol)
            }
            'F' => {
                let digits = precision.unwrap_or(info.number_decimal_digits);
                let body = self.fixed(value, digits, false, 0);
                self.signed(negative, body)
            }
            'N' => {
                let digits = precision.unwrap_or(info.number_decimal_digits);
                let body = self.fixed(value, digits, true, 0);
                if negative {
                    let pattern = NUMBER_NEGATIVE_PATTERNS[info.number_negative_pattern];
                    self.apply_pattern(pattern, &body, "")
                } else {
                    body
                }
            }
            'P' => {
                let digits = precision.unwrap_or(info.percent_decimal_digits);
                let body = self.fixed(value, digits, true, 2);
                let pattern = if negative {
                    PERCENT_NEGATIVE_PATTERNS[info.percent_negative_pattern]
                } else {
                    PERCENT_POSITIVE_PATTERNS[info.percent_positive_pattern]
                };
                self.apply_pattern(pattern, &body, info.percent_symbol)
            }
            'E' => {
                let upper = specifier.is_ascii_uppercase();
                let body = self.scientific(value, precision.unwrap_or(6), upper);
                self.signed(negative, body)
            }
            'G' => {
                let body = self.general(value, precision, specifier.is_ascii_uppercase());
                self.signed(negative, body)
            }
            'R' => {
                let body = self.general(value, None, specifier.is_ascii_uppercase());
                self.signed(negative, body)
            }
            'D' | 'X' => {
                return Err(NfuncError::InvalidFormat(format!(
                    "Format specifier '{specifier}' is only valid for integral types."
                )));
            }
            _ => {
                return Err(NfuncError::InvalidFormat(format!(
                    "Format specifier '{specifier}' was invalid."
                )));
            }
        };

        Ok(text)
    }

    fn signed(&self, negative: bool, body: String) -> String {
        if negative {
            format!("{}{}", self.info.negative_sign, body)
        } else {
            body
        }
    }

    /// Substitute `n`, the symbol (`$` or `%`) and `-` into a layout pattern
    fn apply_pattern(&self, pattern: &str, body: &str, symbol: &str) -> String {
        let mut out = String::with_capacity(body.len() + symbol.len() + 4);
        for c in pattern.chars() {
            match c {
                'n' => out.push_str(body),
                '$' | '%' => out.push_str(symbol),
                '-' => out.push_str(self.info.negative_sign),
                other => out.push(other),
            }
        }
        out
    }

    /// Unsigned fixed-point text of `|value| × 10^scale`
    fn fixed(&self, value: f64, decimals: usize, group: bool, scale: i32) -> String {
        let mut digits = Digits::exact(value);
        digits.scale(scale);
        digits.round_decimals(decimals);

        let mut integer = digits.integer_digits();
        if integer.is_empty() {
            integer.push('0');
        }

        let mut out = if group { self.group(&integer) } else { integer };
        if decimals > 0 {
            out.push_str(self.info.decimal_separator);
            out.push_str(&digits.fraction_digits(decimals));
        }
        out
    }

    fn group(&self, integer: &str) -> String {
        group_pieces(integer, self.info.group_sizes, self.info.group_separator).concat()
    }

    fn scientific(&self, value: f64, precision: usize, upper: bool) -> String {
        let mut digits = Digits::exact(value);
        digits.round_significant(precision + 1);
        let exponent = if digits.is_zero() { 0 } else { digits.exponent() - 1 };
        digits.set_exponent(1);

        let mut out = digits.integer_digits();
        if out.is_empty() {
            out.push('0');
        }
        if precision > 0 {
            out.push_str(self.info.decimal_separator);
            out.push_str(&digits.fraction_digits(precision));
        }
        out.push(if upper { 'E' } else { 'e' });
        out.push_str(&self.exponent_text(exponent, true, 3));
        out
    }

    fn general(&self, value: f64, precision: Option<usize>, upper: bool) -> String {
        let (digits, threshold) = match precision {
            Some(p) if p > 0 => (Digits::significant(value, p), p as i32),
            _ => (Digits::shortest(value), GENERAL_SCIENTIFIC_THRESHOLD),
        };
        if digits.is_zero() {
            return "0".to_string();
        }

        let exponent = digits.exponent() - 1;
        if exponent >= threshold || exponent < -4 {
            let significant = digits.significant_digits();
            let (first, rest) = significant.split_at(1);
            let mut out = first.to_string();
            if !rest.is_empty() {
                out.push_str(self.info.decimal_separator);
                out.push_str(rest);
            }
            out.push(if upper { 'E' } else { 'e' });
            out.push_str(&self.exponent_text(exponent, true, 2));
            out
        } else {
            let mut out = digits.integer_digits();
            if out.is_empty() {
                out.push('0');
            }
            let fraction_len = digits.fraction_len();
            if fraction_len > 0 {
                out.push_str(self.info.decimal_separator);
                out.push_str(&digits.fraction_digits(fraction_len));
            }
            out
        }
    }

    fn exponent_text(&self, exponent: i32, always_sign: bool, min_digits: usize) -> String {
        let sign = if exponent < 0 {
            self.info.negative_sign
        } else if always_sign {
            self.info.positive_sign
        } else {
            ""
        };
        format!("{sign}{:0width$}", exponent.unsigned_abs(), width = min_digits)
    }

    fn format_custom(&self, value: f64, format: &str) -> String {
        let sections = split_sections(format);
        let negative = value < 0.0;
        let base = Digits::significant(value, CUSTOM_FORMAT_PRECISION);

        let pick = |index: usize| {
            if index < sections.len() && !sections[index].is_empty() {
                index
            } else {
                0
            }
        };

        let mut index = pick(if base.is_zero() {
            2
        } else if negative {
            1
        } else {
            0
        });

        loop {
            let section = Section::parse(sections[index]);
            let (digits, exponent) = section.round(&base);

            if digits.is_zero() {
                let zero_index = pick(2);
                if zero_index != index {
                    index = zero_index;
                    continue;
                }
            }

            let sign = negative && index == 0 && !digits.is_zero();
            return self.render(&section, &digits, exponent, sign);
        }
    }

    fn render(&self, section: &Section, digits: &Digits, exponent: i32, sign: bool) -> String {
        let info = self.info;

        let mut integer = digits.integer_digits();
        if integer.len() < section.min_int_digits {
            integer = "0".repeat(section.min_int_digits - integer.len()) + &integer;
        }
        let pieces: Vec<String> = if section.grouping {
            group_pieces(&integer, info.group_sizes, info.group_separator)
        } else {
            integer.chars().map(String::from).collect()
        };

        let all_fraction = digits.fraction_digits(section.frac_placeholders);
        let significant = all_fraction.trim_end_matches('0').len();
        let fraction = &all_fraction[..significant.max(section.min_frac_digits)];

        let mut out = String::new();
        if sign {
            out.push_str(info.negative_sign);
        }

        let slots = section.int_placeholders;
        let mut int_slot = 0;
        let mut frac_slot = 0;
        let mut after_point = false;

        for item in &section.items {
            match item {
                Item::Digit { .. } if !after_point => {
                    out.push_str(&slot_text(&pieces, slots, int_slot));
                    int_slot += 1;
                }
                Item::Digit { .. } => {
                    if let Some(c) = fraction.as_bytes().get(frac_slot) {
                        out.push(char::from(*c));
                    }
                    frac_slot += 1;
                }
                Item::Point => {
                    if slots == 0 {
                        out.push_str(&pieces.concat());
                    }
                    if !fraction.is_empty() {
                        out.push_str(info.decimal_separator);
                    }
                    after_point = true;
                }
                Item::Group => {}
                Item::Percent => out.push_str(info.percent_symbol),
                Item::PerMille => out.push_str(info.per_mille_symbol),
                Item::Exponent {
                    upper,
                    always_sign,
                    min_digits,
                } => {
                    out.push(if *upper { 'E' } else { 'e' });
                    out.push_str(&self.exponent_text(exponent, *always_sign, *min_digits));
                }
                Item::Literal(text) => out.push_str(text),
            }
        }

        out
    }
}

/// Split a standard format into its letter and precision
///
/// Returns `None` for custom patterns.
fn parse_standard(format: &str) -> Result<Option<(char, Option<usize>)>> {
    let mut chars = format.chars();
    let Some(first) = chars.next() else {
        return Ok(Some(('G', None)));
    };
    if !first.is_ascii_alphabetic() {
        return Ok(None);
    }

    let rest = chars.as_str();
    if rest.is_empty() {
        return Ok(Some((first, None)));
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    match rest.parse::<usize>() {
        Ok(precision) if precision <= MAX_PRECISION => Ok(Some((first, Some(precision)))),
        _ => Err(NfuncError::InvalidFormat(format!(
            "Precision in '{format}' must be between 0 and {MAX_PRECISION}."
        ))),
    }
}

/// Integer digits as pieces, each carrying a trailing group separator when
/// one follows it
fn group_pieces(integer: &str, sizes: &[usize], separator: &str) -> Vec<String> {
    let len = integer.len();
    let mut boundaries = Vec::new();
    let mut acc = 0;
    let mut index = 0;
    loop {
        let size = sizes.get(index).or(sizes.last()).copied().unwrap_or(0);
        if size == 0 {
            break;
        }
        acc += size;
        if acc >= len {
            break;
        }
        boundaries.push(acc);
        if index + 1 < sizes.len() {
            index += 1;
        }
    }

    integer
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let remaining_after = len - i - 1;
            if boundaries.contains(&remaining_after) {
                format!("{c}{separator}")
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Text for integer placeholder `slot` of `slots`; the leftmost takes any
/// digits that have no placeholder of their own
fn slot_text(pieces: &[String], slots: usize, slot: usize) -> String {
    let index = pieces.len() as isize - slots as isize + slot as isize;
    if index < 0 {
        return String::new();
    }
    let index = index as usize;
    if slot == 0 {
        pieces[..=index].concat()
    } else {
        pieces[index].clone()
    }
}

fn split_sections(format: &str) -> Vec<&str> {
    let mut sections = Vec::with_capacity(3);
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in format.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (c, quote) {
            ('\\', _) => escaped = true,
            ('\'' | '"', None) => quote = Some(c),
            (q, Some(open)) if q == open => quote = None,
            (';', None) => {
                sections.push(&format[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    sections.push(&format[start..]);
    sections.truncate(3);
    sections
}

#[derive(Debug, Clone, PartialEq)]
enum Item {
    Digit { zero: bool },
    Point,
    Group,
    Percent,
    PerMille,
    Exponent {
        upper: bool,
        always_sign: bool,
        min_digits: usize,
    },
    Literal(String),
}

/// One `;`-separated section of a custom numeric pattern
#[derive(Debug)]
struct Section {
    items: Vec<Item>,
    int_placeholders: usize,
    min_int_digits: usize,
    frac_placeholders: usize,
    min_frac_digits: usize,
    grouping: bool,
    scale: i32,
    scientific: bool,
}

impl Section {
    fn parse(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut items = Vec::new();
        let mut seen_point = false;
        let mut seen_exponent = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match c {
                '0' | '#' => items.push(Item::Digit { zero: c == '0' }),
                '.' => {
                    if !seen_point {
                        seen_point = true;
                        items.push(Item::Point);
                    }
                }
                ',' => items.push(Item::Group),
                '%' => items.push(Item::Percent),
                '‰' => items.push(Item::PerMille),
                'E' | 'e' if !seen_exponent => {
                    let mut j = i + 1;
                    let mut always_sign = false;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        always_sign = chars[j] == '+';
                        j += 1;
                    }
                    let start = j;
                    while j < chars.len() && chars[j] == '0' {
                        j += 1;
                    }
                    if j > start {
                        seen_exponent = true;
                        items.push(Item::Exponent {
                            upper: c == 'E',
                            always_sign,
                            min_digits: j - start,
                        });
                        i = j;
                        continue;
                    }
                    items.push(Item::Literal(c.to_string()));
                }
                '\\' => {
                    if let Some(next) = chars.get(i + 1) {
                        items.push(Item::Literal(next.to_string()));
                        i += 2;
                        continue;
                    }
                }
                '\'' | '"' => {
                    let close = chars[i + 1..]
                        .iter()
                        .position(|&q| q == c)
                        .map(|p| p + i + 1)
                        .unwrap_or(chars.len());
                    items.push(Item::Literal(chars[i + 1..close].iter().collect()));
                    i = close + 1;
                    continue;
                }
                other => items.push(Item::Literal(other.to_string())),
            }
            i += 1;
        }

        let point = items
            .iter()
            .position(|item| *item == Item::Point)
            .unwrap_or(items.len());
        let (integer_items, fraction_items) = items.split_at(point);

        let int_digits: Vec<bool> = integer_items
            .iter()
            .filter_map(|item| match item {
                Item::Digit { zero } => Some(*zero),
                _ => None,
            })
            .collect();
        let frac_digits: Vec<bool> = fraction_items
            .iter()
            .filter_map(|item| match item {
                Item::Digit { zero } => Some(*zero),
                _ => None,
            })
            .collect();

        let int_placeholders = int_digits.len();
        let min_int_digits = int_digits
            .iter()
            .position(|&zero| zero)
            .map(|first| int_placeholders - first)
            .unwrap_or(0);
        let frac_placeholders = frac_digits.len();
        let min_frac_digits = frac_digits
            .iter()
            .rposition(|&zero| zero)
            .map(|last| last + 1)
            .unwrap_or(0);

        let mut grouping = false;
        let mut scaling_commas = 0;
        let mut digits_before = 0;
        for item in integer_items {
            match item {
                Item::Digit { .. } => digits_before += 1,
                Item::Group if digits_before == 0 => {}
                Item::Group if digits_before == int_placeholders => scaling_commas += 1,
                Item::Group => grouping = true,
                _ => {}
            }
        }

        let percents = items.iter().filter(|item| **item == Item::Percent).count() as i32;
        let per_milles = items.iter().filter(|item| **item == Item::PerMille).count() as i32;
        let scientific = items
            .iter()
            .any(|item| matches!(item, Item::Exponent { .. }));

        Self {
            items,
            int_placeholders,
            min_int_digits,
            frac_placeholders,
            min_frac_digits,
            grouping,
            scale: 2 * percents + 3 * per_milles - 3 * scaling_commas,
            scientific,
        }
    }

    /// Scale and round the base digits; returns the digits and, for
    /// scientific sections, the exponent to print
    fn round(&self, base: &Digits) -> (Digits, i32) {
        let mut digits = base.clone();
        digits.scale(self.scale);

        if self.scientific {
            digits.round_significant((self.int_placeholders + self.frac_placeholders).max(1));
            let exponent = if digits.is_zero() {
                0
            } else {
                digits.exponent() - self.int_placeholders as i32
            };
            digits.set_exponent(self.int_placeholders as i32);
            (digits, exponent)
        } else {
            digits.round_decimals(self.frac_placeholders);
            (digits, 0)
        }
    }
}
