//! Decimal digit buffers for floating-point formatting
//!
//! A [`Digits`] holds the decimal expansion of a non-negative magnitude as
//! `0.d₁d₂d₃… × 10^exponent`, with no leading or trailing zeros. Every
//! rounding step is half away from zero on the digits held, which is what
//! the numeric formats promise.

/// Largest number of significant decimal digits in an `f64`
const MAX_F64_DIGITS: usize = 767;

/// Significant digits kept before applying a custom numeric pattern
pub const CUSTOM_FORMAT_PRECISION: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    digits: Vec<u8>,
    exponent: i32,
}

impl Digits {
    pub fn zero() -> Self {
        Self {
            digits: Vec::new(),
            exponent: 0,
        }
    }

    /// Exact decimal expansion of `|value|`
    pub fn exact(value: f64) -> Self {
        Self::from_scientific(&format!("{:.*e}", MAX_F64_DIGITS, value.abs()))
    }

    /// Shortest expansion of `|value|` that parses back to the same `f64`
    pub fn shortest(value: f64) -> Self {
        Self::from_scientific(&format!("{:e}", value.abs()))
    }

    /// `|value|` rounded to `precision` significant digits
    pub fn significant(value: f64, precision: usize) -> Self {
        let mut digits = Self::exact(value);
        digits.round_significant(precision);
        digits
    }

    fn from_scientific(text: &str) -> Self {
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut result = Self {
            digits,
            exponent: exponent + 1,
        };
        result.normalize();
        result
    }

    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.exponent -= leading as i32;
        }
        if self.digits.is_empty() {
            self.exponent = 0;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Position of the decimal point relative to the first digit
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Multiply by `10^power`
    pub fn scale(&mut self, power: i32) {
        if !self.is_zero() {
            self.exponent += power;
        }
    }

    /// Move the decimal point so that `exponent` becomes `value`
    pub fn set_exponent(&mut self, value: i32) {
        if !self.is_zero() {
            self.exponent = value;
        }
    }

    /// Keep the first `count` digits, rounding half up on the next one
    fn round_at(&mut self, count: i32) {
        if count < 0 {
            *self = Self::zero();
            return;
        }
        let count = count as usize;
        if count >= self.digits.len() {
            return;
        }

        let round_up = self.digits[count] >= 5;
        self.digits.truncate(count);

        if round_up {
            let mut i = count;
            loop {
                if i == 0 {
                    self.digits.insert(0, 1);
                    self.exponent += 1;
                    break;
                }
                i -= 1;
                if self.digits[i] == 9 {
                    self.digits[i] = 0;
                } else {
                    self.digits[i] += 1;
                    break;
                }
            }
        }

        self.normalize();
    }

    pub fn round_significant(&mut self, precision: usize) {
        self.round_at(precision as i32);
    }

    pub fn round_decimals(&mut self, places: usize) {
        self.round_at(self.exponent + places as i32);
    }

    fn digit_at(&self, index: i32) -> char {
        if index < 0 {
            return '0';
        }
        let d = self.digits.get(index as usize).copied().unwrap_or(0);
        char::from(b'0' + d)
    }

    /// Digits left of the decimal point; empty when the magnitude is below one
    pub fn integer_digits(&self) -> String {
        (0..self.exponent.max(0)).map(|i| self.digit_at(i)).collect()
    }

    /// The first `len` digits right of the decimal point, zero padded
    pub fn fraction_digits(&self, len: usize) -> String {
        (0..len as i32)
            .map(|i| self.digit_at(self.exponent + i))
            .collect()
    }

    /// Number of significant digits right of the decimal point
    pub fn fraction_len(&self) -> usize {
        (self.digits.len() as i32 - self.exponent).max(0) as usize
    }

    /// All significant digits as text
    pub fn significant_digits(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_shortest() {
        let d = Digits::shortest(0.1);
        assert_eq!(d.significant_digits(), "1");
        assert_eq!(d.exponent(), 0);

        // 0.1 is not exactly representable; the exact expansion is long
        let d = Digits::exact(0.1);
        assert!(d.significant_digits().len() > 50);
        assert!(d.significant_digits().starts_with("1000000000000000055511"));

        assert!(Digits::exact(0.0).is_zero());
        assert!(Digits::shortest(-0.0).is_zero());
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let mut d = Digits::exact(2.5);
        d.round_decimals(0);
        assert_eq!(d.integer_digits(), "3");

        let mut d = Digits::exact(0.125);
        d.round_decimals(2);
        assert_eq!(d.fraction_digits(2), "13");

        // 1.005 is stored as 1.00499999999999989…
        let mut d = Digits::exact(1.005);
        d.round_decimals(2);
        assert_eq!(d.integer_digits(), "1");
        assert_eq!(d.fraction_digits(2), "00");
    }

    #[test]
    fn test_round_carries() {
        let mut d = Digits::exact(9.9996);
        d.round_significant(3);
        assert_eq!(d.integer_digits(), "10");

        let mut d = Digits::exact(99.96);
        d.round_decimals(1);
        assert_eq!(d.integer_digits(), "100");
        assert_eq!(d.fraction_len(), 0);
    }

    #[test]
    fn test_round_to_zero() {
        let mut d = Digits::exact(0.0004);
        d.round_decimals(2);
        assert!(d.is_zero());

        let mut d = Digits::exact(0.005);
        d.round_decimals(2);
        assert_eq!(d.fraction_digits(2), "01");
    }

    #[test]
    fn test_integer_and_fraction_views() {
        let d = Digits::shortest(1234.5);
        assert_eq!(d.integer_digits(), "1234");
        assert_eq!(d.fraction_digits(3), "500");
        assert_eq!(d.fraction_len(), 1);

        let d = Digits::shortest(0.00123);
        assert_eq!(d.integer_digits(), "");
        assert_eq!(d.fraction_digits(5), "00123");

        let d = Digits::shortest(1e20);
        assert_eq!(d.integer_digits(), "100000000000000000000");
    }
}
