//! Numeric formatting operations

use tracing::debug;

use nfunc_core::culture::Culture;
use nfunc_core::error::{NfuncError, Result};
use nfunc_core::types::Output;
use nfunc_locale::NumberFormatter;

/// Largest currency precision a caller may request
pub const MAX_CURRENCY_PRECISION: i32 = 99;

/// Format `number` as currency under `culture`
///
/// A non-negative `precision` replaces the culture's currency decimal
/// digits and a non-empty `symbol` replaces its currency symbol.
///
/// # Examples
///
/// ```
/// use nfunc::numeric::format_currency;
///
/// assert_eq!(format_currency(1234.5, "en-US", -1, "").unwrap().value, "$1,234.50");
/// assert_eq!(format_currency(1234.5, "de", 0, "EUR").unwrap().value, "1.235 EUR");
/// ```
pub fn format_currency(number: f64, culture: &str, precision: i32, symbol: &str) -> Result<Output> {
    let culture = Culture::resolve(culture)?;
    let mut formatter = NumberFormatter::new(&culture.number);

    if precision > MAX_CURRENCY_PRECISION {
        return Err(NfuncError::OutOfRange(format!(
            "Currency precision {precision} must be between 0 and {MAX_CURRENCY_PRECISION}."
        )));
    }
    if let Ok(digits) = usize::try_from(precision) {
        formatter = formatter.with_currency_decimal_digits(digits);
    }
    if !symbol.is_empty() {
        formatter = formatter.with_currency_symbol(symbol);
    }

    debug!("Formatting currency with culture '{}'", culture.name);
    Ok(Output::text(formatter.format(number, "C")?))
}

/// Format `number` with a numeric pattern under `culture`
pub fn format_number(number: f64, pattern: &str, culture: &str) -> Result<Output> {
    let culture = Culture::resolve(culture)?;
    let value = NumberFormatter::new(&culture.number).format(number, pattern)?;
    Ok(Output::text(value))
}
