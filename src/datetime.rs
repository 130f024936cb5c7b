//! Date and time operations
//!
//! Every operation parses its text input with the invariant-culture
//! [`DateParser`] against the process [`Zones`], and most answer in the
//! canonical display format (`M/d/yyyy h:mm:ss tt`) paired with the instant
//! in epoch milliseconds.
//!
//! # Examples
//!
//! ```
//! use chrono_tz::Tz;
//! use nfunc::datetime;
//! use nfunc_core::{DateTimeUnit, Zones};
//!
//! let zones = Zones::new(Tz::UTC);
//! let out = datetime::add(&zones, "1/31/2024 12:00:00 AM", 1, Some(DateTimeUnit::Month)).unwrap();
//! assert_eq!(out.value, "2/29/2024 12:00:00 AM");
//!
//! let out = datetime::part(&zones, "2/29/2024 3:07:00 PM", Some(DateTimeUnit::Hour)).unwrap();
//! assert_eq!(out.value, "3");
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Months, TimeDelta};
use tracing::debug;

use nfunc_core::culture::Culture;
use nfunc_core::error::{NfuncError, Result};
use nfunc_core::timezone::Zones;
use nfunc_core::types::{DateTimeUnit, Output};
use nfunc_locale::{DateParser, NumberFormatter, format_date};

/// Canonical display pattern: month/day/year with a 12-hour clock
pub const DISPLAY_PATTERN: &str = "M/d/yyyy h:mm:ss tt";

/// Earliest epoch millisecond that displays at the system offset
pub const MIN_EPOCH_MILLIS: i64 = -62_135_596_800_000;

/// Latest epoch millisecond that displays at the system offset
pub const MAX_EPOCH_MILLIS: i64 = 253_402_300_799_999;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;
const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Parse date-time text with the invariant culture
pub fn parse_text(zones: &Zones, text: &str) -> Result<DateTime<FixedOffset>> {
    DateParser::new(&Culture::invariant().date, zones).parse(text)
}

/// Canonical display text of `dt`
pub fn display(dt: &DateTime<FixedOffset>) -> Result<String> {
    format_date(dt, DISPLAY_PATTERN, &Culture::invariant().date)
}

fn display_instant(dt: &DateTime<FixedOffset>) -> Result<Output> {
    Ok(Output::instant(display(dt)?, dt.timestamp_millis()))
}

/// Reject instants whose UTC reading leaves years 1 through 9999
fn ensure_representable(dt: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    let year = dt.naive_utc().year();
    if (1..=9999).contains(&year) && (1..=9999).contains(&dt.year()) {
        Ok(dt)
    } else {
        Err(NfuncError::OutOfRange(
            "The added or subtracted value results in an un-representable DateTime.".to_string(),
        ))
    }
}

fn add_months(dt: DateTime<FixedOffset>, months: i64) -> Result<DateTime<FixedOffset>> {
    let out_of_range = || NfuncError::OutOfRange(format!("Cannot add {months} months to {dt}."));
    let count = u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range())?;
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(count))
    } else {
        dt.checked_sub_months(Months::new(count))
    };
    shifted.ok_or_else(out_of_range)
}

fn add_delta(dt: DateTime<FixedOffset>, delta: TimeDelta) -> Result<DateTime<FixedOffset>> {
    dt.checked_add_signed(delta)
        .ok_or_else(|| NfuncError::OutOfRange(format!("Cannot add {delta} to {dt}.")))
}

/// Add `addend` units to the parsed date
///
/// Years and months move the calendar date, clamping the day to the end of
/// a shorter month. Days, hours and minutes are fixed durations. The offset
/// of the input is kept. An unrecognized unit returns the input unchanged.
pub fn add(zones: &Zones, text: &str, addend: i32, unit: Option<DateTimeUnit>) -> Result<Output> {
    let dt = parse_text(zones, text)?;
    let addend = i64::from(addend);

    let sum = match unit {
        Some(DateTimeUnit::Year) => add_months(dt, addend * 12)?,
        Some(DateTimeUnit::Month) => add_months(dt, addend)?,
        Some(DateTimeUnit::Day) => add_delta(dt, TimeDelta::days(addend))?,
        Some(DateTimeUnit::Hour) => add_delta(dt, TimeDelta::hours(addend))?,
        Some(DateTimeUnit::Minute) => add_delta(dt, TimeDelta::minutes(addend))?,
        None => {
            debug!("Unrecognized unit for date add, returning input unchanged");
            dt
        }
    };

    display_instant(&ensure_representable(sum)?)
}

/// Absolute difference `minuend − subtrahend` in `unit`
///
/// Years and months compare calendar fields; days, hours and minutes are
/// fractional elapsed time. An unrecognized unit yields `0`.
pub fn diff(
    zones: &Zones,
    minuend: &str,
    subtrahend: &str,
    unit: Option<DateTimeUnit>,
) -> Result<Output> {
    let minuend = parse_text(zones, minuend)?;
    let subtrahend = parse_text(zones, subtrahend)?;

    let elapsed = || -> Result<f64> {
        (minuend - subtrahend)
            .num_microseconds()
            .map(|micros| micros as f64)
            .ok_or_else(|| NfuncError::OutOfRange("Date difference is too large.".to_string()))
    };

    let difference = match unit {
        Some(DateTimeUnit::Year) => f64::from(minuend.year() - subtrahend.year()),
        Some(DateTimeUnit::Month) => {
            let years = minuend.year() - subtrahend.year();
            let months = minuend.month() as i32 - subtrahend.month() as i32;
            f64::from(years * 12 + months)
        }
        Some(DateTimeUnit::Day) => elapsed()? / MICROS_PER_DAY,
        Some(DateTimeUnit::Hour) => elapsed()? / MICROS_PER_HOUR,
        Some(DateTimeUnit::Minute) => elapsed()? / MICROS_PER_MINUTE,
        None => {
            debug!("Unrecognized unit for date diff, returning zero");
            0.0
        }
    };

    let text = NumberFormatter::new(&Culture::invariant().number).format(difference.abs(), "R")?;
    Ok(Output::text(text))
}

/// Parse and redisplay a date
///
/// With `is_utc`, the local zone's offset at the parsed instant is
/// subtracted from the value while the displayed offset stays the same.
pub fn parse(zones: &Zones, text: &str, is_utc: bool) -> Result<Output> {
    let dt = parse_text(zones, text)?;
    let dt = if is_utc {
        let offset = zones.local_offset_at(&dt.naive_utc());
        let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        ensure_representable(add_delta(dt, -shift)?)?
    } else {
        dt
    };
    display_instant(&dt)
}

/// One component of the date as text
///
/// Year is four digits; month, day and minute are two digits; hour is on the
/// 12-hour clock without padding. An unrecognized unit yields empty text.
pub fn part(zones: &Zones, text: &str, unit: Option<DateTimeUnit>) -> Result<Output> {
    let dt = parse_text(zones, text)?;
    let pattern = match unit {
        Some(DateTimeUnit::Year) => "yyyy",
        Some(DateTimeUnit::Month) => "MM",
        Some(DateTimeUnit::Day) => "dd",
        Some(DateTimeUnit::Hour) => "%h",
        Some(DateTimeUnit::Minute) => "mm",
        None => return Ok(Output::text("")),
    };
    Ok(Output::text(format_date(&dt, pattern, &Culture::invariant().date)?))
}

/// Format the parsed date with a date pattern and optional time pattern
///
/// A non-empty `time_format` is appended to `date_format` after a space.
/// An empty `culture` selects the invariant conventions.
pub fn format(
    zones: &Zones,
    text: &str,
    date_format: &str,
    time_format: &str,
    culture: &str,
) -> Result<Output> {
    let pattern = if time_format.is_empty() {
        date_format.to_string()
    } else {
        format!("{date_format} {time_format}")
    };
    let culture = Culture::resolve(culture)?;
    let dt = parse_text(zones, text)?;
    let value = format_date(&dt, &pattern, &culture.date)?;
    Ok(Output::instant(value, dt.timestamp_millis()))
}

/// Same instant displayed at the system offset
pub fn to_system(zones: &Zones, text: &str) -> Result<Output> {
    let dt = parse_text(zones, text)?;
    display_instant(&ensure_representable(zones.to_system(&dt))?)
}

/// Same instant displayed at the local zone's standard offset
pub fn to_local(zones: &Zones, text: &str) -> Result<Output> {
    let dt = parse_text(zones, text)?;
    display_instant(&ensure_representable(zones.to_local(&dt))?)
}

/// The current instant at the system offset
pub fn now(zones: &Zones) -> Result<Output> {
    display_instant(&zones.now_system())
}

/// Display an epoch-millisecond instant at the system offset
///
/// The data payload echoes `epoch_millis`.
pub fn from_epoch_millis(zones: &Zones, epoch_millis: i64) -> Result<Output> {
    if !(MIN_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&epoch_millis) {
        return Err(NfuncError::OutOfRange(format!(
            "Valid values are between {MIN_EPOCH_MILLIS} and {MAX_EPOCH_MILLIS}, inclusive."
        )));
    }
    let utc = DateTime::from_timestamp_millis(epoch_millis).ok_or_else(|| {
        NfuncError::OutOfRange(format!("{epoch_millis} is not a valid epoch millisecond value."))
    })?;
    let dt = ensure_representable(utc.with_timezone(&zones.system()))?;
    Ok(Output::instant(display(&dt)?, epoch_millis))
}

/// Parse and redisplay a date in the canonical format
pub fn normalize(zones: &Zones, text: &str) -> Result<Output> {
    let dt = parse_text(zones, text)?;
    display_instant(&dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn utc() -> Zones {
        Zones::new(Tz::UTC)
    }

    #[test]
    fn test_add_calendar_units() {
        let zones = utc();
        let out = add(&zones, "1/31/2024 12:00:00 AM", 1, Some(DateTimeUnit::Month)).unwrap();
        assert_eq!(out.value, "2/29/2024 12:00:00 AM");

        let out = add(&zones, "2/29/2024 9:15:00 AM", 1, Some(DateTimeUnit::Year)).unwrap();
        assert_eq!(out.value, "2/28/2025 9:15:00 AM");

        let out = add(&zones, "3/31/2024 12:00:00 PM", -1, Some(DateTimeUnit::Month)).unwrap();
        assert_eq!(out.value, "2/29/2024 12:00:00 PM");
    }

    #[test]
    fn test_add_fixed_units() {
        let zones = utc();
        let out = add(&zones, "1/1/2024 11:30:00 PM", 1, Some(DateTimeUnit::Hour)).unwrap();
        assert_eq!(out.value, "1/2/2024 12:30:00 AM");
        assert_eq!(out.data, Some(1_704_155_400_000));

        let out = add(&zones, "1/1/2024 12:00:00 AM", -90, Some(DateTimeUnit::Minute)).unwrap();
        assert_eq!(out.value, "12/31/2023 10:30:00 PM");

        let out = add(&zones, "1/1/2024 12:00:00 AM", 366, Some(DateTimeUnit::Day)).unwrap();
        assert_eq!(out.value, "1/1/2025 12:00:00 AM");
    }

    #[test]
    fn test_add_keeps_offset_and_unknown_unit_is_noop() {
        let zones = utc();
        let out = add(&zones, "2024-01-15T10:00:00+05:00", 2, None).unwrap();
        assert_eq!(out.value, "1/15/2024 10:00:00 AM");
        assert_eq!(out.data, Some(1_705_294_800_000));

        let out = add(&zones, "2024-01-15T10:00:00+05:00", 1, Some(DateTimeUnit::Day)).unwrap();
        assert_eq!(out.value, "1/16/2024 10:00:00 AM");
    }

    #[test]
    fn test_add_out_of_range() {
        let zones = utc();
        let result = add(&zones, "12/31/9999 11:00:00 PM", 1, Some(DateTimeUnit::Year));
        assert!(matches!(result, Err(NfuncError::OutOfRange(_))));
        let result = add(&zones, "1/1/0001 12:00:00 AM", -1, Some(DateTimeUnit::Minute));
        assert!(matches!(result, Err(NfuncError::OutOfRange(_))));
    }

    #[test]
    fn test_diff_units() {
        let zones = utc();
        let a = "3/15/2025 6:00:00 PM";
        let b = "12/31/2023 6:00:00 AM";
        assert_eq!(diff(&zones, a, b, Some(DateTimeUnit::Year)).unwrap().value, "2");
        assert_eq!(diff(&zones, a, b, Some(DateTimeUnit::Month)).unwrap().value, "15");
        assert_eq!(diff(&zones, a, b, Some(DateTimeUnit::Day)).unwrap().value, "440.5");
        assert_eq!(diff(&zones, a, b, Some(DateTimeUnit::Hour)).unwrap().value, "10572");
        assert_eq!(diff(&zones, b, a, Some(DateTimeUnit::Minute)).unwrap().value, "634320");
        assert_eq!(diff(&zones, a, b, None).unwrap().value, "0");
        assert_eq!(diff(&zones, a, b, None).unwrap().data, None);
    }

    #[test]
    fn test_diff_is_calendar_based_for_years_and_months() {
        let zones = utc();
        let out = diff(&zones, "1/1/2024", "12/31/2023", Some(DateTimeUnit::Year)).unwrap();
        assert_eq!(out.value, "1");
        let out = diff(&zones, "2/1/2024", "1/31/2024", Some(DateTimeUnit::Month)).unwrap();
        assert_eq!(out.value, "1");
        let out = diff(
            &zones,
            "1/1/2024 12:20:00 AM",
            "1/1/2024",
            Some(DateTimeUnit::Hour),
        )
        .unwrap();
        assert_eq!(out.value, "0.3333333333333333");
    }

    #[test]
    fn test_small_diff_uses_scientific_notation() {
        let zones = utc();
        let out = diff(
            &zones,
            "1/1/2024 12:00:01 AM",
            "1/1/2024 12:00:00 AM",
            Some(DateTimeUnit::Day),
        )
        .unwrap();
        assert_eq!(out.value, "1.1574074074074073E-05");
    }

    #[test]
    fn test_parse_with_utc_flag() {
        let zones = Zones::new(Tz::America__Chicago);
        let out = parse(&zones, "1/15/2024 10:00:00 AM", false).unwrap();
        assert_eq!(out.value, "1/15/2024 10:00:00 AM");

        // Chicago is -06:00 in January; removing it moves the value six hours later
        let out = parse(&zones, "1/15/2024 10:00:00 AM", true).unwrap();
        assert_eq!(out.value, "1/15/2024 4:00:00 PM");
        assert_eq!(out.data, Some(1_705_356_000_000));
    }

    #[test]
    fn test_part() {
        let zones = utc();
        let text = "7/4/2024 3:07:09 PM";
        assert_eq!(part(&zones, text, Some(DateTimeUnit::Year)).unwrap().value, "2024");
        assert_eq!(part(&zones, text, Some(DateTimeUnit::Month)).unwrap().value, "07");
        assert_eq!(part(&zones, text, Some(DateTimeUnit::Day)).unwrap().value, "04");
        assert_eq!(part(&zones, text, Some(DateTimeUnit::Hour)).unwrap().value, "3");
        assert_eq!(part(&zones, text, Some(DateTimeUnit::Minute)).unwrap().value, "07");
        assert_eq!(part(&zones, text, None).unwrap().value, "");
        let out = part(&zones, "1/1/2024 12:05:00 AM", Some(DateTimeUnit::Hour)).unwrap();
        assert_eq!(out.value, "12");
    }

    #[test]
    fn test_format_with_culture() {
        let zones = utc();
        let out = format(
            &zones,
            "1/15/2024 1:05:00 PM",
            "dddd d MMMM yyyy",
            "HH:mm",
            "fr",
        )
        .unwrap();
        assert_eq!(out.value, "lundi 15 janvier 2024 13:05");
        assert_eq!(out.data, Some(1_705_323_900_000));

        let out = format(&zones, "1/15/2024 1:05:00 PM", "yyyy-MM-dd", "", "").unwrap();
        assert_eq!(out.value, "2024-01-15");

        let error = format(&zones, "1/15/2024", "d", "", "xx-XX").unwrap_err();
        assert!(matches!(error, NfuncError::UnsupportedCulture(_)));
    }

    #[test]
    fn test_zone_conversions_preserve_instant() {
        let zones = Zones::new(Tz::America__New_York);
        let text = "2024-07-04T12:00:00Z";

        let system = to_system(&zones, text).unwrap();
        assert_eq!(system.value, "7/4/2024 6:00:00 AM");

        // Daylight saving is ignored: New York stays at -05:00 in July
        let local = to_local(&zones, text).unwrap();
        assert_eq!(local.value, "7/4/2024 7:00:00 AM");
        assert_eq!(system.data, local.data);

        let back = to_local(&zones, &format!("{} -06:00", system.value)).unwrap();
        assert_eq!(back.data, system.data);
    }

    #[test]
    fn test_zone_conversions_stay_in_range() {
        let result = to_system(&utc(), "0001-01-01T00:00:00Z");
        assert!(matches!(result, Err(NfuncError::OutOfRange(_))));

        let kiritimati = Zones::new(Tz::Pacific__Kiritimati);
        let result = to_local(&kiritimati, "9999-12-31T23:00:00Z");
        assert!(matches!(result, Err(NfuncError::OutOfRange(_))));

        let out = to_system(&utc(), "0001-01-01T06:00:00Z").unwrap();
        assert_eq!(out.value, "1/1/0001 12:00:00 AM");
        let back = normalize(&utc(), &format!("{} -06:00", out.value)).unwrap();
        assert_eq!(back.data, out.data);
    }

    #[test]
    fn test_now_is_at_system_offset() {
        let zones = utc();
        let before = chrono::Utc::now().timestamp_millis();
        let out = now(&zones).unwrap();
        let after = chrono::Utc::now().timestamp_millis();
        let data = out.data.unwrap();
        assert!(before <= data && data <= after);
        assert!(out.value.ends_with("AM") || out.value.ends_with("PM"));
    }

    #[test]
    fn test_from_epoch_millis() {
        let zones = utc();
        let out = from_epoch_millis(&zones, 0).unwrap();
        assert_eq!(out.value, "12/31/1969 6:00:00 PM");
        assert_eq!(out.data, Some(0));

        let out = from_epoch_millis(&zones, 1_705_323_900_123).unwrap();
        assert_eq!(out.value, "1/15/2024 7:05:00 AM");
        assert_eq!(out.data, Some(1_705_323_900_123));

        assert!(from_epoch_millis(&zones, MAX_EPOCH_MILLIS + 1).is_err());
        assert!(from_epoch_millis(&zones, i64::MIN).is_err());
    }

    #[test]
    fn test_normalize() {
        let zones = utc();
        let out = normalize(&zones, "2024-01-15T13:05:09Z").unwrap();
        assert_eq!(out.value, "1/15/2024 1:05:09 PM");
        let again = normalize(&zones, &out.value).unwrap();
        assert_eq!(again, out);

        // A trailing offset on date-only text is an offset, not a time
        let out = normalize(&zones, "2024-01-15 +05:00").unwrap();
        assert_eq!(out.value, "1/15/2024 12:00:00 AM");
        assert_eq!(out.data, Some(1_705_258_800_000));

        let error = normalize(&zones, "soon").unwrap_err();
        assert!(matches!(error, NfuncError::InvalidDate(_)));
    }
}
