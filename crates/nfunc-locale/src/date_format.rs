//! Date and time pattern formatting
//!
//! A pattern of a single letter is a standard format that expands to one of
//! the culture's patterns; anything longer is a custom pattern made of
//! repeated-letter tokens (`yyyy`, `MMM`, `hh`, `tt`, `zzz`, …), culture
//! separators (`/`, `:`), quoted literals and `\` escapes.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use nfunc_core::culture::{Culture, DateTimeFormatInfo};
use nfunc_core::error::{NfuncError, Result};

/// Longest run of `f`/`F` a pattern may contain
const MAX_FRACTION_DIGITS: usize = 7;

/// Format `dt` with a standard or custom pattern under `info`
///
/// An empty pattern formats as the general long pattern followed by the
/// offset (`G zzz`).
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use nfunc_core::Culture;
/// use nfunc_locale::format_date;
///
/// let dt = DateTime::parse_from_rfc3339("2024-01-15T13:05:09-06:00").unwrap();
/// let us = Culture::resolve("en-US").unwrap();
/// assert_eq!(format_date(&dt, "M/d/yyyy h:mm:ss tt", &us.date).unwrap(), "1/15/2024 1:05:09 PM");
/// assert_eq!(format_date(&dt, "D", &us.date).unwrap(), "Monday, January 15, 2024");
/// ```
pub fn format_date(
    dt: &DateTime<FixedOffset>,
    pattern: &str,
    info: &DateTimeFormatInfo,
) -> Result<String> {
    if pattern.is_empty() {
        let general = format!("{} zzz", info.general_long_pattern());
        return format_custom(dt, &general, info);
    }

    let mut chars = pattern.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        return format_standard(dt, letter, info);
    }

    format_custom(dt, pattern, info)
}

fn format_standard(
    dt: &DateTime<FixedOffset>,
    letter: char,
    info: &DateTimeFormatInfo,
) -> Result<String> {
    let invariant = &Culture::invariant().date;
    match letter {
        'd' => format_custom(dt, info.short_date_pattern, info),
        'D' => format_custom(dt, info.long_date_pattern, info),
        'f' => {
            let pattern = format!("{} {}", info.long_date_pattern, info.short_time_pattern);
            format_custom(dt, &pattern, info)
        }
        'F' => format_custom(dt, &info.full_date_time_pattern(), info),
        'g' => format_custom(dt, &info.general_short_pattern(), info),
        'G' => format_custom(dt, &info.general_long_pattern(), info),
        'm' | 'M' => format_custom(dt, info.month_day_pattern, info),
        'o' | 'O' => format_custom(dt, "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffzzz", invariant),
        'r' | 'R' => {
            let utc = dt.with_timezone(&Utc).fixed_offset();
            format_custom(&utc, "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'", invariant)
        }
        's' => format_custom(dt, "yyyy'-'MM'-'dd'T'HH':'mm':'ss", invariant),
        't' => format_custom(dt, info.short_time_pattern, info),
        'T' => format_custom(dt, info.long_time_pattern, info),
        'u' => {
            let utc = dt.with_timezone(&Utc).fixed_offset();
            format_custom(&utc, "yyyy'-'MM'-'dd HH':'mm':'ss'Z'", invariant)
        }
        'y' | 'Y' => format_custom(dt, info.year_month_pattern, info),
        _ => Err(NfuncError::InvalidFormat(format!(
            "'{letter}' is not a standard date and time format."
        ))),
    }
}

fn format_custom(
    dt: &DateTime<FixedOffset>,
    pattern: &str,
    info: &DateTimeFormatInfo,
) -> Result<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&q| q == c)
                    .map(|p| p + i + 1)
                    .ok_or_else(|| {
                        NfuncError::InvalidFormat(format!("Unterminated quote in '{pattern}'."))
                    })?;
                out.extend(&chars[i + 1..close]);
                i = close + 1;
            }
            '\\' => {
                let next = chars.get(i + 1).ok_or_else(|| {
                    NfuncError::InvalidFormat(format!("Trailing escape in '{pattern}'."))
                })?;
                out.push(*next);
                i += 2;
            }
            '%' => {
                match chars.get(i + 1) {
                    Some('%') | None => {
                        return Err(NfuncError::InvalidFormat(format!(
                            "Invalid '%' in '{pattern}'."
                        )));
                    }
                    Some(&next) => {
                        if !push_token(&mut out, dt, info, next, 1)? {
                            out.push(next);
                        }
                    }
                }
                i += 2;
            }
            _ => {
                let run = chars[i..].iter().take_while(|&&r| r == c).count();
                if push_token(&mut out, dt, info, c, run)? {
                    i += run;
                } else {
                    out.push(c);
                    i += 1;
                }
            }
        }
    }

    Ok(out)
}

/// Append the text for a run of `run` copies of `token`
///
/// Returns `false` when `token` is not a pattern letter.
fn push_token(
    out: &mut String,
    dt: &DateTime<FixedOffset>,
    info: &DateTimeFormatInfo,
    token: char,
    run: usize,
) -> Result<bool> {
    match token {
        'd' => match run {
            1 => push_number(out, dt.day(), 1),
            2 => push_number(out, dt.day(), 2),
            3 => out.push_str(info.abbreviated_day_names[weekday_index(dt)]),
            _ => out.push_str(info.day_names[weekday_index(dt)]),
        },
        'M' => match run {
            1 => push_number(out, dt.month(), 1),
            2 => push_number(out, dt.month(), 2),
            3 => out.push_str(info.abbreviated_month_names[dt.month0() as usize]),
            _ => out.push_str(info.month_names[dt.month0() as usize]),
        },
        'y' => {
            let year = dt.year().unsigned_abs();
            match run {
                1 => push_number(out, year % 100, 1),
                2 => push_number(out, year % 100, 2),
                _ => push_number(out, year, run),
            }
        }
        'h' => {
            let hour = match dt.hour() % 12 {
                0 => 12,
                h => h,
            };
            push_number(out, hour, run.min(2));
        }
        'H' => push_number(out, dt.hour(), run.min(2)),
        'm' => push_number(out, dt.minute(), run.min(2)),
        's' => push_number(out, dt.second(), run.min(2)),
        'f' | 'F' => {
            if run > MAX_FRACTION_DIGITS {
                return Err(NfuncError::InvalidFormat(format!(
                    "At most {MAX_FRACTION_DIGITS} fraction digits are supported."
                )));
            }
            let ticks = dt.nanosecond() % 1_000_000_000 / 100;
            let all = format!("{ticks:07}");
            let digits = &all[..run];
            if token == 'f' {
                out.push_str(digits);
            } else {
                let trimmed = digits.trim_end_matches('0');
                if trimmed.is_empty() {
                    if out.ends_with('.') {
                        out.pop();
                    }
                } else {
                    out.push_str(trimmed);
                }
            }
        }
        't' => {
            let designator = if dt.hour() < 12 {
                info.am_designator
            } else {
                info.pm_designator
            };
            if run == 1 {
                out.extend(designator.chars().next());
            } else {
                out.push_str(designator);
            }
        }
        'z' => push_offset(out, dt.offset().local_minus_utc(), run.min(3)),
        'K' => {
            for _ in 0..run {
                push_offset(out, dt.offset().local_minus_utc(), 3);
            }
        }
        'g' => out.push_str(info.era_name),
        ':' => {
            for _ in 0..run {
                out.push_str(info.time_separator);
            }
        }
        '/' => {
            for _ in 0..run {
                out.push_str(info.date_separator);
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn weekday_index(dt: &DateTime<FixedOffset>) -> usize {
    dt.weekday().num_days_from_sunday() as usize
}

fn push_number(out: &mut String, value: u32, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

/// `+h`, `+hh` or `+hh:mm` for run lengths 1, 2 and 3
fn push_offset(out: &mut String, seconds: i32, run: usize) {
    out.push(if seconds < 0 { '-' } else { '+' });
    let seconds = seconds.unsigned_abs();
    let (hours, minutes) = (seconds / 3600, seconds % 3600 / 60);
    match run {
        1 => push_number(out, hours, 1),
        2 => push_number(out, hours, 2),
        _ => out.push_str(&format!("{hours:02}:{minutes:02}")),
    }
}
