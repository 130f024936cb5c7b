//! Offset-aware, culture-aware date and time parsing
//!
//! The parser locates an `H:mm[:ss[.fffffff]]` time first, then reads the
//! date from the text before it (or after it, when nothing precedes the
//! time) and an AM/PM designator and UTC offset from the text after it.
//! Dates may be numeric, ordered by the culture's short date pattern, or use
//! month and day names in the culture's language or English.
//!
//! Text without an explicit offset is read as wall-clock time in the local
//! zone.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use nfunc_core::culture::{Culture, DateOrder, DateTimeFormatInfo};
use nfunc_core::error::{NfuncError, Result};
use nfunc_core::timezone::Zones;

static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2})(?:[.,](\d+))?)?").expect("time pattern is valid")
});

static OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?P<utc>z|gmt|utc)\b)?\s*",
        r"(?:(?P<sign>[+-])(?P<hours>\d{1,2})(?::?(?P<minutes>\d{2}))?\b)?",
    ))
    .expect("offset pattern is valid")
});

/// Largest UTC offset accepted in text, in seconds
const MAX_OFFSET_SECONDS: i32 = 14 * 3600;

/// Two-digit years up to this value belong to the 2000s
const TWO_DIGIT_YEAR_PIVOT: u32 = 49;

/// Words that carry no date information
const FILLERS: [&str; 13] = [
    "de", "del", "of", "the", "st", "nd", "rd", "th", "er", "feira", "年", "月", "日",
];

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// A time of day found in the text, with its byte span
#[derive(Debug)]
struct TimeMatch {
    start: usize,
    end: usize,
    hour: u32,
    minute: u32,
    second: u32,
    nanos: u32,
}

impl TimeMatch {
    fn to_time(&self, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
        let hour = match meridiem {
            None => self.hour,
            Some(_) if self.hour > 12 => return None,
            Some(Meridiem::Am) => self.hour % 12,
            Some(Meridiem::Pm) => self.hour % 12 + 12,
        };
        NaiveTime::from_hms_nano_opt(hour, self.minute, self.second, self.nanos)
    }
}

/// Designator, offset and any unconsumed text following the time
#[derive(Debug, Default)]
struct Suffix<'t> {
    meridiem: Option<Meridiem>,
    offset: Option<FixedOffset>,
    rest: &'t str,
}

#[derive(Debug)]
enum Token<'t> {
    Number {
        value: u32,
        len: usize,
        separator: &'t str,
    },
    Word(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordKind {
    Month(u32),
    Day(Weekday),
    Filler,
}

#[derive(Debug, Clone, Copy)]
struct Field {
    value: u32,
    len: usize,
}

impl Field {
    fn is_year(&self) -> bool {
        self.len >= 3 || self.value > 31
    }

    fn year(&self) -> i32 {
        let value = self.value as i32;
        if self.len > 2 {
            value
        } else if self.value <= TWO_DIGIT_YEAR_PIVOT {
            2000 + value
        } else {
            1900 + value
        }
    }
}

/// Parses date and time text under one culture
///
/// # Examples
///
/// ```
/// use chrono_tz::Tz;
/// use nfunc_core::{Culture, Zones};
/// use nfunc_locale::DateParser;
///
/// let zones = Zones::new(Tz::UTC);
/// let culture = Culture::resolve("en-GB").unwrap();
/// let parser = DateParser::new(&culture.date, &zones);
///
/// let dt = parser.parse("15/01/2024 10:30").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-01-15T10:30:00+00:00");
/// assert!(parser.try_parse("not a date").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateParser<'a> {
    info: &'a DateTimeFormatInfo,
    zones: &'a Zones,
}

impl<'a> DateParser<'a> {
    pub fn new(info: &'a DateTimeFormatInfo, zones: &'a Zones) -> Self {
        Self { info, zones }
    }

    /// Parse `text`, failing with [`NfuncError::InvalidDate`]
    pub fn parse(&self, text: &str) -> Result<DateTime<FixedOffset>> {
        self.try_parse(text)
            .ok_or_else(|| NfuncError::InvalidDate(text.to_string()))
    }

    /// Parse `text`, returning `None` when it is not a recognizable date
    pub fn try_parse(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (date_text, time, offset) = match find_time(text) {
            Some(found) => {
                let prefix = strip_date_tail(&text[..found.start]);
                let suffix = self.parse_suffix(&text[found.end..])?;
                let date_text = match (prefix.is_empty(), suffix.rest.is_empty()) {
                    (true, _) => suffix.rest,
                    (false, true) => prefix,
                    (false, false) => return None,
                };
                (date_text, Some(found.to_time(suffix.meridiem)?), suffix.offset)
            }
            None => {
                let (date_text, offset) = split_offset(text)?;
                (date_text, None, offset)
            }
        };

        let date = if date_text.is_empty() {
            self.zones.local_today()
        } else {
            self.parse_date(date_text)?
        };
        let naive = date.and_time(time.unwrap_or(NaiveTime::MIN));

        let offset = offset.unwrap_or_else(|| self.zones.local_offset_for_wall_clock(&naive));
        let dt = offset.from_local_datetime(&naive).single()?;

        let utc_year = dt.naive_utc().year();
        if !(1..=9999).contains(&utc_year) {
            debug!("Parsed date '{}' falls outside the supported range", text);
            return None;
        }
        Some(dt)
    }

    fn parse_suffix<'t>(&self, text: &'t str) -> Option<Suffix<'t>> {
        let mut suffix = Suffix::default();
        let mut rest = text;

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            if suffix.meridiem.is_none() {
                if let Some((meridiem, len)) = self.match_designator(rest) {
                    suffix.meridiem = Some(meridiem);
                    rest = &rest[len..];
                    continue;
                }
            }
            if suffix.offset.is_none() {
                if let Some((seconds, len)) = match_offset(rest) {
                    if seconds.abs() > MAX_OFFSET_SECONDS {
                        return None;
                    }
                    suffix.offset = Some(FixedOffset::east_opt(seconds)?);
                    rest = &rest[len..];
                    continue;
                }
            }
            break;
        }

        suffix.rest = rest.trim();
        Some(suffix)
    }

    fn match_designator(&self, text: &str) -> Option<(Meridiem, usize)> {
        let mut candidates = vec![
            (self.info.am_designator, Meridiem::Am),
            (self.info.pm_designator, Meridiem::Pm),
            ("A.M.", Meridiem::Am),
            ("P.M.", Meridiem::Pm),
            ("AM", Meridiem::Am),
            ("PM", Meridiem::Pm),
            ("A", Meridiem::Am),
            ("P", Meridiem::Pm),
        ];
        candidates.sort_by_key(|(designator, _)| std::cmp::Reverse(designator.len()));

        candidates.into_iter().find_map(|(designator, meridiem)| {
            if designator.is_empty() {
                return None;
            }
            let head = text.get(..designator.len())?;
            if head.to_lowercase() != designator.to_lowercase() {
                return None;
            }
            let next = text[designator.len()..].chars().next();
            if next.is_some_and(char::is_alphanumeric) {
                return None;
            }
            Some((meridiem, designator.len()))
        })
    }

    fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        let mut fields = Vec::new();
        let mut separators = Vec::new();
        let mut month_name = None;
        let mut weekday = None;

        for token in tokenize(text)? {
            match token {
                Token::Number {
                    value,
                    len,
                    separator,
                } => {
                    fields.push(Field { value, len });
                    separators.push(separator);
                }
                Token::Word(word) => match self.classify(&word)? {
                    WordKind::Month(month) => {
                        if month_name.replace(month).is_some() {
                            return None;
                        }
                    }
                    WordKind::Day(day) => weekday = Some(day),
                    WordKind::Filler => {}
                },
            }
        }

        let this_year = || self.zones.local_today().year();
        let (year, month, day) = match (month_name, fields.as_slice()) {
            (Some(month), [a, b]) => {
                if a.is_year() && !b.is_year() {
                    (a.year(), month, b.value)
                } else {
                    (b.year(), month, a.value)
                }
            }
            (Some(month), [a]) if a.is_year() => (a.year(), month, 1),
            (Some(month), [a]) => (this_year(), month, a.value),
            (None, [a, b, c]) => {
                if a.is_year() {
                    (a.year(), b.value, c.value)
                } else {
                    match self.info.date_order() {
                        DateOrder::MonthDayYear => (c.year(), a.value, b.value),
                        DateOrder::DayMonthYear => (c.year(), b.value, a.value),
                        DateOrder::YearMonthDay => (a.year(), b.value, c.value),
                    }
                }
            }
            (None, [a, b]) => {
                if !self.is_date_separator(separators[1]) {
                    return None;
                }
                if a.is_year() {
                    (a.year(), b.value, 1)
                } else if b.is_year() {
                    (b.year(), a.value, 1)
                } else if self.info.date_order() == DateOrder::DayMonthYear {
                    (this_year(), b.value, a.value)
                } else {
                    (this_year(), a.value, b.value)
                }
            }
            _ => return None,
        };

        if !(1..=9999).contains(&year) {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        if weekday.is_some_and(|w| w != date.weekday()) {
            debug!("Day name in '{}' does not match {}", text, date);
            return None;
        }
        Some(date)
    }

    fn is_date_separator(&self, separator: &str) -> bool {
        separator == "/" || separator == "-" || separator == self.info.date_separator
    }

    fn classify(&self, word: &str) -> Option<WordKind> {
        if FILLERS.contains(&word) {
            return Some(WordKind::Filler);
        }

        let english = &Culture::invariant().date;
        for info in [self.info, english] {
            if let Some(month) = find_name(word, &info.month_names)
                .or_else(|| find_name(word, &info.abbreviated_month_names))
            {
                return Some(WordKind::Month(month as u32 + 1));
            }
            if let Some(day) = find_name(word, &info.day_names)
                .or_else(|| find_name(word, &info.abbreviated_day_names))
            {
                return Some(WordKind::Day(WEEKDAYS_FROM_SUNDAY[day]));
            }
        }

        // CJK particles run straight into the following name: 日月曜日
        let first = word.chars().next()?;
        let rest = &word[first.len_utf8()..];
        if !rest.is_empty() && FILLERS.contains(&&word[..first.len_utf8()]) {
            return self.classify(rest);
        }
        None
    }
}

fn find_name(word: &str, names: &[&str]) -> Option<usize> {
    names.iter().position(|name| {
        let name = name.to_lowercase();
        let name = name.trim_end_matches('.');
        name == word || name.split('-').next() == Some(word)
    })
}

/// First `H:mm` time that is not part of a longer number or a signed offset
fn find_time(text: &str) -> Option<TimeMatch> {
    TIME.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();
        let joined = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit() || c == ':');
        if joined(before) || joined(after) || matches!(before, Some('+' | '-')) {
            return None;
        }

        let number = |i: usize| {
            caps.get(i)
                .map_or(Some(0), |m| m.as_str().parse::<u32>().ok())
        };
        let nanos = match caps.get(4) {
            Some(m) if m.as_str().len() > 9 => return None,
            Some(m) => format!("{:0<9}", m.as_str()).parse().ok()?,
            None => 0,
        };

        Some(TimeMatch {
            start: whole.start(),
            end: whole.end(),
            hour: number(1)?,
            minute: number(2)?,
            second: number(3)?,
            nanos,
        })
    })
}

/// Drop the separators between a date and the time that follows it
fn strip_date_tail(text: &str) -> &str {
    let trimmed = text.trim_end_matches(|c: char| c.is_whitespace() || c == ',');
    let date = match trimmed.strip_suffix(['T', 't']) {
        Some(date) if date.ends_with(|c: char| c.is_ascii_digit()) => date,
        _ => trimmed,
    };
    date.trim()
}

/// Split a trailing UTC offset off date text that has no time of day
///
/// The offset must follow whitespace and run to the end of the text, so the
/// dashes inside `2024-01-15` are never read as a sign.
fn split_offset(text: &str) -> Option<(&str, Option<FixedOffset>)> {
    for (i, c) in text.char_indices() {
        if c.is_whitespace() || !text[..i].ends_with(char::is_whitespace) {
            continue;
        }
        let tail = &text[i..];
        let Some((seconds, len)) = match_offset(tail) else {
            continue;
        };
        if len == 0 || len != tail.len() {
            continue;
        }
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return None;
        }
        return Some((text[..i].trim_end(), Some(FixedOffset::east_opt(seconds)?)));
    }
    Some((text, None))
}

/// UTC offset at the start of `text` as seconds east, with the matched length
fn match_offset(text: &str) -> Option<(i32, usize)> {
    let caps = OFFSET.captures(text)?;
    let utc = caps.name("utc").is_some();
    let Some(sign) = caps.name("sign") else {
        return utc.then(|| (0, caps.get(0).map_or(0, |m| m.end())));
    };

    let hours: i32 = caps.name("hours")?.as_str().parse().ok()?;
    let minutes: i32 = caps
        .name("minutes")
        .map_or(Some(0), |m| m.as_str().parse().ok())?;
    if minutes > 59 {
        return None;
    }
    let seconds = hours * 3600 + minutes * 60;
    let seconds = if sign.as_str() == "-" { -seconds } else { seconds };
    Some((seconds, caps.get(0)?.end()))
}

fn tokenize(text: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut separator_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let is_digit = c.is_ascii_digit();
        if !is_digit && !c.is_alphabetic() {
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            let same_kind = if is_digit {
                next.is_ascii_digit()
            } else {
                next.is_alphabetic()
            };
            if !same_kind {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let run = &text[start..end];
        if is_digit {
            if run.len() > 9 {
                return None;
            }
            tokens.push(Token::Number {
                value: run.parse().ok()?,
                len: run.len(),
                separator: text[separator_start..start].trim(),
            });
        } else {
            tokens.push(Token::Word(run.to_lowercase()));
        }
        separator_start = end;
    }

    Some(tokens)
}
