//! String operations: generic format dispatch, title casing and regex
//! group extraction

use regex::{Captures, Match, Regex, RegexBuilder};
use tracing::debug;

use nfunc_core::culture::Culture;
use nfunc_core::error::{NfuncError, Result};
use nfunc_core::timezone::Zones;
use nfunc_core::types::{DataFormat, Output};
use nfunc_locale::{DateParser, NumberFormatter, format_date, parse_number};

/// Format `input` as a date or a number
///
/// With [`DataFormat::Unknown`] the input is checked against the culture's date
/// parser; text it accepts is a date and anything else is a number. Both
/// parsing and formatting use the resolved culture.
///
/// # Examples
///
/// ```
/// use chrono_tz::Tz;
/// use nfunc::string::format;
/// use nfunc_core::{DataFormat, Zones};
///
/// let zones = Zones::new(Tz::UTC);
/// let out = format(&zones, "1/15/2024", "yyyy-MM-dd", DataFormat::Unknown, "").unwrap();
/// assert_eq!(out.value, "2024-01-15");
///
/// let out = format(&zones, "1234.5", "N1", DataFormat::Unknown, "").unwrap();
/// assert_eq!(out.value, "1,234.5");
/// ```
pub fn format(
    zones: &Zones,
    input: &str,
    pattern: &str,
    hint: DataFormat,
    culture: &str,
) -> Result<Output> {
    let culture = Culture::resolve(culture)?;
    let parser = DateParser::new(&culture.date, zones);

    let kind = match hint {
        DataFormat::Unknown if parser.try_parse(input).is_some() => DataFormat::Date,
        DataFormat::Unknown => DataFormat::Number,
        known => known,
    };
    debug!("Formatting '{}' as {:?}", input, kind);

    if kind == DataFormat::Date {
        let dt = parser.parse(input)?;
        let value = format_date(&dt, pattern, &culture.date)?;
        Ok(Output::instant(value, dt.timestamp_millis()))
    } else {
        let number = parse_number(input, &culture.number)?;
        let value = NumberFormatter::new(&culture.number).format(number, pattern)?;
        Ok(Output::text(value))
    }
}

/// Lower-case the input, then capitalize the first letter of every word
///
/// Words are runs of letters and digits; an apostrophe does not start a new
/// word.
pub fn proper_case(input: &str) -> Output {
    let lower = input.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut word_start = true;

    for c in lower.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            word_start = false;
        } else {
            out.push(c);
            if c != '\'' {
                word_start = true;
            }
        }
    }

    Output::text(out)
}

/// Matching options parsed from a comma-separated flag list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegexOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub explicit_capture: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl RegexOptions {
    /// Parse `i`, `m`, `n`, `s` and `x` codes; unknown codes are ignored
    pub fn parse(flags: &str) -> Self {
        let mut options = Self::default();
        for code in flags.split(',').map(str::trim) {
            match code {
                "i" => options.case_insensitive = true,
                "m" => options.multi_line = true,
                "n" => options.explicit_capture = true,
                "s" => options.dot_matches_new_line = true,
                "x" => options.ignore_whitespace = true,
                "" => {}
                other => debug!("Ignoring unknown regex option '{}'", other),
            }
        }
        options
    }

    fn build(&self, pattern: &str) -> Result<Regex> {
        let pattern = if self.explicit_capture {
            without_unnamed_groups(pattern)
        } else {
            pattern.to_string()
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()?;
        Ok(regex)
    }
}

/// Text of one group of the first match of `pattern` in `input`
///
/// An empty `group` selects the whole match, an all-digit `group` a group
/// number and anything else a group name. Group numbers count unnamed
/// groups first, then named groups. No match, or a group that did not
/// participate, yields empty text.
///
/// Patterns use the `regex` crate syntax: backreferences and lookaround
/// are rejected with [`NfuncError::Regex`].
///
/// # Examples
///
/// ```
/// use nfunc::string::regex_match;
///
/// let out = regex_match("2024-01-15", r"(\d+)-(\d+)-(\d+)", "2", "").unwrap();
/// assert_eq!(out.value, "01");
///
/// let out = regex_match("abc", "xyz", "", "").unwrap();
/// assert_eq!(out.value, "");
/// ```
pub fn regex_match(input: &str, pattern: &str, group: &str, options: &str) -> Result<Output> {
    let regex = RegexOptions::parse(options).build(pattern)?;
    let Some(captures) = regex.captures(input) else {
        return Ok(Output::text(""));
    };

    let found = if group.is_empty() {
        captures.get(0)
    } else if group.bytes().all(|b| b.is_ascii_digit()) {
        let number: usize = group.parse().map_err(|_| {
            NfuncError::OutOfRange(format!("Group number '{group}' is too large."))
        })?;
        numbered_group(&regex, &captures, number)
    } else {
        captures.name(group)
    };

    Ok(Output::text(found.map_or("", |m| m.as_str())))
}

/// Group `number` with unnamed groups numbered before named ones
fn numbered_group<'h>(regex: &Regex, captures: &Captures<'h>, number: usize) -> Option<Match<'h>> {
    let names: Vec<Option<&str>> = regex.capture_names().collect();
    let unnamed = (1..names.len()).filter(|&i| names[i].is_none());
    let named = (1..names.len()).filter(|&i| names[i].is_some());
    let index = std::iter::once(0).chain(unnamed).chain(named).nth(number)?;
    captures.get(index)
}

/// Turn every unnamed group into a non-capturing one
fn without_unnamed_groups(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => out.extend(chars.next()),
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class && chars.peek() != Some(&'?') => out.push_str("?:"),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn test_format_detects_dates() {
        let zones = Zones::new(Tz::UTC);
        let out = format(
            &zones,
            "2024-01-15T10:30:00Z",
            "dd MMM yyyy",
            DataFormat::Unknown,
            "",
        )
        .unwrap();
        assert_eq!(out.value, "15 Jan 2024");
        assert_eq!(out.data, Some(1_705_314_600_000));

        let out = format(&zones, "15/01/2024", "D", DataFormat::Unknown, "en-GB").unwrap();
        assert_eq!(out.value, "Monday, 15 January 2024");
    }

    #[test]
    fn test_format_falls_back_to_numbers() {
        let zones = Zones::new(Tz::UTC);
        let out = format(&zones, "1234.5", "C", DataFormat::Unknown, "en-US").unwrap();
        assert_eq!(out.value, "$1,234.50");
        assert_eq!(out.data, None);

        let out = format(&zones, "1234,5", "N2", DataFormat::Unknown, "de-DE").unwrap();
        assert_eq!(out.value, "1.234,50");

        let error = format(&zones, "tomorrow", "N2", DataFormat::Unknown, "").unwrap_err();
        assert!(matches!(error, NfuncError::InvalidNumber(_)));
    }

    #[test]
    fn test_format_respects_hint() {
        let zones = Zones::new(Tz::UTC);
        let error = format(&zones, "42", "d", DataFormat::Date, "").unwrap_err();
        assert!(matches!(error, NfuncError::InvalidDate(_)));

        let error = format(&zones, "1/15/2024", "N2", DataFormat::Number, "").unwrap_err();
        assert!(matches!(error, NfuncError::InvalidNumber(_)));
    }

    #[test]
    fn test_proper_case() {
        assert_eq!(proper_case("hello WORLD").value, "Hello World");
        assert_eq!(proper_case("o'NEIL and sons").value, "O'neil And Sons");
        assert_eq!(proper_case("jean-luc  picard").value, "Jean-Luc  Picard");
        assert_eq!(proper_case("élan vital").value, "Élan Vital");
        assert_eq!(proper_case("").value, "");
    }

    #[test]
    fn test_regex_groups() {
        let text = "2024-01-15";
        let pattern = r"(\d+)-(\d+)-(\d+)";
        assert_eq!(regex_match(text, pattern, "", "").unwrap().value, "2024-01-15");
        assert_eq!(regex_match(text, pattern, "1", "").unwrap().value, "2024");
        assert_eq!(regex_match(text, pattern, "3", "").unwrap().value, "15");
        assert_eq!(regex_match(text, pattern, "9", "").unwrap().value, "");
        assert_eq!(regex_match("abc", "xyz", "1", "").unwrap().value, "");
    }

    #[test]
    fn test_regex_named_groups() {
        let pattern = r"(?<year>\d{4})-(\d{2})";
        assert_eq!(regex_match("2024-01", pattern, "year", "").unwrap().value, "2024");
        assert_eq!(regex_match("2024-01", pattern, "missing", "").unwrap().value, "");
        // Unnamed groups are numbered before named ones
        assert_eq!(regex_match("2024-01", pattern, "1", "").unwrap().value, "01");
        assert_eq!(regex_match("2024-01", pattern, "2", "").unwrap().value, "2024");
    }

    #[test]
    fn test_regex_options() {
        assert_eq!(regex_match("Hello", "hello", "", "i").unwrap().value, "Hello");
        assert_eq!(regex_match("Hello", "hello", "", "").unwrap().value, "");
        assert_eq!(regex_match("a\nb", "^b$", "", "m").unwrap().value, "b");
        assert_eq!(regex_match("a\nb", "a.b", "", "s").unwrap().value, "a\nb");
        assert_eq!(regex_match("abc", "a b c", "", "x").unwrap().value, "abc");
        assert_eq!(regex_match("ABC", "abc", "", "q,i").unwrap().value, "ABC");

        // With explicit capture only named groups are numbered
        let out = regex_match("2024-01", r"(\d{4})-(?<m>\d{2})", "1", "n").unwrap();
        assert_eq!(out.value, "01");
    }

    #[test]
    fn test_regex_errors() {
        assert!(matches!(regex_match("x", "(", "", ""), Err(NfuncError::Regex(_))));
        assert!(matches!(regex_match("aa", r"(a)\1", "", ""), Err(NfuncError::Regex(_))));
        assert!(matches!(regex_match("ab", "a(?=b)", "", ""), Err(NfuncError::Regex(_))));
        let error = regex_match("x", "x", "99999999999999999999999", "").unwrap_err();
        assert!(matches!(error, NfuncError::OutOfRange(_)));
    }

    #[test]
    fn test_without_unnamed_groups() {
        assert_eq!(without_unnamed_groups(r"(a)(?<n>b)"), r"(?:a)(?<n>b)");
        assert_eq!(without_unnamed_groups(r"\(a\)"), r"\(a\)");
        assert_eq!(without_unnamed_groups(r"[(](x)"), r"[(](?:x)");
    }
}
