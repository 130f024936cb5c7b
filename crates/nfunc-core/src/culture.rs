//! Culture catalogue
//!
//! A culture is a named bundle of formatting conventions: calendar names and
//! patterns for dates, separators and sign/currency patterns for numbers.
//! Cultures are resolved by name after passing through [`format_culture`],
//! which turns the abbreviated or alternate spellings script authors use into
//! canonical identifiers.

use tracing::debug;

use crate::error::{NfuncError, Result};

/// Date and time conventions of a culture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeFormatInfo {
    pub date_separator: &'static str,
    pub time_separator: &'static str,
    pub short_date_pattern: &'static str,
    pub long_date_pattern: &'static str,
    pub short_time_pattern: &'static str,
    pub long_time_pattern: &'static str,
    pub month_day_pattern: &'static str,
    pub year_month_pattern: &'static str,
    pub am_designator: &'static str,
    pub pm_designator: &'static str,
    pub month_names: [&'static str; 12],
    pub abbreviated_month_names: [&'static str; 12],
    /// Sunday first
    pub day_names: [&'static str; 7],
    /// Sunday first
    pub abbreviated_day_names: [&'static str; 7],
    pub era_name: &'static str,
}

/// Field order of a culture's numeric short date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

impl DateTimeFormatInfo {
    /// Field order implied by the short date pattern
    pub fn date_order(&self) -> DateOrder {
        let pattern = self.short_date_pattern;
        let pos = |c: char| pattern.find(c).unwrap_or(usize::MAX);
        let (y, m, d) = (pos('y'), pos('M'), pos('d'));
        if y < m && y < d {
            DateOrder::YearMonthDay
        } else if d < m {
            DateOrder::DayMonthYear
        } else {
            DateOrder::MonthDayYear
        }
    }

    /// Long date followed by long time
    pub fn full_date_time_pattern(&self) -> String {
        format!("{} {}", self.long_date_pattern, self.long_time_pattern)
    }

    /// Short date followed by long time
    pub fn general_long_pattern(&self) -> String {
        format!("{} {}", self.short_date_pattern, self.long_time_pattern)
    }

    /// Short date followed by short time
    pub fn general_short_pattern(&self) -> String {
        format!("{} {}", self.short_date_pattern, self.short_time_pattern)
    }
}

/// Numeric conventions of a culture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormatInfo {
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    pub group_sizes: &'static [usize],
    pub negative_sign: &'static str,
    pub positive_sign: &'static str,
    pub nan_symbol: &'static str,
    pub positive_infinity_symbol: &'static str,
    pub negative_infinity_symbol: &'static str,
    pub percent_symbol: &'static str,
    pub per_mille_symbol: &'static str,
    pub number_decimal_digits: usize,
    /// 0 `(n)`, 1 `-n`, 2 `- n`, 3 `n-`, 4 `n -`
    pub number_negative_pattern: usize,
    pub currency_symbol: &'static str,
    pub currency_decimal_digits: usize,
    /// 0 `$n`, 1 `n$`, 2 `$ n`, 3 `n $`
    pub currency_positive_pattern: usize,
    /// 0..=16, see [`CURRENCY_NEGATIVE_PATTERNS`]
    pub currency_negative_pattern: usize,
    pub percent_decimal_digits: usize,
    /// 0 `n %`, 1 `n%`, 2 `%n`, 3 `% n`
    pub percent_positive_pattern: usize,
    /// 0..=11, see [`PERCENT_NEGATIVE_PATTERNS`]
    pub percent_negative_pattern: usize,
}

/// Currency layouts for positive values (`$` symbol, `n` number)
pub const CURRENCY_POSITIVE_PATTERNS: [&str; 4] = ["$n", "n$", "$ n", "n $"];

/// Currency layouts for negative values (`$` symbol, `n` number, `-` sign)
pub const CURRENCY_NEGATIVE_PATTERNS: [&str; 17] = [
    "($n)", "-$n", "$-n", "$n-", "(n$)", "-n$", "n-$", "n$-", "-n $", "-$ n", "n $-", "$ n-",
    "$ -n", "n- $", "($ n)", "(n $)", "$- n",
];

/// Number layouts for negative values
pub const NUMBER_NEGATIVE_PATTERNS: [&str; 5] = ["(n)", "-n", "- n", "n-", "n -"];

/// Percent layouts for positive values (`%` symbol)
pub const PERCENT_POSITIVE_PATTERNS: [&str; 4] = ["n %", "n%", "%n", "% n"];

/// Percent layouts for negative values
pub const PERCENT_NEGATIVE_PATTERNS: [&str; 12] = [
    "-n %", "-n%", "-%n", "%-n", "%n-", "n-%", "n%-", "-% n", "n %-", "% n-", "% -n", "n- %",
];

/// A resolved culture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Culture {
    /// Canonical name; empty for the invariant culture
    pub name: &'static str,
    pub date: DateTimeFormatInfo,
    pub number: NumberFormatInfo,
}

impl Culture {
    /// The culture-neutral conventions
    pub fn invariant() -> &'static Culture {
        &INVARIANT
    }

    /// Resolve a caller-supplied culture name
    ///
    /// An empty name selects the invariant culture; anything else goes
    /// through [`format_culture`] first.
    ///
    /// # Examples
    /// ```
    /// use nfunc_core::culture::Culture;
    ///
    /// assert_eq!(Culture::resolve("").unwrap().name, "");
    /// assert_eq!(Culture::resolve("de").unwrap().name, "de-DE");
    /// assert!(Culture::resolve("xx-YY").is_err());
    /// ```
    pub fn resolve(name: &str) -> Result<&'static Culture> {
        if name.is_empty() {
            return Ok(Self::invariant());
        }

        let canonical = format_culture(name);
        if canonical.is_empty() {
            return Ok(Self::invariant());
        }

        match CULTURES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&canonical))
        {
            Some(culture) => {
                debug!("Resolved culture '{}' as '{}'", name, culture.name);
                Ok(culture)
            }
            None => Err(NfuncError::UnsupportedCulture(name.to_string())),
        }
    }
}

/// Normalize an abbreviated or alternate culture name
///
/// - `_` separators become `-`, language is lower-cased, region upper-cased
/// - a bare language maps to its default specific culture (`fr` → `fr-FR`)
/// - `invariant` and `iv` map to the empty name
///
/// Unknown names pass through normalized so that resolution can fail with
/// the caller's spelling in the message.
///
/// # Examples
/// ```
/// use nfunc_core::culture::format_culture;
///
/// assert_eq!(format_culture("EN_us"), "en-US");
/// assert_eq!(format_culture("ja"), "ja-JP");
/// assert_eq!(format_culture("zh-hans"), "zh-CN");
/// assert_eq!(format_culture("Invariant"), "");
/// ```
pub fn format_culture(name: &str) -> String {
    let trimmed = name.trim().replace('_', "-");
    let lower = trimmed.to_ascii_lowercase();

    if lower == "invariant" || lower == "iv" {
        return String::new();
    }

    let mut parts = lower.split('-').filter(|p| !p.is_empty());
    let Some(language) = parts.next() else {
        return String::new();
    };
    let rest: Vec<&str> = parts.collect();

    match rest.as_slice() {
        [] => default_specific(language)
            .map(str::to_string)
            .unwrap_or_else(|| language.to_string()),
        [script] if script.len() == 4 => match (language, *script) {
            ("zh", "hans") => "zh-CN".to_string(),
            ("zh", "hant") => "zh-TW".to_string(),
            _ => format!("{}-{}", language, title_case_ascii(script)),
        },
        [script, region] if script.len() == 4 => {
            format!("{}-{}", language, region.to_ascii_uppercase())
        }
        [region, ..] => format!("{}-{}", language, region.to_ascii_uppercase()),
    }
}

fn default_specific(language: &str) -> Option<&'static str> {
    let specific = match language {
        "en" => "en-US",
        "fr" => "fr-FR",
        "de" => "de-DE",
        "es" => "es-ES",
        "it" => "it-IT",
        "pt" => "pt-BR",
        "nl" => "nl-NL",
        "ja" => "ja-JP",
        "zh" => "zh-CN",
        _ => return None,
    };
    Some(specific)
}

fn title_case_ascii(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const ENGLISH_MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const ENGLISH_DAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const ENGLISH_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const FRENCH_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const FRENCH_MONTHS_ABBR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const FRENCH_DAYS: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];
const FRENCH_DAYS_ABBR: [&str; 7] = ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."];

const SPANISH_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const SPANISH_MONTHS_ABBR: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const SPANISH_DAYS: [&str; 7] = [
    "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
];
const SPANISH_DAYS_ABBR: [&str; 7] = ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"];

const EN_NUMBER: NumberFormatInfo = NumberFormatInfo {
    decimal_separator: ".",
    group_separator: ",",
    group_sizes: &[3],
    negative_sign: "-",
    positive_sign: "+",
    nan_symbol: "NaN",
    positive_infinity_symbol: "∞",
    negative_infinity_symbol: "-∞",
    percent_symbol: "%",
    per_mille_symbol: "‰",
    number_decimal_digits: 2,
    number_negative_pattern: 1,
    currency_symbol: "$",
    currency_decimal_digits: 2,
    currency_positive_pattern: 0,
    currency_negative_pattern: 1,
    percent_decimal_digits: 2,
    percent_positive_pattern: 1,
    percent_negative_pattern: 1,
};

const EURO_NUMBER: NumberFormatInfo = NumberFormatInfo {
    decimal_separator: ",",
    group_separator: ".",
    currency_symbol: "€",
    currency_positive_pattern: 3,
    currency_negative_pattern: 8,
    percent_positive_pattern: 0,
    percent_negative_pattern: 0,
    ..EN_NUMBER
};

static INVARIANT: Culture = Culture {
    name: "",
    date: DateTimeFormatInfo {
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "MM/dd/yyyy",
        long_date_pattern: "dddd, dd MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        month_day_pattern: "MMMM dd",
        year_month_pattern: "yyyy MMMM",
        am_designator: "AM",
        pm_designator: "PM",
        month_names: ENGLISH_MONTHS,
        abbreviated_month_names: ENGLISH_MONTHS_ABBR,
        day_names: ENGLISH_DAYS,
        abbreviated_day_names: ENGLISH_DAYS_ABBR,
        era_name: "A.D.",
    },
    number: NumberFormatInfo {
        positive_infinity_symbol: "Infinity",
        negative_infinity_symbol: "-Infinity",
        currency_symbol: "¤",
        currency_negative_pattern: 0,
        percent_positive_pattern: 0,
        percent_negative_pattern: 0,
        ..EN_NUMBER
    },
};

static CULTURES: [Culture; 12] = [
    Culture {
        name: "en-US",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "M/d/yyyy",
            long_date_pattern: "dddd, MMMM d, yyyy",
            short_time_pattern: "h:mm tt",
            long_time_pattern: "h:mm:ss tt",
            month_day_pattern: "MMMM d",
            year_month_pattern: "MMMM yyyy",
            am_designator: "AM",
            pm_designator: "PM",
            month_names: ENGLISH_MONTHS,
            abbreviated_month_names: ENGLISH_MONTHS_ABBR,
            day_names: ENGLISH_DAYS,
            abbreviated_day_names: ENGLISH_DAYS_ABBR,
            era_name: "A.D.",
        },
        number: EN_NUMBER,
    },
    Culture {
        name: "en-GB",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd, d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d MMMM",
            year_month_pattern: "MMMM yyyy",
            am_designator: "am",
            pm_designator: "pm",
            month_names: ENGLISH_MONTHS,
            abbreviated_month_names: ENGLISH_MONTHS_ABBR,
            day_names: ENGLISH_DAYS,
            abbreviated_day_names: ENGLISH_DAYS_ABBR,
            era_name: "AD",
        },
        number: NumberFormatInfo {
            currency_symbol: "£",
            ..EN_NUMBER
        },
    },
    Culture {
        name: "fr-FR",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d MMMM",
            year_month_pattern: "MMMM yyyy",
            am_designator: "AM",
            pm_designator: "PM",
            month_names: FRENCH_MONTHS,
            abbreviated_month_names: FRENCH_MONTHS_ABBR,
            day_names: FRENCH_DAYS,
            abbreviated_day_names: FRENCH_DAYS_ABBR,
            era_name: "ap. J.-C.",
        },
        number: NumberFormatInfo {
            group_separator: "\u{202f}",
            ..EURO_NUMBER
        },
    },
    Culture {
        name: "fr-CA",
        date: DateTimeFormatInfo {
            date_separator: "-",
            time_separator: ":",
            short_date_pattern: "yyyy-MM-dd",
            long_date_pattern: "dddd d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d MMMM",
            year_month_pattern: "MMMM yyyy",
            am_designator: "a.m.",
            pm_designator: "p.m.",
            month_names: FRENCH_MONTHS,
            abbreviated_month_names: FRENCH_MONTHS_ABBR,
            day_names: FRENCH_DAYS,
            abbreviated_day_names: FRENCH_DAYS_ABBR,
            era_name: "ap. J.-C.",
        },
        number: NumberFormatInfo {
            group_separator: "\u{a0}",
            currency_symbol: "$",
            ..EURO_NUMBER
        },
    },
    Culture {
        name: "de-DE",
        date: DateTimeFormatInfo {
            date_separator: ".",
            time_separator: ":",
            short_date_pattern: "dd.MM.yyyy",
            long_date_pattern: "dddd, d. MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d. MMMM",
            year_month_pattern: "MMMM yyyy",
            am_designator: "AM",
            pm_designator: "PM",
            month_names: [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
            abbreviated_month_names: [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
            day_names: [
                "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
            ],
            abbreviated_day_names: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
            era_name: "n. Chr.",
        },
        number: EURO_NUMBER,
    },
    Culture {
        name: "es-ES",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd, d 'de' MMMM 'de' yyyy",
            short_time_pattern: "H:mm",
            long_time_pattern: "H:mm:ss",
            month_day_pattern: "d 'de' MMMM",
            year_month_pattern: "MMMM 'de' yyyy",
            am_designator: "a. m.",
            pm_designator: "p. m.",
            month_names: SPANISH_MONTHS,
            abbreviated_month_names: SPANISH_MONTHS_ABBR,
            day_names: SPANISH_DAYS,
            abbreviated_day_names: SPANISH_DAYS_ABBR,
            era_name: "d. C.",
        },
        number: EURO_NUMBER,
    },
    Culture {
        name: "es-MX",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd, d 'de' MMMM 'de' yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d 'de' MMMM",
            year_month_pattern: "MMMM 'de' yyyy",
            am_designator: "a. m.",
            pm_designator: "p. m.",
            month_names: SPANISH_MONTHS,
            abbreviated_month_names: SPANISH_MONTHS_ABBR,
            day_names: SPANISH_DAYS,
            abbreviated_day_names: SPANISH_DAYS_ABBR,
            era_name: "d. C.",
        },
        number: NumberFormatInfo {
            percent_positive_pattern: 0,
            percent_negative_pattern: 0,
            ..EN_NUMBER
        },
    },
    Culture {
        name: "it-IT",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d MMMM",
            year_month_pattern: "MMMM yyyy",
            am_designator: "AM",
            pm_designator: "PM",
            month_names: [
                "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
                "settembre", "ottobre", "novembre", "dicembre",
            ],
            abbreviated_month_names: [
                "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
            ],
            day_names: [
                "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
            ],
            abbreviated_day_names: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
            era_name: "d.C.",
        },
        number: NumberFormatInfo {
            percent_positive_pattern: 1,
            percent_negative_pattern: 1,
            ..EURO_NUMBER
        },
    },
    Culture {
        name: "pt-BR",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd, d 'de' MMMM 'de' yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d 'de' MMMM",
            year_month_pattern: "MMMM 'de' yyyy",
            am_designator: "AM",
            pm_designator: "PM",
            month_names: [
                "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
                "setembro", "outubro", "novembro", "dezembro",
            ],
            abbreviated_month_names: [
                "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.",
                "nov.", "dez.",
            ],
            day_names: [
                "domingo",
                "segunda-feira",
                "terça-feira",
                "quarta-feira",
                "quinta-feira",
                "sexta-feira",
                "sábado",
            ],
            abbreviated_day_names: ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."],
            era_name: "d.C.",
        },
        number: NumberFormatInfo {
            currency_symbol: "R$",
            currency_positive_pattern: 2,
            currency_negative_pattern: 9,
            percent_positive_pattern: 1,
            percent_negative_pattern: 1,
            ..EURO_NUMBER
        },
    },
    Culture {
        name: "nl-NL",
        date: DateTimeFormatInfo {
            date_separator: "-",
            time_separator: ":",
            short_date_pattern: "d-M-yyyy",
            long_date_pattern: "dddd d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "d MMMM",
            year_month_pattern: "MMMM yyyy",
            am_designator: "a.m.",
            pm_designator: "p.m.",
            month_names: [
                "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus",
                "september", "oktober", "november", "december",
            ],
            abbreviated_month_names: [
                "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
            ],
            day_names: [
                "zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag",
            ],
            abbreviated_day_names: ["zo", "ma", "di", "wo", "do", "vr", "za"],
            era_name: "n.Chr.",
        },
        number: NumberFormatInfo {
            currency_positive_pattern: 2,
            currency_negative_pattern: 12,
            percent_positive_pattern: 1,
            percent_negative_pattern: 1,
            ..EURO_NUMBER
        },
    },
    Culture {
        name: "ja-JP",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "yyyy/MM/dd",
            long_date_pattern: "yyyy'年'M'月'd'日'dddd",
            short_time_pattern: "H:mm",
            long_time_pattern: "H:mm:ss",
            month_day_pattern: "M'月'd'日'",
            year_month_pattern: "yyyy'年'M'月'",
            am_designator: "午前",
            pm_designator: "午後",
            month_names: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
            ],
            abbreviated_month_names: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
            ],
            day_names: [
                "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
            ],
            abbreviated_day_names: ["日", "月", "火", "水", "木", "金", "土"],
            era_name: "西暦",
        },
        number: NumberFormatInfo {
            currency_symbol: "¥",
            currency_decimal_digits: 0,
            ..EN_NUMBER
        },
    },
    Culture {
        name: "zh-CN",
        date: DateTimeFormatInfo {
            date_separator: "/",
            time_separator: ":",
            short_date_pattern: "yyyy/M/d",
            long_date_pattern: "yyyy'年'M'月'd'日' dddd",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            month_day_pattern: "M'月'd'日'",
            year_month_pattern: "yyyy'年'M'月'",
            am_designator: "上午",
            pm_designator: "下午",
            month_names: [
                "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月",
                "十一月", "十二月",
            ],
            abbreviated_month_names: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
            ],
            day_names: [
                "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
            ],
            abbreviated_day_names: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
            era_name: "公元",
        },
        number: NumberFormatInfo {
            currency_symbol: "¥",
            ..EN_NUMBER
        },
    },
];
