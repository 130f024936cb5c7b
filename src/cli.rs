//! CLI interface for nfunc
//!
//! Every exported operation is available as a subcommand, so the functions a
//! host would call over the C ABI can be tried from a shell.
//!
//! # Example
//!
//! ```bash
//! # Add one month to the last day of January
//! nfunc date-add "1/31/2024 12:00:00 AM" 1 month
//!
//! # Format a number the German way, as JSON
//! nfunc format-number 1234.5 N2 --culture de-DE --json
//!
//! # Pull the month out of an ISO date
//! nfunc regex-match 2024-01-15 '(\d+)-(\d+)-(\d+)' --group 2
//! ```

use clap::{Parser, Subcommand};

use nfunc_core::error::Result;
use nfunc_core::timezone::Zones;
use nfunc_core::types::{DataFormat, DateTimeUnit, Output};

use crate::{datetime, numeric, string};

/// Locale-aware date, number and regex functions
#[derive(Parser, Debug, Clone)]
#[command(name = "nfunc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output the result block as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Zone treated as local (e.g. "America/New_York", "Asia/Tokyo", "UTC")
    /// If not specified, uses the system's local timezone
    #[arg(long, short = 'z', global = true, env = "NFUNC_TIMEZONE")]
    pub timezone: Option<String>,

    /// Treat UTC as the local zone (overrides --timezone)
    #[arg(long, global = true)]
    pub utc: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a number of units to a date
    DateAdd {
        date: String,
        #[arg(allow_negative_numbers = true)]
        addend: i32,
        /// year (y), month (m), day (d), hour (h) or minute (mi)
        unit: DateTimeUnit,
    },

    /// Absolute difference between two dates
    DateDiff {
        minuend: String,
        subtrahend: String,
        unit: DateTimeUnit,
    },

    /// Parse a date into the canonical display format
    DateParse {
        date: String,
        /// Read the wall-clock text as UTC
        #[arg(long)]
        as_utc: bool,
    },

    /// Extract one component of a date
    DatePart { date: String, unit: DateTimeUnit },

    /// Format a date with a date pattern and an optional time pattern
    FormatDate {
        date: String,
        date_format: String,
        #[arg(long, short = 't', default_value = "")]
        time_format: String,
        #[arg(long, short = 'c', default_value = "")]
        culture: String,
    },

    /// Show a date at the system zone's offset
    ToSystem { date: String },

    /// Show a date at the local zone's standard offset
    ToLocal { date: String },

    /// Current instant in the system zone
    Now,

    /// System-zone date for epoch milliseconds
    FromEpoch {
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },

    /// Format a number as currency
    FormatCurrency {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(long, short = 'c', default_value = "")]
        culture: String,
        /// Decimal digits; negative keeps the culture's default
        #[arg(long, short = 'p', default_value_t = -1, allow_negative_numbers = true)]
        precision: i32,
        /// Replaces the culture's currency symbol
        #[arg(long, short = 's', default_value = "")]
        symbol: String,
    },

    /// Format a number with a numeric pattern
    FormatNumber {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        pattern: String,
        #[arg(long, short = 'c', default_value = "")]
        culture: String,
    },

    /// Format text as a date or a number
    Format {
        input: String,
        pattern: String,
        /// auto, date or number
        #[arg(long, default_value = "auto")]
        hint: DataFormat,
        #[arg(long, short = 'c', default_value = "")]
        culture: String,
    },

    /// Title-case text
    ProperCase { input: String },

    /// Extract a group from the first regex match
    RegexMatch {
        input: String,
        pattern: String,
        /// Group number or name; empty selects the whole match
        #[arg(long, short = 'g', default_value = "")]
        group: String,
        /// Comma-separated flags: i, m, n, s, x
        #[arg(long, short = 'o', default_value = "")]
        options: String,
    },

    /// Reformat a date in the canonical display format
    NormalizeDate { date: String },
}

impl Command {
    /// Run the operation against `zones`
    pub fn execute(&self, zones: &Zones) -> Result<Output> {
        match self {
            Command::DateAdd { date, addend, unit } => {
                datetime::add(zones, date, *addend, Some(*unit))
            }
            Command::DateDiff {
                minuend,
                subtrahend,
                unit,
            } => datetime::diff(zones, minuend, subtrahend, Some(*unit)),
            Command::DateParse { date, as_utc } => datetime::parse(zones, date, *as_utc),
            Command::DatePart { date, unit } => datetime::part(zones, date, Some(*unit)),
            Command::FormatDate {
                date,
                date_format,
                time_format,
                culture,
            } => datetime::format(zones, date, date_format, time_format, culture),
            Command::ToSystem { date } => datetime::to_system(zones, date),
            Command::ToLocal { date } => datetime::to_local(zones, date),
            Command::Now => datetime::now(zones),
            Command::FromEpoch { millis } => datetime::from_epoch_millis(zones, *millis),
            Command::FormatCurrency {
                number,
                culture,
                precision,
                symbol,
            } => numeric::format_currency(*number, culture, *precision, symbol),
            Command::FormatNumber {
                number,
                pattern,
                culture,
            } => numeric::format_number(*number, pattern, culture),
            Command::Format {
                input,
                pattern,
                hint,
                culture,
            } => string::format(zones, input, pattern, *hint, culture),
            Command::ProperCase { input } => Ok(string::proper_case(input)),
            Command::RegexMatch {
                input,
                pattern,
                group,
                options,
            } => string::regex_match(input, pattern, group, options),
            Command::NormalizeDate { date } => datetime::normalize(zones, date),
        }
    }
}
