//! Locale runtime for nfunc
//!
//! Parsing and formatting of dates and numbers under the conventions of a
//! [`Culture`](nfunc_core::Culture):
//!
//! - [`DateParser`] reads offset-aware timestamps from free-form text
//! - [`format_date`] applies standard and custom date patterns
//! - [`NumberFormatter`] applies standard and custom numeric formats
//! - [`parse_number`] reads culture-formatted numbers

pub mod date_format;
pub mod date_parse;
mod digits;
pub mod number_format;
pub mod number_parse;

pub use date_format::format_date;
pub use date_parse::DateParser;
pub use number_format::NumberFormatter;
pub use number_parse::{parse_number, try_parse_number};
