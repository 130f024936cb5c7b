//! Error types for nfunc
//!
//! This module defines the error types used throughout the nfunc crates.
//! All errors are derived from `thiserror`. The `Display` text of an error
//! is what a host receives as the `value` of a failed result block, so the
//! messages are written for the script author rather than for a Rust caller.
//!
//! # Example
//!
//! ```
//! use nfunc_core::error::{NfuncError, Result};
//!
//! fn require(text: Option<&str>) -> Result<&str> {
//!     text.ok_or(NfuncError::NullArgument("Date-time input"))
//! }
//!
//! assert!(require(None).is_err());
//! ```

use thiserror::Error;

/// Main error type for nfunc operations
///
/// Every variant maps onto one of the four failure classes a host can
/// observe: a missing argument, unparseable text, an unknown culture, or a
/// formatting/runtime failure.
#[derive(Error, Debug)]
pub enum NfuncError {
    /// A required text argument was a null pointer
    #[error("{0} string is null.")]
    NullArgument(&'static str),

    /// A text argument was not valid UTF-8
    #[error("{0} string is not valid UTF-8.")]
    InvalidUtf8(&'static str),

    /// Text could not be parsed as a date and time
    #[error("String '{0}' was not recognized as a valid DateTime.")]
    InvalidDate(String),

    /// Text could not be parsed as a number
    #[error("The input string '{0}' was not in a correct format.")]
    InvalidNumber(String),

    /// Culture identifier did not resolve to a known culture
    #[error("Culture is not supported. '{0}' is an invalid culture identifier.")]
    UnsupportedCulture(String),

    /// Format pattern or specifier is malformed
    #[error("Invalid format string: {0}")]
    InvalidFormat(String),

    /// A value fell outside the representable range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Regular expression failed to compile
    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected failure caught at the export boundary
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results in nfunc
///
/// # Example
///
/// ```
/// use nfunc_core::Result;
///
/// fn answer() -> Result<String> {
///     Ok("42".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, NfuncError>;
