//! nfunc - Locale-aware date, number and regex functions for a script host
//!
//! This library provides:
//! - Date arithmetic, diffing, parsing, part extraction and zone conversion
//! - Culture-aware date, number and currency formatting
//! - Title casing and regex group extraction
//! - A C ABI that returns every outcome as a heap-allocated result block
//!
//! The operations are plain Rust functions returning [`Result<Output>`];
//! the [`ffi`] module wraps each one in a `#[unsafe(no_mangle)]` export.
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
//! ```

pub mod cli;
pub mod datetime;
pub mod ffi;
pub mod numeric;
pub mod output;
pub mod result;
pub mod string;

// Re-export commonly used types
pub use nfunc_core::{DataFormat, DateTimeUnit, NfuncError, Output, Reply, Result, Status, Zones};
pub use result::NResult;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
