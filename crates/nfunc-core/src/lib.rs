//! Core types, errors, zones and culture data for nfunc
//!
//! This crate provides the foundational pieces shared by the locale runtime
//! and the exported operations: the boundary enumerations and result
//! payload, the error type, the immutable zone pair, and the culture
//! catalogue.

pub mod culture;
pub mod error;
pub mod timezone;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use culture::{Culture, format_culture};
pub use error::{NfuncError, Result};
pub use timezone::{ZoneConfig, Zones};
pub use types::{DataFormat, DateTimeUnit, NO_DATA, Output, Reply, Status};
