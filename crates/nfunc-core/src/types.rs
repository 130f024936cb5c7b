//! Core domain types for nfunc
//!
//! These types describe what crosses the boundary: the unit and format
//! selectors a host passes in as integers, and the value/data/status triple
//! every operation hands back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NfuncError, Result};

/// Sentinel stored in the `data` field when an operation has no numeric payload
pub const NO_DATA: i64 = i64::MIN;

/// Arithmetic and extraction granularity for date operations
///
/// The discriminants are the integer ids used on the C boundary.
///
/// # Examples
/// ```
/// use nfunc_core::types::DateTimeUnit;
///
/// assert_eq!(DateTimeUnit::from_id(2), Some(DateTimeUnit::Month));
/// assert_eq!(DateTimeUnit::from_id(42), None);
/// assert_eq!("mi".parse::<DateTimeUnit>().unwrap(), DateTimeUnit::Minute);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeUnit {
    Year = 1,
    Month = 2,
    Day = 3,
    Hour = 4,
    Minute = 5,
}

impl DateTimeUnit {
    /// Map a boundary id onto a unit; unknown ids yield `None`
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Year),
            2 => Some(Self::Month),
            3 => Some(Self::Day),
            4 => Some(Self::Hour),
            5 => Some(Self::Minute),
            _ => None,
        }
    }

    /// The boundary id of this unit
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for DateTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DateTimeUnit {
    type Err = NfuncError;

    /// Accepts the full names and the script engine's short aliases
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "y" => Ok(Self::Year),
            "month" | "m" => Ok(Self::Month),
            "day" | "d" => Ok(Self::Day),
            "hour" | "h" => Ok(Self::Hour),
            "minute" | "mi" => Ok(Self::Minute),
            _ => Err(NfuncError::InvalidFormat(format!(
                "'{s}' is not a date-time unit. Accepted values are `year` (or `y`), \
                 `month` (or `m`), `day` (or `d`), `hour` (or `h`), and `minute` (or `mi`)."
            ))),
        }
    }
}

/// Kind of data the generic `format` operation should treat its input as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Probe the input with the date parser
    #[default]
    Unknown = 0,
    Date = 1,
    Number = 2,
}

impl DataFormat {
    /// Map a boundary id onto a format hint
    ///
    /// Ids other than `0` and `1` select the numeric path.
    pub fn from_id(id: i32) -> Self {
        match id {
            0 => Self::Unknown,
            1 => Self::Date,
            _ => Self::Number,
        }
    }
}

impl FromStr for DataFormat {
    type Err = NfuncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "unknown" | "auto" => Ok(Self::Unknown),
            "date" => Ok(Self::Date),
            "number" => Ok(Self::Number),
            _ => Err(NfuncError::InvalidFormat(format!(
                "'{s}' is not a data format. Accepted values are `date`, `number`, or `auto`."
            ))),
        }
    }
}

/// Outcome flag stored in a result block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok = 0,
    Error = 1,
}

/// Successful payload of an operation
///
/// `data` carries epoch milliseconds for operations that produce an instant.
///
/// # Examples
/// ```
/// use nfunc_core::types::{Output, NO_DATA};
///
/// let out = Output::text("Hello World");
/// assert_eq!(out.data_or_sentinel(), NO_DATA);
///
/// let out = Output::instant("1/1/1970 12:00:00 AM", 0);
/// assert_eq!(out.data, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub value: String,
    pub data: Option<i64>,
}

impl Output {
    /// A text-only payload
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            data: None,
        }
    }

    /// A text payload paired with an epoch-millisecond timestamp
    pub fn instant(value: impl Into<String>, epoch_millis: i64) -> Self {
        Self {
            value: value.into(),
            data: Some(epoch_millis),
        }
    }

    /// The `data` field as it appears on the boundary
    pub fn data_or_sentinel(&self) -> i64 {
        self.data.unwrap_or(NO_DATA)
    }
}

/// Fully resolved value/data/status triple
///
/// This is the safe mirror of the C result block, used by the CLI for
/// display and by the FFI layer as the last step before allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub value: String,
    pub data: i64,
    pub status: Status,
}

impl Reply {
    /// Whether the operation succeeded
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<Result<Output>> for Reply {
    fn from(result: Result<Output>) -> Self {
        match result {
            Ok(output) => Self {
                data: output.data_or_sentinel(),
                value: output.value,
                status: Status::Ok,
            },
            Err(error) => Self {
                value: error.to_string(),
                data: NO_DATA,
                status: Status::Error,
            },
        }
    }
}
