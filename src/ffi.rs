//! Exported C ABI
//!
//! Each export decodes its arguments, runs the matching operation against
//! the process-wide [`Zones`] and returns a freshly allocated [`NResult`].
//! Failures and panics never cross the boundary; they come back as `Error`
//! blocks. Text arguments are borrowed for the duration of the call only.

use std::any::Any;
use std::ffi::{CStr, c_char};
use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nfunc_core::error::{NfuncError, Result};
use nfunc_core::timezone::Zones;
use nfunc_core::types::{DataFormat, DateTimeUnit, Output};

use crate::result::{self, NResult};
use crate::{datetime, numeric, string};

/// Zones shared by every export, fixed on first use
static ZONES: Lazy<Zones> = Lazy::new(Zones::default);

/// Run an operation, turning errors and panics into a result block
fn guarded<F>(operation: &'static str, body: F) -> *mut NResult
where
    F: FnOnce() -> Result<Output>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        error!("{} panicked: {}", operation, message);
        Err(NfuncError::Internal(message))
    });

    if let Err(e) = &outcome {
        debug!("{} failed: {}", operation, e);
    }
    result::into_raw(outcome)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "operation panicked".to_string()
    }
}

/// Borrow a caller-owned C string as UTF-8
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for `'a`.
unsafe fn text<'a>(ptr: *const c_char, name: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(NfuncError::NullArgument(name));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| NfuncError::InvalidUtf8(name))
}

/// Release a block returned by any other export
///
/// # Safety
///
/// `handle` must be null or a block returned by this library that has not
/// been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_n_result(handle: *mut NResult) {
    unsafe { result::release(handle) }
}

/// Add `addend` units to a date
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_date_add(
    date_time: *const c_char,
    addend: i32,
    unit: i32,
) -> *mut NResult {
    guarded("n_date_add", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        datetime::add(&ZONES, date_time, addend, DateTimeUnit::from_id(unit))
    })
}

/// Absolute difference between two dates in a unit
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_date_diff(
    minuend: *const c_char,
    subtrahend: *const c_char,
    unit: i32,
) -> *mut NResult {
    guarded("n_date_diff", || {
        let minuend = unsafe { text(minuend, "Date-time minuend input") }?;
        let subtrahend = unsafe { text(subtrahend, "Date-time subtrahend input") }?;
        datetime::diff(&ZONES, minuend, subtrahend, DateTimeUnit::from_id(unit))
    })
}

/// Parse a date; `is_utc` of 1 treats the wall clock as UTC
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_date_parse(date_time: *const c_char, is_utc: i32) -> *mut NResult {
    guarded("n_date_parse", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        datetime::parse(&ZONES, date_time, is_utc == 1)
    })
}

/// Extract one zero-padded component of a date
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_date_part(date_time: *const c_char, unit: i32) -> *mut NResult {
    guarded("n_date_part", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        datetime::part(&ZONES, date_time, DateTimeUnit::from_id(unit))
    })
}

/// Format a date with date and time patterns under a culture
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_format_date(
    date_time: *const c_char,
    date_format: *const c_char,
    time_format: *const c_char,
    culture: *const c_char,
) -> *mut NResult {
    guarded("n_format_date", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        let date_format = unsafe { text(date_format, "Date format input") }?;
        let time_format = unsafe { text(time_format, "Time format input") }?;
        let culture = unsafe { text(culture, "Culture input") }?;
        datetime::format(&ZONES, date_time, date_format, time_format, culture)
    })
}

/// Show a date at the system zone's offset
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_local_date_to_system_date(date_time: *const c_char) -> *mut NResult {
    guarded("n_local_date_to_system_date", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        datetime::to_system(&ZONES, date_time)
    })
}

/// Show a date at the local zone's standard offset
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_system_date_to_local_date(date_time: *const c_char) -> *mut NResult {
    guarded("n_system_date_to_local_date", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        datetime::to_local(&ZONES, date_time)
    })
}

/// The current instant in the system zone
#[unsafe(no_mangle)]
pub extern "C" fn n_now() -> *mut NResult {
    guarded("n_now", || datetime::now(&ZONES))
}

/// The system-zone date for an epoch-millisecond timestamp
#[unsafe(no_mangle)]
pub extern "C" fn n_system_time_from_unix_time(epoch_millis: i64) -> *mut NResult {
    guarded("n_system_time_from_unix_time", || {
        datetime::from_epoch_millis(&ZONES, epoch_millis)
    })
}

/// Format a number as currency
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_format_currency(
    number: f64,
    culture: *const c_char,
    precision: i32,
    symbol: *const c_char,
) -> *mut NResult {
    guarded("n_format_currency", || {
        let culture = unsafe { text(culture, "Culture input") }?;
        let symbol = unsafe { text(symbol, "Symbol input") }?;
        numeric::format_currency(number, culture, precision, symbol)
    })
}

/// Format a number with a numeric pattern
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_format_number(
    number: f64,
    pattern: *const c_char,
    culture: *const c_char,
) -> *mut NResult {
    guarded("n_format_number", || {
        let pattern = unsafe { text(pattern, "Format input") }?;
        let culture = unsafe { text(culture, "Culture input") }?;
        numeric::format_number(number, pattern, culture)
    })
}

/// Format text as a date or a number
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_format(
    input: *const c_char,
    pattern: *const c_char,
    hint: i32,
    culture: *const c_char,
) -> *mut NResult {
    guarded("n_format", || {
        let input = unsafe { text(input, "Input") }?;
        let pattern = unsafe { text(pattern, "Format input") }?;
        let culture = unsafe { text(culture, "Culture input") }?;
        string::format(&ZONES, input, pattern, DataFormat::from_id(hint), culture)
    })
}

/// Title-case text
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_proper_case(input: *const c_char) -> *mut NResult {
    guarded("n_proper_case", || {
        let input = unsafe { text(input, "Input") }?;
        Ok(string::proper_case(input))
    })
}

/// Extract a group from the first regex match
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_regex_match(
    input: *const c_char,
    pattern: *const c_char,
    group: *const c_char,
    options: *const c_char,
) -> *mut NResult {
    guarded("n_regex_match", || {
        let input = unsafe { text(input, "Input") }?;
        let pattern = unsafe { text(pattern, "Pattern input") }?;
        let group = unsafe { text(group, "Ordinal input") }?;
        let options = unsafe { text(options, "Options input") }?;
        string::regex_match(input, pattern, group, options)
    })
}

/// Reformat a date in the canonical display format
///
/// # Safety
///
/// Text arguments must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn n_string_to_date(date_time: *const c_char) -> *mut NResult {
    guarded("n_string_to_date", || {
        let date_time = unsafe { text(date_time, "Date-time input") }?;
        datetime::normalize(&ZONES, date_time)
    })
}

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// Returns 0 when installed and 1 when a subscriber was already present.
#[unsafe(no_mangle)]
pub extern "C" fn n_init_logging() -> i32 {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nfunc=warn"));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();
    if installed { 0 } else { 1 }
}
