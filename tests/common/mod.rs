//! Common test utilities and helpers for nfunc tests
//!
//! Integration tests build their own [`Zones`] instead of relying on the
//! host's configured zone, and read result blocks back through [`take`].

#![allow(dead_code)]

use chrono_tz::Tz;
use nfunc::result::peek;
use nfunc::{NResult, Reply};
use nfunc_core::Zones;
use once_cell::sync::Lazy;
use std::env;
use std::ffi::CString;
use std::sync::{Mutex, MutexGuard};

// Global mutex to serialize environment variable modifications in tests
pub static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Holds `TZ` at a given value until dropped, then restores the original
pub struct TzGuard {
    original: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl TzGuard {
    pub fn set(zone: &str) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let original = env::var("TZ").ok();
        unsafe {
            env::set_var("TZ", zone);
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for TzGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(v) => env::set_var("TZ", v),
                None => env::remove_var("TZ"),
            }
        }
    }
}

/// Zones with UTC as the local zone
pub fn utc() -> Zones {
    Zones::new(Tz::UTC)
}

/// Zones with a named IANA zone as the local zone
pub fn zones(name: &str) -> Zones {
    Zones::new(name.parse::<Tz>().unwrap())
}

/// A C string for passing to an export
pub fn c(text: &str) -> CString {
    CString::new(text).unwrap()
}

/// Copy a result block out and release it
pub fn take(block: *mut NResult) -> Reply {
    assert!(!block.is_null(), "export returned a null block");
    let reply = unsafe { peek(block) }.unwrap();
    unsafe { nfunc::ffi::free_n_result(block) };
    reply
}
