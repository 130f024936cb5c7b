//! Shared helpers for unit tests that depend on the host's zone settings
//!
//! Integration tests keep their own copy in `tests/common/mod.rs` because
//! `#[cfg(test)]` items are not visible to separate test binaries.

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::env;
use std::sync::{Mutex, MutexGuard};

use crate::timezone::Zones;

// Serializes every test that reads or writes `TZ`
pub static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Holds `TZ` at a given value until dropped, then restores the original
pub struct TzGuard {
    original: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl TzGuard {
    /// Point `TZ` at `zone` for the lifetime of the guard
    pub fn set(zone: &str) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let original = env::var("TZ").ok();
        // env::set_var is unsafe since Rust 1.82; ENV_MUTEX serializes access
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

/// Zones whose local zone is the given IANA zone
pub fn zones_in(tz: Tz) -> Zones {
    Zones::new(tz)
}
