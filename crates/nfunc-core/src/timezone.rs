//! Zone definitions shared by every date operation
//!
//! Two zones exist for the lifetime of a process: the *system* zone, a fixed
//! UTC−06:00 offset that never observes daylight saving, and the *local*
//! zone, which is the host's configured IANA zone. Both are read-only after
//! construction, so a `Zones` value can be shared freely across threads.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};
use std::str::FromStr;
use tracing::debug;

/// Offset of the system zone, in seconds east of UTC
pub const SYSTEM_OFFSET_SECONDS: i32 = -6 * 3600;

/// Configuration for the local zone
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    /// The zone treated as "local"
    pub tz: Tz,
    /// Whether the local zone is UTC
    pub is_utc: bool,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        let tz = get_local_timezone();
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }
}

impl ZoneConfig {
    /// Create a zone configuration from CLI arguments
    pub fn from_cli(timezone_str: Option<&str>, use_utc: bool) -> crate::error::Result<Self> {
        if use_utc {
            return Ok(Self {
                tz: Tz::UTC,
                is_utc: true,
            });
        }

        if let Some(tz_str) = timezone_str {
            let tz = Tz::from_str(tz_str).map_err(|_| {
                crate::error::NfuncError::InvalidFormat(format!(
                    "'{}' is not a time zone. Use a name like 'America/New_York' or 'UTC'",
                    tz_str
                ))
            })?;
            Ok(Self {
                tz,
                is_utc: tz == Tz::UTC,
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Get the display name for the configured zone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }

    /// Build the immutable zone pair from this configuration
    pub fn into_zones(self) -> Zones {
        Zones::new(self.tz)
    }
}

/// The pair of process-wide zones
///
/// # Examples
/// ```
/// use chrono::{DateTime, Utc};
/// use nfunc_core::timezone::Zones;
///
/// let zones = Zones::new(chrono_tz::Tz::UTC);
/// let instant = DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z").unwrap();
/// let system = zones.to_system(&instant);
/// assert_eq!(system.offset().local_minus_utc(), -6 * 3600);
/// assert_eq!(system.timestamp_millis(), instant.timestamp_millis());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Zones {
    system: FixedOffset,
    local: Tz,
}

impl Default for Zones {
    fn default() -> Self {
        ZoneConfig::default().into_zones()
    }
}

impl Zones {
    /// Create the zone pair with the given local zone
    pub fn new(local: Tz) -> Self {
        Self {
            system: system_offset(),
            local,
        }
    }

    /// The fixed system offset
    pub fn system(&self) -> FixedOffset {
        self.system
    }

    /// Local zone offset in effect at a UTC instant
    pub fn local_offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        self.local.offset_from_utc_datetime(utc).fix()
    }

    /// Local zone offset for a wall-clock time in the local zone
    ///
    /// Ambiguous times (clocks turned back) resolve to the earlier offset;
    /// times inside a gap take the offset in effect at the same UTC reading.
    pub fn local_offset_for_wall_clock(&self, local: &NaiveDateTime) -> FixedOffset {
        match self.local.offset_from_local_datetime(local).earliest() {
            Some(offset) => offset.fix(),
            None => {
                debug!("Wall-clock time {} falls in a zone transition gap", local);
                self.local.offset_from_utc_datetime(local).fix()
            }
        }
    }

    /// Same instant displayed at the system offset
    pub fn to_system(&self, dt: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        dt.with_timezone(&self.system)
    }

    /// Local zone's standard offset at a UTC instant, ignoring daylight saving
    pub fn local_standard_offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        let base = self.local.offset_from_utc_datetime(utc).base_utc_offset();
        i32::try_from(base.num_seconds())
            .ok()
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| self.local_offset_at(utc))
    }

    /// Same instant displayed at the local zone's standard offset
    pub fn to_local(&self, dt: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let offset = self.local_standard_offset_at(&dt.naive_utc());
        dt.with_timezone(&offset)
    }

    /// The current instant at the system offset
    pub fn now_system(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.system)
    }

    /// Today's date in the local zone
    pub fn local_today(&self) -> chrono::NaiveDate {
        Utc::now().with_timezone(&self.local).date_naive()
    }
}

fn system_offset() -> FixedOffset {
    FixedOffset::east_opt(SYSTEM_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Detect the system's local timezone
///
/// This function attempts to detect the local timezone from the system.
/// If detection fails, it falls back to UTC.
pub fn get_local_timezone() -> Tz {
    #[allow(clippy::collapsible_if)]
    if let Ok(tz_str) = std::env::var("TZ") {
        if let Ok(tz) = Tz::from_str(tz_str.trim_start_matches(':')) {
            debug!("Using timezone from TZ environment variable: {}", tz_str);
            return tz;
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => match Tz::from_str(&tz_str) {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", tz_str);
                tz
            }
            Err(_) => {
                debug!(
                    "Could not parse timezone from iana-time-zone: '{}', falling back to UTC",
                    tz_str
                );
                Tz::UTC
            }
        },
        Err(e) => {
            debug!(
                "Could not detect local timezone via iana-time-zone: {:?}, falling back to UTC",
                e
            );
            Tz::UTC
        }
    }
}
