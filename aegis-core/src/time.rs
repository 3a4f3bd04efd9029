//! Time utilities: workday bands and timezone-aware "now".
//!
//! Nothing in here reads the system clock. Callers pass the instant in.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductivityTier {
    High,
    Medium,
    Low,
}

/// The caller's current productivity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub current_hour: u32,
    pub available_minutes: u32,
    pub productivity_tier: ProductivityTier,
}

/// Fixed workday bands: `[start_hour, end_hour)` and their tier.
const WORKDAY_BANDS: &[(u32, u32, ProductivityTier)] = &[
    (9, 12, ProductivityTier::High),
    (13, 15, ProductivityTier::Medium),
    (15, 17, ProductivityTier::Low),
];

/// Outside every band we assume a medium two-hour window.
const DEFAULT_AVAILABLE_MINUTES: u32 = 120;

/// Derive the time slot from the hour of day. Available minutes run to the
/// end of the current band.
pub fn current_time_slot<T: Timelike>(now: &T) -> TimeSlot {
    let hour = now.hour();
    let minute_of_day = hour * 60 + now.minute();

    WORKDAY_BANDS
        .iter()
        .find(|(start, end, _)| hour >= *start && hour < *end)
        .map(|(_, end, tier)| TimeSlot {
            current_hour: hour,
            available_minutes: end * 60 - minute_of_day,
            productivity_tier: *tier,
        })
        .unwrap_or(TimeSlot {
            current_hour: hour,
            available_minutes: DEFAULT_AVAILABLE_MINUTES,
            productivity_tier: ProductivityTier::Medium,
        })
}

/// Convert a UTC instant into the user's IANA timezone (e.g. "America/Chicago").
pub fn local_now(tz: &str, now_utc: DateTime<Utc>) -> Result<DateTime<Tz>> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(tz.from_utc_datetime(&now_utc.naive_utc()))
}

/// Local calendar day for `now_utc` in `tz`.
pub fn local_today(tz: &str, now_utc: DateTime<Utc>) -> Result<NaiveDate> {
    Ok(local_now(tz, now_utc)?.date_naive())
}
