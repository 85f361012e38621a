use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{PrayerName, Timings};

pub const COUNTRY: &str = "Turkey";

#[derive(Debug, Clone, PartialEq)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub localized: &'static str,
    pub at: NaiveDateTime,
    pub remaining: String,
    pub remaining_ms: i64,
    /// Set when every prayer today has passed and this is tomorrow's Fajr.
    pub tomorrow: bool,
}

#[derive(Debug, Clone)]
pub struct TrackedCity {
    pub city: String,
    pub country: &'static str,
    pub timings: Timings,
    pub date: NaiveDate,
    pub next: NextPrayer,
}

/// One day's timings as fetched for a city, before it is tracked.
#[derive(Debug, Clone)]
pub struct DayTimings {
    pub timings: Timings,
    /// Day stamp reported by the API.
    pub date: NaiveDate,
}
