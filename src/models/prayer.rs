use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// Daily order. Every timing set is keyed by exactly these six.
    pub const ORDER: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Columns of the imsakiye. Sunrise is informational only.
    pub const RAMADAN: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Key used by the prayer-times API.
    pub fn api_key(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    pub fn localized(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "İmsak",
            PrayerName::Sunrise => "Güneş",
            PrayerName::Dhuhr => "Öğle",
            PrayerName::Asr => "İkindi",
            PrayerName::Maghrib => "Akşam",
            PrayerName::Isha => "Yatsı",
        }
    }

    fn index(&self) -> usize {
        match self {
            PrayerName::Fajr => 0,
            PrayerName::Sunrise => 1,
            PrayerName::Dhuhr => 2,
            PrayerName::Asr => 3,
            PrayerName::Maghrib => 4,
            PrayerName::Isha => 5,
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.localized())
    }
}

/// Parse an API time value. The API may append a zone tag, e.g. `"05:30 (+03)"`.
pub fn parse_api_time(s: &str) -> Result<NaiveTime> {
    let hhmm = s.split_whitespace().next().unwrap_or("");
    NaiveTime::parse_from_str(hhmm, "%H:%M").map_err(|e| anyhow!("Bad time '{}': {}", s, e))
}

/// One day's times for all six prayers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timings {
    times: [NaiveTime; 6],
}

impl Timings {
    pub fn new(
        fajr: NaiveTime,
        sunrise: NaiveTime,
        dhuhr: NaiveTime,
        asr: NaiveTime,
        maghrib: NaiveTime,
        isha: NaiveTime,
    ) -> Self {
        Self {
            times: [fajr, sunrise, dhuhr, asr, maghrib, isha],
        }
    }

    /// Build from the API's `{"Fajr": "05:30", ...}` map. Extra keys
    /// (Imsak, Midnight, ...) are ignored; a missing one is an error.
    pub fn from_api_map(map: &HashMap<String, String>) -> Result<Self> {
        let mut times = [NaiveTime::MIN; 6];
        for name in PrayerName::ORDER {
            let raw = map
                .get(name.api_key())
                .ok_or_else(|| anyhow!("Missing timing for {}", name.api_key()))?;
            times[name.index()] = parse_api_time(raw)?;
        }
        Ok(Self { times })
    }

    pub fn get(&self, name: PrayerName) -> NaiveTime {
        self.times[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, NaiveTime)> + '_ {
        PrayerName::ORDER.iter().map(|n| (*n, self.get(*n)))
    }
}
