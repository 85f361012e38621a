use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::api::aladhan::API_DATE_FORMAT;
use crate::config::settings::RamadanConfig;
use crate::models::{DailyRecord, PrayerName, RamadanDay};
use crate::utils::format::format_time;

pub const RAMADAN_DAYS: usize = 30;

/// Inclusive date range of the month of fasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamadanWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RamadanWindow {
    pub fn from_config(config: &RamadanConfig) -> Self {
        Self {
            start: config.start,
            end: config.end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// (month, year) pairs the window touches, in order.
    pub fn months(&self) -> Vec<(u32, i32)> {
        let mut months = Vec::new();
        let (mut month, mut year) = (self.start.month(), self.start.year());
        while (year, month) <= (self.end.year(), self.end.month()) {
            months.push((month, year));
            if month == 12 {
                month = 1;
                year += 1;
            } else {
                month += 1;
            }
        }
        months
    }
}

/// Keep the records inside the window, in input order, numbered from 1 and
/// capped at thirty days.
pub fn filter_ramadan_days(records: &[DailyRecord], window: &RamadanWindow) -> Vec<RamadanDay> {
    records
        .iter()
        .filter_map(|r| match NaiveDate::parse_from_str(&r.date, API_DATE_FORMAT) {
            Ok(date) => Some((date, r)),
            Err(e) => {
                warn!("Skipping record with date '{}': {}", r.date, e);
                None
            }
        })
        .filter(|(date, _)| window.contains(*date))
        .take(RAMADAN_DAYS)
        .enumerate()
        .map(|(i, (date, r))| RamadanDay {
            day: i as u32 + 1,
            date,
            timings: r.timings.clone(),
        })
        .collect()
}

/// Plain-text imsakiye for printing or saving.
pub fn imsakiye_text(city: &str, days: &[RamadanDay], today: NaiveDate) -> String {
    let mut out = format!("Ramazan İmsakiyesi - {}\n\n", city);
    out.push_str("Gün  Tarih       ");
    for name in PrayerName::RAMADAN {
        out.push_str(&format!("{:<8}", name.localized()));
    }
    out.push('\n');

    for day in days {
        out.push_str(&format!("{:>3}  {}  ", day.day, day.display_date()));
        for name in PrayerName::RAMADAN {
            out.push_str(&format!("{:<8}", format_time(day.timings.get(name))));
        }
        if day.date == today {
            out.push_str("  ← bugün");
        }
        out.push('\n');
    }
    out
}
