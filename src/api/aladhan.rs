use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::api::error::FetchError;
use crate::config::settings::ApiConfig;
use crate::models::{DailyRecord, DayTimings, RamadanDay, Timings};
use crate::prayer_times::{filter_ramadan_days, RamadanWindow};

/// Date format used by the API for Gregorian dates.
pub const API_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct DayData {
    timings: HashMap<String, String>,
    date: DateInfo,
}

#[derive(Debug, Deserialize)]
struct DateInfo {
    gregorian: Gregorian,
}

#[derive(Debug, Deserialize)]
struct Gregorian {
    date: String,
}

/// Client for the Aladhan prayer-times API, pinned to one country and
/// calculation method.
#[derive(Debug, Clone)]
pub struct PrayerApi {
    client: reqwest::Client,
    base_url: String,
    country: String,
    method: u8,
}

impl PrayerApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("vakit/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country: config.country.clone(),
            method: config.method,
        })
    }

    /// Today's timings for `city`. `None` when the data is unavailable.
    pub async fn fetch_day(&self, city: &str) -> Option<DayTimings> {
        match self.try_fetch_day(city).await {
            Ok(day) => {
                info!("Fetched timings for {} ({})", city, day.date);
                Some(day)
            }
            Err(e) => {
                error!("Fetching timings for {} failed: {}", city, e);
                None
            }
        }
    }

    /// Every day of `month`/`year` for `city`. `None` when the data is unavailable.
    pub async fn fetch_month(&self, city: &str, month: u32, year: i32) -> Option<Vec<DailyRecord>> {
        match self.try_fetch_month(city, month, year).await {
            Ok(days) => {
                info!("Fetched {} days for {} {:02}/{}", days.len(), city, month, year);
                Some(days)
            }
            Err(e) => {
                error!("Fetching calendar {:02}/{} for {} failed: {}", month, year, city, e);
                None
            }
        }
    }

    /// Fetch every month the window spans, concurrently, and cut it down to
    /// the thirty fasting days. Any missing month makes the whole calendar
    /// unavailable.
    pub async fn fetch_ramadan(&self, city: &str, window: &RamadanWindow) -> Option<Vec<RamadanDay>> {
        let handles: Vec<_> = window
            .months()
            .into_iter()
            .map(|(month, year)| {
                let api = self.clone();
                let city = city.to_string();
                tokio::spawn(async move { api.fetch_month(&city, month, year).await })
            })
            .collect();

        let mut records = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Some(days)) => records.extend(days),
                Ok(None) => return None,
                Err(e) => {
                    error!("Calendar task for {} failed: {}", city, e);
                    return None;
                }
            }
        }
        Some(filter_ramadan_days(&records, window))
    }

    async fn try_fetch_day(&self, city: &str) -> Result<DayTimings, FetchError> {
        let url = format!("{}/timingsByCity", self.base_url);
        let method = self.method.to_string();
        let query = [
            ("city", city),
            ("country", self.country.as_str()),
            ("method", method.as_str()),
        ];
        let envelope = self.get(&url, &query).await?;
        decode_day(envelope)
    }

    async fn try_fetch_month(
        &self,
        city: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<DailyRecord>, FetchError> {
        let url = format!("{}/calendarByCity", self.base_url);
        let method = self.method.to_string();
        let month = month.to_string();
        let year = year.to_string();
        let query = [
            ("city", city),
            ("country", self.country.as_str()),
            ("method", method.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
        ];
        let envelope = self.get(&url, &query).await?;
        decode_month(envelope)
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Envelope, FetchError> {
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json::<Envelope>().await?)
    }
}

fn check(envelope: Envelope) -> Result<serde_json::Value, FetchError> {
    if envelope.code != 200 {
        return Err(FetchError::Api {
            code: envelope.code,
            status: envelope.status,
        });
    }
    Ok(envelope.data)
}

fn parse_gregorian(s: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(s, API_DATE_FORMAT)
        .map_err(|e| FetchError::Decode(format!("bad date '{}': {}", s, e)))
}

pub(crate) fn decode_day(envelope: Envelope) -> Result<DayTimings, FetchError> {
    let data = check(envelope)?;
    let day: DayData =
        serde_json::from_value(data).map_err(|e| FetchError::Decode(e.to_string()))?;
    let timings =
        Timings::from_api_map(&day.timings).map_err(|e| FetchError::Decode(e.to_string()))?;
    let date = parse_gregorian(&day.date.gregorian.date)?;
    Ok(DayTimings { timings, date })
}

/// Days whose timings do not parse are dropped with a warning.
pub(crate) fn decode_month(envelope: Envelope) -> Result<Vec<DailyRecord>, FetchError> {
    let data = check(envelope)?;
    let days: Vec<DayData> =
        serde_json::from_value(data).map_err(|e| FetchError::Decode(e.to_string()))?;

    let mut records = Vec::with_capacity(days.len());
    for day in days {
        match Timings::from_api_map(&day.timings) {
            Ok(timings) => records.push(DailyRecord {
                date: day.date.gregorian.date,
                timings,
            }),
            Err(e) => warn!("Skipping {}: {}", day.date.gregorian.date, e),
        }
    }
    Ok(records)
}
