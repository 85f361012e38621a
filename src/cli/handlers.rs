use anyhow::{anyhow, Context, Result};
use log::warn;
use std::str::FromStr;

use crate::api::PrayerApi;
use crate::config::{AppConfig, Theme};
use crate::location::{nearest_province, Position};
use crate::models::province::{self, PROVINCES};
use crate::prayer_times::ramadan::{imsakiye_text, RAMADAN_DAYS};
use crate::prayer_times::{local_now, next_prayer, RamadanWindow};
use crate::utils::format::format_time;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Starting async runtime")
}

fn check_city(city: &str) {
    if province::find(city).is_none() {
        warn!("'{}' is not a province name; asking the API anyway", city);
    }
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, city: &str) -> Result<()> {
    check_city(city);
    let api = PrayerApi::new(&config.api)?;
    let day = runtime()?
        .block_on(api.fetch_day(city))
        .ok_or_else(|| anyhow!("Prayer times for '{}' are unavailable", city))?;

    let now = local_now(config.location.utc_offset_minutes);
    let next = next_prayer(&day.timings, now);

    println!();
    println_colored!(
        GOLD,
        "  Namaz Vakitleri · {} ({})",
        city,
        day.date.format("%d/%m/%Y")
    );
    println!();

    for (name, time) in day.timings.iter() {
        let label = format!("{:<8}", name.localized());
        if name == next.name && !next.tomorrow {
            println_colored!(AMBER, "  ▶ {}  {}", label, format_time(time));
        } else if now.date().and_time(time) < now {
            println_colored!(DIM, "    {}  {}", label, format_time(time));
        } else {
            println_colored!(BOLD, "    {}  {}", label, format_time(time));
        }
    }

    println!();
    let when = if next.tomorrow { " (yarın)" } else { "" };
    println_colored!(
        AMBER,
        "  Sıradaki Vakit: {} {}{} · {}",
        next.localized,
        format_time(next.at.time()),
        when,
        next.remaining
    );
    println!();
    Ok(())
}

// ─── Ramadan ─────────────────────────────────────────────────────────────────

pub fn handle_ramadan(config: &AppConfig, city: &str) -> Result<()> {
    check_city(city);
    let api = PrayerApi::new(&config.api)?;
    let window = RamadanWindow::from_config(&config.ramadan);
    let days = runtime()?
        .block_on(api.fetch_ramadan(city, &window))
        .ok_or_else(|| anyhow!("Ramazan takvimi yüklenemedi ({})", city))?;

    let today = local_now(config.location.utc_offset_minutes).date();
    print!("{}", imsakiye_text(city, &days, today));
    if days.len() < RAMADAN_DAYS {
        warn!("Only {} Ramadan days available for {}", days.len(), city);
    }
    Ok(())
}

// ─── Nearest ─────────────────────────────────────────────────────────────────

pub fn handle_nearest(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(anyhow!("Position {}, {} is out of range", lat, lon));
    }
    let (found, km) = nearest_province(Position::new(lat, lon), PROVINCES)
        .ok_or_else(|| anyhow!("No provinces to search"))?;
    println_colored!(GREEN, "  {} ({:.1} km)", found.name, km);
    Ok(())
}

// ─── Theme ───────────────────────────────────────────────────────────────────

pub fn handle_theme(config: &mut AppConfig, value: Option<&str>) -> Result<()> {
    match value {
        None => {
            println!("{}", config.ui.theme.as_str());
        }
        Some(value) => {
            let theme = Theme::from_str(value)?;
            config.ui.theme = theme;
            config.save().context("Saving config")?;
            println_colored!(GREEN, "  ✓ Tema: {}", theme.as_str());
        }
    }
    Ok(())
}
