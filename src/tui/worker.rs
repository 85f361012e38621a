use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::PrayerApi;
use crate::location::{Locator, Position};
use crate::models::{DayTimings, RamadanDay};
use crate::prayer_times::RamadanWindow;
use crate::tui::events::Event;

/// Work the UI hands off so it never blocks on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchDay { city: String },
    FetchRamadan { city: String },
    Locate,
}

#[derive(Debug)]
pub enum Loaded {
    Day { city: String, data: Option<DayTimings> },
    Ramadan { city: String, days: Option<Vec<RamadanDay>> },
    Located(Option<Position>),
}

/// Spawn the fetch thread. It owns a tokio runtime and posts each result
/// back onto the UI event channel.
pub fn spawn(
    api: PrayerApi,
    locator: Locator,
    window: RamadanWindow,
    events: mpsc::Sender<Event>,
) -> Result<mpsc::Sender<Command>> {
    let runtime = tokio::runtime::Runtime::new().context("Starting async runtime")?;
    let (tx, rx) = mpsc::channel::<Command>();

    thread::spawn(move || {
        while let Ok(command) = rx.recv() {
            debug!("Worker received {:?}", command);
            let api = api.clone();
            let locator = locator.clone();
            let events = events.clone();
            // Requests run side by side; a slow city does not hold up the next one.
            runtime.spawn(async move {
                let loaded = match command {
                    Command::FetchDay { city } => {
                        let data = api.fetch_day(&city).await;
                        Loaded::Day { city, data }
                    }
                    Command::FetchRamadan { city } => {
                        let days = api.fetch_ramadan(&city, &window).await;
                        Loaded::Ramadan { city, days }
                    }
                    Command::Locate => Loaded::Located(locator.locate().await),
                };
                let _ = events.send(Event::Loaded(loaded));
            });
        }
        info!("Worker exiting (channel closed)");
    });

    Ok(tx)
}
