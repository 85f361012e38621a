use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent, KeyEventKind};
use log::debug;

use crate::tui::worker::Loaded;

/// Everything the UI loop reacts to, merged onto one channel.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// The terminal changed size; redraw.
    Resize,
    /// Countdown refresh.
    Tick,
    /// A background fetch finished.
    Loaded(Loaded),
}

pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let input_tx = tx.clone();

        thread::spawn(move || {
            pump_input(&input_tx, tick_rate);
            debug!("Input thread exiting");
        });

        Self { tx, rx }
    }

    /// Sender for the fetch worker to post results on.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Forward terminal input and emit a tick every `tick_rate` until the
/// receiver goes away or the terminal read fails.
fn pump_input(tx: &mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).unwrap_or(false) {
            let forwarded = match event::read() {
                // Release/repeat events from some terminals would double every key
                Ok(CEvent::Key(key)) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                Ok(CEvent::Resize(..)) => Some(Event::Resize),
                Ok(_) => None,
                Err(_) => return,
            };
            if let Some(ev) = forwarded {
                if tx.send(ev).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
