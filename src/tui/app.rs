use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info, warn};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::fs;
use std::path::PathBuf;

use crate::api::PrayerApi;
use crate::config::AppConfig;
use crate::dashboard::{
    AddOutcome, CardStore, CompleteOutcome, Dashboard, DashboardView, ImsakiyePanel,
};
use crate::location::{nearest_province, Locator, Position};
use crate::models::province::PROVINCES;
use crate::prayer_times::ramadan::imsakiye_text;
use crate::prayer_times::{local_now, RamadanWindow};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme::Palette;
use crate::tui::widgets::picker::{Picker, PickerMode};
use crate::tui::widgets::{centered, city_card, header, placeholder, ramadan, statusbar};
use crate::tui::worker::{self, Command, Loaded};
use crate::utils::clipboard;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Imsakiye,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub palette: Palette,
    pub dashboard: Dashboard,
    pub store: CardStore,
    pub imsakiye: ImsakiyePanel,
    pub picker: Option<Picker>,
    pub focus_idx: usize,
    pub notice: Option<String>,
    pub locating: bool,
    pub should_quit: bool,
    /// Where theme changes are saved. `None` keeps them in memory only.
    pub config_path: Option<PathBuf>,
    now: NaiveDateTime,
    outbox: Vec<Command>,
}

impl App {
    /// A fresh app. The first command queued is a position lookup.
    pub fn new(config: AppConfig) -> Self {
        let now = local_now(config.location.utc_offset_minutes);
        App {
            view: View::Dashboard,
            palette: Palette::for_theme(config.ui.theme),
            config,
            dashboard: Dashboard::new(),
            store: CardStore::new(),
            imsakiye: ImsakiyePanel::default(),
            picker: None,
            focus_idx: 0,
            notice: None,
            locating: true,
            should_quit: false,
            config_path: None,
            now,
            outbox: vec![Command::Locate],
        }
    }

    /// Commands queued since the last call, for the worker.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.outbox)
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
        self.dashboard.tick(now);
        self.refresh();
    }

    /// Bring the card store in line with the dashboard state.
    fn refresh(&mut self) {
        let view = DashboardView::build(&self.dashboard, self.now);
        let patched = self.store.reconcile(&view);
        if patched > 0 {
            debug!("Applied {} patches, store now {:?}", patched, self.store.stats());
        }
        let count = self.dashboard.cities().len();
        if self.focus_idx >= count {
            self.focus_idx = count.saturating_sub(1);
        }
    }

    pub fn request_add(&mut self, city: &str) {
        match self.dashboard.begin_add(city) {
            AddOutcome::Requested => self.outbox.push(Command::FetchDay {
                city: city.to_string(),
            }),
            AddOutcome::Duplicate => {
                self.notice = Some(format!("{} zaten listenizde.", city));
            }
        }
    }

    pub fn request_replace(&mut self, city: &str) {
        self.dashboard.begin_replace(city);
        self.imsakiye = ImsakiyePanel::default();
        self.focus_idx = 0;
        self.outbox.push(Command::FetchDay {
            city: city.to_string(),
        });
        self.refresh();
    }

    pub fn request_locate(&mut self) {
        if self.locating {
            return;
        }
        self.locating = true;
        self.outbox.push(Command::Locate);
    }

    pub fn handle_loaded(&mut self, loaded: Loaded) {
        match loaded {
            Loaded::Day { city, data } => match self.dashboard.complete_add(&city, data, self.now) {
                CompleteOutcome::Added => {
                    self.imsakiye.begin(&city);
                    self.outbox.push(Command::FetchRamadan { city });
                }
                CompleteOutcome::Stale => {}
                CompleteOutcome::Unavailable => {
                    self.notice = Some(format!("{} için vakitler alınamadı.", city));
                }
            },
            Loaded::Ramadan { city, days } => {
                self.imsakiye.complete(&city, days, &self.dashboard);
            }
            Loaded::Located(pos) => self.handle_located(pos),
        }
        self.refresh();
    }

    fn handle_located(&mut self, pos: Option<Position>) {
        self.locating = false;
        match pos.and_then(|p| nearest_province(p, PROVINCES)) {
            Some((province, km)) => {
                info!("Nearest province is {} ({:.1} km)", province.name, km);
                self.request_add(province.name);
            }
            None => {
                if self.dashboard.is_empty() && !self.dashboard.has_pending() {
                    let city = self.config.location.default_city.clone();
                    self.notice = Some(format!("Konum alınamadı, {} gösteriliyor.", city));
                    self.request_add(&city);
                } else {
                    self.notice = Some("Konum alınamadı.".to_string());
                }
            }
        }
    }

    /// City of the focused card, in display order.
    pub fn focused_city(&self) -> Option<String> {
        match self.store.view() {
            DashboardView::Cards(cards) => cards.get(self.focus_idx).map(|c| c.city.clone()),
            DashboardView::Placeholder => None,
        }
    }

    pub fn remove_focused(&mut self) {
        if let Some(city) = self.focused_city() {
            if self.dashboard.remove(&city) {
                self.imsakiye.forget(&city);
                self.follow_remaining_city();
                self.notice = Some(format!("{} kaldırıldı.", city));
            }
            self.refresh();
        }
    }

    /// Point an idle imsakiye at the first tracked city, if any.
    fn follow_remaining_city(&mut self) {
        if self.imsakiye.city().is_some() {
            return;
        }
        if let Some(next) = self.dashboard.cities().first() {
            let city = next.city.clone();
            self.imsakiye.begin(&city);
            self.outbox.push(Command::FetchRamadan { city });
        }
    }

    pub fn toggle_theme(&mut self) {
        self.config.ui.theme = self.config.ui.theme.toggled();
        self.palette = Palette::for_theme(self.config.ui.theme);
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!("Saving theme failed: {:#}", e);
                self.notice = Some("Tema kaydedilemedi.".to_string());
            }
        }
    }

    /// One line per tracked city, in display order.
    pub fn share_text(&self) -> Option<String> {
        let cards = match self.store.view() {
            DashboardView::Cards(cards) => cards,
            DashboardView::Placeholder => return None,
        };
        let lines: Vec<String> = cards
            .iter()
            .map(|c| format!("{}: Sıradaki vakit {} - {}", c.city, c.next.label, c.next.remaining))
            .collect();
        Some(lines.join("\n"))
    }

    fn share(&mut self) {
        let Some(text) = self.share_text() else {
            self.notice = Some("Paylaşılacak il yok.".to_string());
            return;
        };
        self.notice = Some(match clipboard::copy(&text) {
            Ok(()) => "Vakitler panoya kopyalandı.".to_string(),
            Err(e) => {
                warn!("Clipboard write failed: {:#}", e);
                "Panoya kopyalanamadı.".to_string()
            }
        });
    }

    fn export_imsakiye(&mut self) {
        let ImsakiyePanel::Loaded { city, days } = &self.imsakiye else {
            self.notice = Some("İmsakiye henüz hazır değil.".to_string());
            return;
        };
        let text = imsakiye_text(city, days, self.now.date());
        let result = AppConfig::ensure_data_dir().and_then(|dir| {
            let path = dir.join(format!("imsakiye-{}.txt", city));
            fs::write(&path, text).with_context(|| format!("Writing {}", path.display()))?;
            Ok(path)
        });
        self.notice = Some(match result {
            Ok(path) => format!("İmsakiye kaydedildi: {}", path.display()),
            Err(e) => {
                warn!("Export failed: {:#}", e);
                "İmsakiye kaydedilemedi.".to_string()
            }
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return;
        }
        self.notice = None;
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Imsakiye => self.handle_imsakiye_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('a') => self.picker = Some(Picker::new(PickerMode::Add)),
            KeyCode::Char('c') => self.picker = Some(Picker::new(PickerMode::Replace)),
            KeyCode::Char('x') => self.remove_focused(),
            KeyCode::Char('g') => self.request_locate(),
            KeyCode::Char('i') => self.view = View::Imsakiye,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('y') => self.share(),
            KeyCode::Char('p') => self.export_imsakiye(),
            KeyCode::Left => self.focus_idx = self.focus_idx.saturating_sub(1),
            KeyCode::Right => {
                let max = self.dashboard.cities().len().saturating_sub(1);
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_imsakiye_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('i') => self.view = View::Dashboard,
            KeyCode::Char('p') => self.export_imsakiye(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.picker = None,
            KeyCode::Up => picker.previous(1),
            KeyCode::Down => picker.next(1),
            KeyCode::PageUp => picker.previous(10),
            KeyCode::PageDown => picker.next(10),
            KeyCode::Char(c) => picker.jump_to(c),
            KeyCode::Enter => {
                let mode = picker.mode;
                let chosen = picker.selected();
                self.picker = None;
                if let Some(province) = chosen {
                    match mode {
                        PickerMode::Add => self.request_add(province.name),
                        PickerMode::Replace => self.request_replace(province.name),
                    }
                }
            }
            _ => {}
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, chunks[0], &self.palette, self.config.ui.theme, self.now.date());
        statusbar::render(frame, chunks[2], &self.palette, self.notice.as_deref());

        match self.view {
            View::Imsakiye => {
                ramadan::render(frame, chunks[1], &self.palette, &self.imsakiye, self.now.date());
            }
            View::Dashboard | View::Help => self.draw_cards(frame, chunks[1]),
        }

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }

        let palette = self.palette;
        if let Some(picker) = self.picker.as_mut() {
            picker.render(frame, area, &palette);
        }
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect) {
        match self.store.view() {
            DashboardView::Placeholder => {
                let busy = self.locating || self.dashboard.has_pending();
                placeholder::render(frame, area, &self.palette, busy);
            }
            DashboardView::Cards(cards) => {
                city_card::render_all(frame, area, &self.palette, cards, self.focus_idx);
            }
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = centered(area, (area.width / 2).max(40), 15);

        frame.render_widget(Clear, popup_area);

        let p = &self.palette;
        let bindings = [
            ("  [a]          ", "İl ekle"),
            ("  [c]          ", "İli değiştir"),
            ("  [x]          ", "Seçili ili kaldır"),
            ("  [← →]        ", "İller arasında gez"),
            ("  [g]          ", "Konumumu kullan"),
            ("  [i]          ", "Ramazan imsakiyesi"),
            ("  [p]          ", "İmsakiyeyi dosyaya yaz"),
            ("  [y]          ", "Vakitleri panoya kopyala"),
            ("  [t]          ", "Koyu / açık tema"),
            ("  [?]          ", "Yardım"),
            ("  [Esc] / [q]  ", "Çıkış"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Kısayollar",
                p.gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(bindings.iter().map(|(key, label)| {
            Line::from(vec![
                Span::styled(*key, p.gold()),
                Span::styled(*label, p.dim()),
            ])
        }));

        let block = Block::default()
            .title(Span::styled(" Yardım ", p.gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(p.gold())
            .style(p.surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

fn dispatch(app: &mut App, commands: &std::sync::mpsc::Sender<Command>) -> Result<()> {
    for command in app.take_commands() {
        commands
            .send(command)
            .context("Fetch worker stopped")?;
    }
    Ok(())
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let api = PrayerApi::new(&config.api)?;
    let locator = Locator::from_config(&config)?;
    let window = RamadanWindow::from_config(&config.ramadan);

    let mut app = App::new(config);
    app.config_path = AppConfig::config_path().ok();

    let events = EventHandler::new(1000);
    let commands = worker::spawn(api, locator, window, events.sender())?;
    dispatch(&mut app, &commands)?;

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &events, &commands);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
    commands: &std::sync::mpsc::Sender<Command>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                let now = local_now(app.config.location.utc_offset_minutes);
                app.tick(now);
            }
            Event::Resize => {}
            Event::Loaded(loaded) => app.handle_loaded(loaded),
        }
        dispatch(app, commands)?;
    }
    Ok(())
}
