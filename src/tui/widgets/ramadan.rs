use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::dashboard::ImsakiyePanel;
use crate::models::{PrayerName, RamadanDay};
use crate::tui::theme::Palette;
use crate::utils::format::format_time;

pub const LOADING: &str = "Ramazan verileri yükleniyor...";
pub const FAILED: &str = "Ramazan takvimi yüklenemedi.";
pub const IDLE: &str = "İmsakiye için takip edilen il yok.";

/// Scroll offset that keeps today's row in view, if today is in the grid.
pub fn scroll_to_today(days: &[RamadanDay], today: NaiveDate, height: usize) -> usize {
    match days.iter().position(|d| d.date == today) {
        Some(idx) if height > 0 && idx >= height => idx + 1 - height,
        _ => 0,
    }
}

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, panel: &ImsakiyePanel, today: NaiveDate) {
    let title = match panel.city() {
        Some(city) => format!(" Ramazan İmsakiyesi · {} ", city),
        None => " Ramazan İmsakiyesi ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, palette.gold().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(true))
        .style(palette.surface());

    let message = |text: &'static str, style: Style| {
        Paragraph::new(Span::styled(text, style)).block(block.clone())
    };

    match panel {
        ImsakiyePanel::Idle => frame.render_widget(message(IDLE, palette.dim()), area),
        ImsakiyePanel::Loading { .. } => frame.render_widget(message(LOADING, palette.amber()), area),
        ImsakiyePanel::Failed { .. } => frame.render_widget(message(FAILED, palette.red()), area),
        ImsakiyePanel::Loaded { days, .. } => {
            let body_height = area.height.saturating_sub(3) as usize;
            let skip = scroll_to_today(days, today, body_height);
            frame.render_widget(grid(palette, days, today, skip).block(block.clone()), area);
        }
    }
}

fn grid<'a>(palette: &Palette, days: &'a [RamadanDay], today: NaiveDate, skip: usize) -> Table<'a> {
    let mut header = vec![Cell::from("Gün"), Cell::from("Tarih")];
    header.extend(PrayerName::RAMADAN.iter().map(|n| Cell::from(n.localized())));

    let rows = days.iter().skip(skip).map(|day| {
        let mut cells = vec![
            Cell::from(format!("{}. Gün", day.day)),
            Cell::from(day.display_date()),
        ];
        cells.extend(
            PrayerName::RAMADAN
                .iter()
                .map(|n| Cell::from(format_time(day.timings.get(*n)))),
        );
        let row = Row::new(cells);
        if day.date == today {
            row.style(palette.highlight())
        } else {
            row.style(palette.base().bg(palette.surface))
        }
    });

    let mut widths = vec![Constraint::Length(8), Constraint::Length(11)];
    widths.extend(PrayerName::RAMADAN.iter().map(|_| Constraint::Length(7)));

    Table::new(rows, widths)
        .header(Row::new(header).style(palette.gold().add_modifier(Modifier::BOLD)))
        .column_spacing(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timings;
    use chrono::{Duration, NaiveTime};

    fn days() -> Vec<RamadanDay> {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        (0..30)
            .map(|i| RamadanDay {
                day: i + 1,
                date: start + Duration::days(i as i64),
                timings: Timings::new(t(6, 10), t(7, 35), t(13, 20), t(16, 20), t(18, 55), t(20, 15)),
            })
            .collect()
    }

    #[test]
    fn early_days_need_no_scroll() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        assert_eq!(scroll_to_today(&days(), today, 10), 0);
    }

    #[test]
    fn late_days_scroll_into_view() {
        // Day 25
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(scroll_to_today(&days(), today, 10), 15);
    }

    #[test]
    fn outside_ramadan_starts_at_the_top() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(scroll_to_today(&days(), today, 10), 0);
    }
}
