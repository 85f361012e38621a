use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::tui::theme::Palette;
use crate::utils::hijri::hijri_string;

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

pub fn gregorian_string(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, theme: Theme, today: NaiveDate) {
    let theme_icon = match theme {
        Theme::Dark => "☾ koyu",
        Theme::Light => "☀ açık",
    };

    let title_line = Line::from(vec![
        Span::styled("  Namaz Vakitleri  ", palette.gold().add_modifier(Modifier::BOLD)),
        Span::styled(theme_icon, palette.dim()),
    ]);

    let mut date_spans = Vec::new();
    if let Some(hijri) = hijri_string(today) {
        date_spans.push(Span::styled(hijri, palette.amber()));
        date_spans.push(Span::styled("  ·  ", palette.dim()));
    }
    date_spans.push(Span::styled(gregorian_string(today), palette.dim()));

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.gold().add_modifier(Modifier::BOLD))
        .style(palette.base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_uses_turkish_month_names() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        assert_eq!(gregorian_string(date), "18 Şubat 2026");
    }
}
