use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Palette;

pub const PROMPT: &str = "Lütfen bir il seçin veya konumunuzu kullanın.";

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, locating: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(false))
        .style(palette.surface());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(PROMPT, palette.bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[a]", palette.gold()),
            Span::styled(" il ekle   ", palette.dim()),
            Span::styled("[g]", palette.gold()),
            Span::styled(" konumumu kullan", palette.dim()),
        ]),
    ];
    if locating {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Konum aranıyor...", palette.amber())));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
