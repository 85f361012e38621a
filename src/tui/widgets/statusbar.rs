use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Palette;

const HINTS: [(&str, &str); 9] = [
    ("[a]", " ekle  "),
    ("[c]", " değiştir  "),
    ("[x]", " sil  "),
    ("[g]", " konum  "),
    ("[i]", " imsakiye  "),
    ("[t]", " tema  "),
    ("[y]", " paylaş  "),
    ("[?]", " yardım  "),
    ("[q]", " çıkış"),
];

/// Key hints, or the latest notice when there is one.
pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, notice: Option<&str>) {
    let line = match notice {
        Some(text) => Line::from(Span::styled(text, palette.amber())),
        None => {
            let mut spans = Vec::new();
            for (key, label) in &HINTS {
                spans.push(Span::styled(*key, palette.gold()));
                spans.push(Span::styled(*label, palette.dim()));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
