use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::dashboard::view::{CityCard, RowStatus};
use crate::tui::theme::Palette;
use crate::utils::format::pad_to_width;

pub const CARD_WIDTH: u16 = 32;

/// Index of the first card to draw so that `focused` stays visible when
/// only `visible` cards fit.
pub fn first_visible(total: usize, visible: usize, focused: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let focused = focused.min(total - 1);
    if focused < visible {
        0
    } else {
        (focused + 1 - visible).min(total - visible)
    }
}

/// Draw the cards side by side, scrolling horizontally to keep the focused
/// one on screen.
pub fn render_all(frame: &mut Frame, area: Rect, palette: &Palette, cards: &[CityCard], focused: usize) {
    let visible = ((area.width / CARD_WIDTH) as usize).max(1);
    let start = first_visible(cards.len(), visible, focused);
    let shown: Vec<&CityCard> = cards.iter().skip(start).take(visible).collect();

    let constraints: Vec<Constraint> = shown
        .iter()
        .map(|_| Constraint::Ratio(1, shown.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, card) in shown.iter().enumerate() {
        render(frame, columns[i], palette, card, start + i == focused);
    }
}

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, card: &CityCard, focused: bool) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.city),
            palette.gold().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(format!(" {} ", card.footer), palette.dim()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(focused))
        .style(palette.surface());

    let mut next_label = vec![
        Span::styled("  Sıradaki Vakit: ", palette.dim()),
        Span::styled(card.next.label, palette.gold().add_modifier(Modifier::BOLD)),
    ];
    if card.next.tomorrow {
        next_label.push(Span::styled(" (yarın)", palette.dim()));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(next_label),
        Line::from(Span::styled(
            format!("  {}", card.next.remaining),
            palette.amber().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for row in &card.rows {
        let (icon, icon_style) = match row.status {
            RowStatus::Active => ("▶", palette.gold()),
            RowStatus::Passed => ("●", palette.dim()),
            RowStatus::Upcoming => ("○", palette.dim()),
        };
        let name_style = match row.status {
            RowStatus::Active => palette.gold().add_modifier(Modifier::BOLD),
            RowStatus::Passed => palette.dim(),
            RowStatus::Upcoming if row.accent => palette.amber(),
            RowStatus::Upcoming => palette.bold(),
        };
        let time_style = match row.status {
            RowStatus::Active => palette.gold().add_modifier(Modifier::BOLD),
            RowStatus::Passed => palette.dim().add_modifier(Modifier::CROSSED_OUT),
            RowStatus::Upcoming => Style::default().fg(palette.text),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", icon), icon_style),
            Span::styled(pad_to_width(row.name.localized(), 9), name_style),
            Span::styled(row.time.clone(), time_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
