use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::models::province::{self, Province};
use crate::tui::theme::Palette;
use crate::tui::widgets::centered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    /// Add to the tracked list.
    Add,
    /// Replace everything with the chosen province.
    Replace,
}

/// Province selection popup, listed in Turkish alphabetical order.
#[derive(Debug)]
pub struct Picker {
    pub mode: PickerMode,
    provinces: Vec<&'static Province>,
    state: ListState,
}

impl Picker {
    pub fn new(mode: PickerMode) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            mode,
            provinces: province::sorted_by_name(),
            state,
        }
    }

    pub fn selected(&self) -> Option<&'static Province> {
        self.state.selected().and_then(|i| self.provinces.get(i).copied())
    }

    pub fn next(&mut self, step: usize) {
        let last = self.provinces.len().saturating_sub(1);
        let i = self.state.selected().unwrap_or(0);
        self.state.select(Some((i + step).min(last)));
    }

    pub fn previous(&mut self, step: usize) {
        let i = self.state.selected().unwrap_or(0);
        self.state.select(Some(i.saturating_sub(step)));
    }

    /// Jump to the next province starting with `c`, wrapping around.
    pub fn jump_to(&mut self, c: char) {
        let wanted = lower_tr(c);
        let start = self.state.selected().map(|i| i + 1).unwrap_or(0);
        let len = self.provinces.len();
        let found = (0..len).map(|k| (start + k) % len).find(|&i| {
            self.provinces[i]
                .name
                .chars()
                .next()
                .map(|first| lower_tr(first) == wanted)
                .unwrap_or(false)
        });
        if let Some(i) = found {
            self.state.select(Some(i));
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let popup = centered(area, 34, (area.height * 3 / 4).max(5));
        frame.render_widget(Clear, popup);

        let title = match self.mode {
            PickerMode::Add => " İl Ekle ",
            PickerMode::Replace => " İl Değiştir ",
        };
        let block = Block::default()
            .title(Span::styled(title, palette.gold().add_modifier(Modifier::BOLD)))
            .title_bottom(Span::styled(" [Enter] seç · [Esc] vazgeç ", palette.dim()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.amber())
            .style(palette.surface());

        let items: Vec<ListItem> = self
            .provinces
            .iter()
            .map(|p| ListItem::new(format!("  {}", p.name)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(palette.highlight())
            .highlight_symbol("›");
        frame.render_stateful_widget(list, popup, &mut self.state);
    }
}

fn lower_tr(c: char) -> String {
    match c {
        'I' => "ı".to_string(),
        'İ' => "i".to_string(),
        _ => c.to_lowercase().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_first_province() {
        let picker = Picker::new(PickerMode::Add);
        assert_eq!(picker.selected().map(|p| p.name), Some("Adana"));
    }

    #[test]
    fn navigation_is_clamped() {
        let mut picker = Picker::new(PickerMode::Add);
        picker.previous(5);
        assert_eq!(picker.selected().map(|p| p.name), Some("Adana"));
        picker.next(500);
        assert_eq!(picker.selected().map(|p| p.name), Some("Zonguldak"));
    }

    #[test]
    fn jump_by_letter() {
        let mut picker = Picker::new(PickerMode::Replace);
        picker.jump_to('k');
        let first = picker.selected().map(|p| p.name).unwrap();
        assert!(first.starts_with('K'));
        picker.jump_to('k');
        let second = picker.selected().map(|p| p.name).unwrap();
        assert!(second.starts_with('K'));
        assert_ne!(first, second);
    }

    #[test]
    fn dotless_capital_i_jumps_to_igdir() {
        let mut picker = Picker::new(PickerMode::Add);
        picker.jump_to('I');
        assert_eq!(picker.selected().map(|p| p.name), Some("Iğdır"));
        picker.jump_to('ı');
        assert_eq!(picker.selected().map(|p| p.name), Some("Isparta"));
    }

    #[test]
    fn dotted_capital_i_jumps_to_istanbul() {
        let mut picker = Picker::new(PickerMode::Add);
        picker.jump_to('İ');
        assert_eq!(picker.selected().map(|p| p.name), Some("İstanbul"));
    }

    #[test]
    fn dotted_i_jumps_to_istanbul_side() {
        let mut picker = Picker::new(PickerMode::Add);
        picker.jump_to('i');
        let name = picker.selected().map(|p| p.name).unwrap();
        assert!(name.starts_with('İ'));
    }
}
