use ratatui::layout::Rect;

pub mod city_card;
pub mod header;
pub mod picker;
pub mod placeholder;
pub mod ramadan;
pub mod statusbar;

/// A `width` x `height` rect centred in `area`, shrunk to fit inside it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 40, 12);
        let popup = centered(area, 60, 16);
        assert_eq!(popup, Rect::new(0, 0, 40, 12));
        assert!(popup.bottom() <= area.bottom());
    }

    #[test]
    fn smaller_popup_is_centred() {
        let popup = centered(Rect::new(2, 1, 80, 24), 40, 10);
        assert_eq!(popup, Rect::new(22, 8, 40, 10));
    }
}
