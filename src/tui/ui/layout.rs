use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// A popup of the given size, as percentages of `r`, centered in `r`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let band = |pct: u16| {
        let pad = Constraint::Percentage((100 - pct.min(100)) / 2);
        [pad, Constraint::Percentage(pct), pad]
    };
    let [_, middle, _] = Layout::vertical(band(percent_y)).areas(r);
    let [_, popup, _] = Layout::horizontal(band(percent_x)).areas(middle);
    popup
}

/// Unicode die glyph for a face value.
pub(super) fn die_glyph(face: u8) -> char {
    match face {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        6 => '⚅',
        _ => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_sits_inside_its_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, parent);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn inner_never_underflows() {
        assert_eq!(inner(Rect::new(3, 4, 1, 1)).width, 0);
        assert_eq!(inner(Rect::new(3, 4, 10, 6)), Rect::new(4, 5, 8, 4));
    }
}
