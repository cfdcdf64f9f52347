use crate::die::FACES;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, die_glyph, inner};

const TITLE: &str = "L I A R ' S   D I C E";
const KEYS: &str = "↑/↓ select  +/- change  Enter deal  Esc back  Q quit";

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(60, 60, f.area());
    let frame = Block::bordered()
        .title(format!(" liars-dice {} ", crate::VERSION))
        .title_bottom(Line::from(KEYS).centered())
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Clear, area);
    f.render_widget(frame, area);

    let [banner, settings] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(inner(area));

    let strip: String = FACES.map(|face| format!("{} ", die_glyph(face))).collect();
    let banner_lines = vec![
        Line::default(),
        Line::from(TITLE).bold().centered(),
        Line::from(strip.trim_end().to_string()).yellow().centered(),
    ];
    f.render_widget(Paragraph::new(banner_lines), banner);

    let mut lines = vec![Line::from("Table setup").underlined().centered(), Line::default()];
    lines.extend(app.menu_items_display().into_iter().enumerate().map(|(i, label)| {
        if i == app.menu_index {
            Line::from(format!("> {label} <")).yellow().bold().centered()
        } else {
            Line::from(label).centered()
        }
    }));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), settings);
}
