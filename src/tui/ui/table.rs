use crate::game::MoveKind;
use crate::player::Player;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, die_glyph, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    // header: three text rows, status: two, both boxed
    let [header_area, pool_area, seats_area, status_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(4),
    ])
    .areas(f.area());

    let game = &app.game;
    let bid_line = match game.current_bid() {
        Some(bid) => format!(
            "Bid: {}   Odds: {:.2}%   Dice in game: {}",
            bid,
            game.odds_for(bid) * 100.0,
            game.total_dice()
        ),
        None => format!("Bid: none   Dice in game: {}", game.total_dice()),
    };
    let header_lines = vec![
        Line::from(format!(
            "Turn: P{}   Moves: {}   Seed: {}",
            game.current(),
            game.legal_moves(),
            if app.seed == 0 { "random".to_string() } else { app.seed.to_string() }
        )),
        Line::from(bid_line),
        Line::from(Span::styled(
            app.last_report().unwrap_or("").to_string(),
            Style::default().fg(Color::Cyan),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("liars-dice").borders(Borders::ALL));
    f.render_widget(header, header_area);

    let pool: Vec<Span> = if game.table().is_empty() {
        vec![Span::styled("empty", Style::default().add_modifier(Modifier::DIM))]
    } else {
        game.table()
            .iter()
            .map(|d| die_span(d.face(), Color::Yellow))
            .collect()
    };
    let pool_block =
        Block::default().title(format!("Table ({})", game.table().len())).borders(Borders::ALL);
    let pool_para = Paragraph::new(Line::from(pool)).block(pool_block);
    f.render_widget(pool_para, pool_area);

    draw_seats(f, seats_area, app);

    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let [actions_area, keys_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(inner(status_area));

    let legal = game.legal_moves();
    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let mut left_info = vec![Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("M move", action_style(legal.contains(MoveKind::Move))),
        Span::raw(" • "),
        Span::styled("C claim", action_style(legal.contains(MoveKind::Claim))),
        Span::raw(" • "),
        Span::styled("X challenge", action_style(game.current_bid().is_some())),
    ])];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![
        Line::from("Space restart • V reveal"),
        Line::from("? help • H history • Esc menu"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, actions_area);
    f.render_widget(right_para, keys_area);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.entry_active() {
        draw_entry(f, app);
    }
}

/// Seats wrap around the table: the first half fills the top row left to
/// right, the rest come back along the bottom row right to left.
fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let players = app.game.players();
    let (top, bottom) = players.split_at((players.len() + 1) / 2);
    let [top_row, bottom_row] =
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
    let row = |n: usize| Layout::horizontal(vec![Constraint::Ratio(1, n.max(1) as u32); n]);
    for (seat, cell) in top.iter().zip(row(top.len()).split(top_row).iter()) {
        render_seat(f, *cell, app, seat);
    }
    for (seat, cell) in bottom.iter().rev().zip(row(bottom.len()).split(bottom_row).iter()) {
        render_seat(f, *cell, app, seat);
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, p: &Player) {
    let idx = p.id();
    let game = &app.game;
    let mut title = format!("P{idx}");
    if idx == game.current() {
        title.push_str(" [Act]");
    }
    let n = game.num_players();
    if game.current_bid().is_some() && idx == (game.current() + n - 1) % n {
        title.push_str(" [Bid]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if idx == game.current() {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    let challenge = game.last_challenge();
    if let Some(c) = challenge {
        let winner = if c.challenger_wins { c.challenger } else { c.challenged };
        if idx == winner {
            block = block.border_style(Style::default().fg(Color::Green));
        }
    }
    let dice_line = if app.hand_visible(idx) {
        let glyphs: Vec<Span> = p
            .dice()
            .iter()
            .map(|d| die_span(d.face(), Color::White))
            .collect();
        Line::from(glyphs)
    } else {
        let hidden = Style::default().add_modifier(Modifier::DIM);
        Line::from(Span::styled("▣ ".repeat(p.len()), hidden))
    };
    let lines = vec![dice_line, Line::from(format!("Dice: {}", p.len()))];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, area);
}

fn die_span(face: u8, color: Color) -> Span<'static> {
    Span::styled(format!("{} ", die_glyph(face)), Style::default().fg(color))
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            lines.push(Line::from(format!("P{} {}", entry.player, entry.event)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: move dice of one face to the table"),
        Line::from("- C: claim (bid count and face)"),
        Line::from("- X: challenge the previous bid"),
        Line::from("- V: reveal / conceal all hands"),
        Line::from("- Space: restart the game"),
        Line::from("- H: history"),
        Line::from("- Esc: menu"),
        Line::from(""),
        Line::from(Span::styled("Entry:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Up / Down: face"),
        Line::from("- + / - or 0-9: count"),
        Line::from("- Backspace: delete digit"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_entry(f: &mut Frame, app: &AppState) {
    let Some(entry) = app.entry() else {
        return;
    };
    let area = centered_rect(50, 30, f.area());
    let title = match entry.kind {
        MoveKind::Move => format!("P{} Move", app.game.current()),
        _ => format!("P{} Claim", app.game.current()),
    };
    let mut lines = vec![
        Line::from(format!("Face: {} ({})", entry.face, die_glyph(entry.face))),
        Line::from(format!("Count: {}", entry.count)),
    ];
    if entry.kind == MoveKind::Claim {
        let floor = app.game.current_bid().map(|b| b.count).unwrap_or(0);
        lines.push(Line::from(format!("Min count: {floor}")));
    } else if let Some(p) = app.game.player(app.game.current()) {
        lines.push(Line::from(format!("You hold {} of that face", p.count_of_value(entry.face))));
    }
    lines.push(Line::from("Up/Down face, +/- or digits count, Enter submit, Esc cancel"));
    let block = Block::default().title(title).borders(Borders::ALL);
    let [form_area, error_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner(area));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, form_area);
    let error = app.entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, error_area);
}
