//! Drawing the board and its overlays.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use yz_engine::help::{RULES, VERSION};
use yz_engine::{ButtonMode, Category, Control, Session};

use crate::layout::{Board, SLOT_WIDTH};

/// Die drawings, indexed by row then by face (0 for one pip).
const DIE_ART: [[&str; 6]; 5] = [
    [" ------- ", " ------- ", " ------- ", " ------- ", " ------- ", " ------- "],
    ["|       |", "|     o |", "|     o |", "| o   o |", "| o   o |", "| o   o |"],
    ["|   o   |", "|       |", "|   o   |", "|       |", "|   o   |", "| o   o |"],
    ["|       |", "| o     |", "| o     |", "| o   o |", "| o   o |", "| o   o |"],
    [" ------- ", " ------- ", " ------- ", " ------- ", " ------- ", " ------- "],
];

/// Width reserved for a slot's score.
const SCORE_WIDTH: usize = 3;

/// A screen drawn over the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    /// Just the board.
    #[default]
    None,
    /// The key help.
    Help,
    /// The rules of the game.
    Rules,
}

/// The label on the action button.
pub fn button_label(mode: ButtonMode) -> &'static str {
    match mode {
        ButtonMode::Roll => "Roll Dice",
        ButtonMode::Score => "  Score  ",
        ButtonMode::NewGame => "Try Again",
    }
}

/// Draw the full screen.
pub fn draw(frame: &mut Frame, session: &Session, board: &Board, overlay: Overlay) {
    let registry = session.registry();

    for (i, die) in registry.dice().iter().enumerate() {
        put(frame, board.die(i), die_widget(die));
    }
    put(frame, board.button(), button_widget(session));
    for cat in Category::ALL {
        put(frame, board.slot(cat), slot_widget(cat, registry.slot(cat)));
    }

    let area = frame.area();
    if area.height > 0 {
        let status = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        put(frame, status, status_widget(session));
    }

    match overlay {
        Overlay::None => {}
        Overlay::Help => draw_popup(frame, " Help ", help_lines()),
        Overlay::Rules => draw_popup(frame, " Rules of the Game ", rules_lines()),
    }
}

/// Render a widget clipped to the frame.
fn put<W: Widget>(frame: &mut Frame, rect: Rect, widget: W) {
    let clipped = rect.intersection(frame.area());
    if !clipped.is_empty() {
        frame.render_widget(widget, clipped);
    }
}

fn die_widget(die: &Control) -> Paragraph<'static> {
    let face = usize::try_from(die.value()).unwrap_or(0).min(5);
    let mut style = Style::default();
    if die.is_selected() {
        style = style.fg(Color::Cyan);
    }
    if die.is_hovering() {
        style = style.add_modifier(Modifier::BOLD);
    }
    let lines: Vec<Line<'static>> = DIE_ART.iter().map(|row| Line::from(row[face])).collect();
    Paragraph::new(lines).style(style)
}

fn button_widget(session: &Session) -> Paragraph<'static> {
    let button = session.registry().button();
    let label = button_label(session.button_mode());
    let line = if button.is_disabled() {
        Line::from(format!("| {label} |")).style(Style::default().fg(Color::DarkGray))
    } else if button.is_pressed() {
        Line::from(vec![
            Span::raw("[["),
            Span::styled(label, Style::default().fg(Color::Yellow).bold()),
            Span::raw("]]"),
        ])
    } else if button.is_hovering() {
        Line::from(format!("[ {label} ]")).style(Style::default().bold())
    } else {
        Line::from(format!("[ {label} ]"))
    };
    Paragraph::new(line)
}

fn slot_widget(category: Category, slot: &Control) -> Paragraph<'static> {
    let label_width = usize::from(SLOT_WIDTH) - SCORE_WIDTH;
    let mut base = Style::default();
    if slot.is_selected() {
        base = base.fg(Color::Yellow);
    }
    if slot.is_hovering() {
        base = base.add_modifier(Modifier::BOLD);
    }

    let fixed = slot.is_disabled() || slot.is_selected();
    let score = match slot.score() {
        Some(v) if fixed => Span::styled(format!("{v:>SCORE_WIDTH$}"), base),
        Some(v) => Span::styled(
            format!("{v:>SCORE_WIDTH$}"),
            Style::default().fg(Color::DarkGray),
        ),
        None => Span::raw(""),
    };
    let label = Span::styled(format!("{:<label_width$}", category.label()), base);
    Paragraph::new(Line::from(vec![label, score]))
}

fn status_widget(session: &Session) -> Paragraph<'static> {
    let turn = if session.button_mode() == ButtonMode::NewGame {
        match session.total() {
            Some(total) => format!("Game over: {total} points"),
            None => "Game over".to_string(),
        }
    } else {
        format!("Roll {} of 3", session.roll_count())
    };
    Paragraph::new(format!(" {turn}   ?:help  ^R:rules  ^X:quit"))
        .style(Style::default().fg(Color::Black).bg(Color::White))
}

fn help_lines() -> Vec<Line<'static>> {
    let upper: String = Category::UPPER.iter().filter_map(|c| c.hotkey()).collect();
    let lower: String = Category::LOWER.iter().filter_map(|c| c.hotkey()).collect();
    vec![
        Line::from("Keyboard and Mouse").style(Style::default().bold()),
        Line::from(""),
        Line::from("  a b c d e     Mark dice to re-roll"),
        Line::from(format!("  {upper:<14}Score the left column")),
        Line::from(format!("  {lower:<14}Score the right column")),
        Line::from("  Space/Enter   Push the button"),
        Line::from("  Mouse         Click dice, slots, and the button"),
        Line::from(""),
        Line::from("  ? / F1        Show this help"),
        Line::from("  Ctrl-R        Show the rules"),
        Line::from("  Ctrl-L        Redraw the screen"),
        Line::from("  Ctrl-X        Exit"),
        Line::from(""),
        Line::from(VERSION).style(Style::default().fg(Color::DarkGray)),
    ]
}

fn rules_lines() -> Vec<Line<'static>> {
    RULES.iter().map(|&l| Line::from(l)).collect()
}

/// Draw a bordered box centred over the board.
fn draw_popup(frame: &mut Frame, title: &'static str, lines: Vec<Line<'static>>) {
    let area = frame.area();
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4);
    let width = u16::try_from(width).unwrap_or(u16::MAX).min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
