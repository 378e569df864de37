//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use yz_engine::{ControlId, Registry};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Activate a control.
    Press(ControlId),
    /// Show the key help overlay.
    Help,
    /// Show the rules of the game.
    Rules,
    /// Repaint the whole screen.
    Redraw,
    /// Leave the program.
    Quit,
}

/// Translate a key press. Releases, repeats, and unbound keys map to `None`.
pub fn map_key(key: KeyEvent, registry: &Registry) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'x') => Some(KeyCommand::Quit),
            KeyCode::Char('r') => Some(KeyCommand::Rules),
            KeyCode::Char('l') => Some(KeyCommand::Redraw),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(KeyCommand::Press(ControlId::Button)),
        KeyCode::F(1) | KeyCode::Char('?') => Some(KeyCommand::Help),
        KeyCode::Char(c) => registry.find_by_hotkey(c).map(KeyCommand::Press),
        _ => None,
    }
}
