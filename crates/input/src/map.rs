//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to an engine command.
///
/// Key releases never map; auto-repeat of a held arrow maps like a press.
pub fn map_key(key: KeyEvent) -> Option<GameCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameCommand::MoveLeft),
        KeyCode::Right => Some(GameCommand::MoveRight),
        KeyCode::Up => Some(GameCommand::RotateCw),
        KeyCode::Down => Some(GameCommand::SoftDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key starts a new game.
pub fn is_restart(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
}
