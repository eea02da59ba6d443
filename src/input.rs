//! Keyboard and mouse mapping for the main loop.
//!
//! Raw mode means no default key handling to suppress; every event arrives
//! here and maps to a discrete action the loop applies synchronously.

use crate::game::types::GamePhase;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

/// A discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flap (Playing) or begin the run (Start). Ignored by the logic once
    /// the run has ended.
    Jump,
    /// Start a fresh run from the game-over screen.
    Restart,
    /// Leave the game.
    Quit,
    /// Anything else.
    None,
}

/// Map a key press. Space, Up, and Enter all activate; Enter and R double
/// as the restart affordance once the run has ended.
pub fn map_key(key: KeyEvent, phase: GamePhase) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Up => Action::Jump,
        KeyCode::Enter => {
            if phase == GamePhase::GameOver {
                Action::Restart
            } else {
                Action::Jump
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if phase == GamePhase::GameOver {
                Action::Restart
            } else {
                Action::None
            }
        }
        _ => Action::None,
    }
}

/// Map a mouse event: any button press is the same activate input as a key
/// flap. Restart stays keyboard-only.
pub fn map_mouse(event: MouseEvent) -> Action {
    match event.kind {
        MouseEventKind::Down(_) => Action::Jump,
        _ => Action::None,
    }
}
