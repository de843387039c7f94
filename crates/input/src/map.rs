//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the control it stands for.
///
/// Unrecognized keys map to [`Control::NONE`].
pub fn control_for_key(key: KeyEvent) -> Control {
    match key.code {
        KeyCode::Up => Control::up(),
        KeyCode::Down => Control::down(),
        KeyCode::Left => Control::left(),
        KeyCode::Right => Control::right(),
        KeyCode::Char(' ') => Control::fire(),
        _ => Control::NONE,
    }
}

/// Ctrl+C. Raw mode turns the interrupt into an ordinary key event.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
