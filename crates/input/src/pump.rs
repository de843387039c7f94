//! Non-blocking event pump.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{control_for_key, should_quit};
use crate::types::Control;

/// Outcome of one pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Control(Control),
    Quit,
}

/// Classify one key event; `None` means the event is ignored.
pub(crate) fn classify(key: KeyEvent) -> Option<Input> {
    match key.kind {
        // Held keys arrive as repeats; each one is a fresh sample.
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if should_quit(key) {
                Some(Input::Quit)
            } else {
                Some(Input::Control(control_for_key(key)))
            }
        }
        KeyEventKind::Release => None,
    }
}

/// Wait up to `timeout` for terminal input, then drain whatever else is
/// already pending without waiting. Every key press becomes one control
/// passed to `sink`.
pub fn pump_keys(timeout: Duration, mut sink: impl FnMut(Control)) -> io::Result<Pump> {
    let mut wait = timeout;
    while event::poll(wait)? {
        wait = Duration::ZERO;
        if let Event::Key(key) = event::read()? {
            match classify(key) {
                Some(Input::Control(control)) => sink(control),
                Some(Input::Quit) => return Ok(Pump::Quit),
                None => {}
            }
        }
    }
    Ok(Pump::Continue)
}
