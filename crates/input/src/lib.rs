//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Control`] samples and
//! drains pending terminal events without blocking longer than the caller
//! allows. Anything that is not an arrow key or Space still produces an idle
//! sample, so every key press consumes exactly one ship tick.

pub mod map;
pub mod pump;

pub use starfield_types as types;

pub use map::{control_for_key, should_quit};
pub use pump::{pump_keys, Pump};
