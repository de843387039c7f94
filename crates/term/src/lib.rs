//! Terminal presenter.
//!
//! This is a small rendering layer for terminal animation. It takes the
//! core's [`Canvas`](crate::core::Canvas) and flushes it to the terminal with
//! crossterm, sending only what changed since the previous refresh.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Never write the terminal's bottom-right cell
//! - Avoid flicker by emitting changed runs instead of full redraws

pub mod renderer;

pub use starfield_core as core;
pub use starfield_types as types;

pub use renderer::{encode_diff_into, encode_full_into, encode_refresh_into, TerminalRenderer};
