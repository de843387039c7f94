//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the terminal presenter and the input layer alike.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SHIP_TICK_MS` | 100 | Spaceship input/redraw cadence |
//! | `SHOT_TICK_MS` | 20 | Projectile step interval |
//! | `BLINK_MIN_MS` | 100 | Shortest star blink phase |
//! | `BLINK_MAX_MS` | 1000 | Longest star blink phase |
//!
//! # Examples
//!
//! ```
//! use starfield_types::{Attr, Control};
//!
//! let up = Control::up();
//! assert_eq!(up.rows_direction, -1);
//! assert!(!up.fire);
//!
//! assert_eq!(Control::default(), Control::NONE);
//! assert_eq!(Attr::default(), Attr::Normal);
//! ```

/// Number of stars scattered over the sky at startup.
pub const STAR_COUNT: usize = 100;

/// Glyphs a star may be drawn with.
pub const STAR_SYMBOLS: [char; 4] = ['*', ':', '.', '+'];

/// Shortest duration of a single blink phase.
pub const BLINK_MIN_MS: u32 = 100;

/// Longest duration of a single blink phase.
pub const BLINK_MAX_MS: u32 = 1000;

/// Spaceship input/redraw cadence (100ms).
pub const SHIP_TICK_MS: u32 = 100;

/// Cells moved per tick for a unit direction.
pub const SHIP_SPEED: f64 = 10.0;

/// Projectile step interval (20ms).
pub const SHOT_TICK_MS: u32 = 20;

/// Default projectile row velocity (cells per step, negative is up).
pub const SHOT_ROW_SPEED: f64 = -0.3;

/// Default projectile column velocity.
pub const SHOT_COLUMN_SPEED: f64 = 0.0;

/// Most key samples held between ship ticks; newer ones are dropped.
///
/// Terminal auto-repeat outpaces the ship tick, so an unbounded queue would
/// keep the ship moving long after a key is released.
pub const MAX_PENDING_CONTROLS: usize = 4;

/// Directory holding the spaceship textures, relative to the working directory.
pub const TEXTURE_DIR: &str = "rocket_frames";

/// Spaceship texture files, in animation order.
pub const TEXTURE_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Visual weight of a canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// One sampled input: a unit movement and whether fire was requested.
///
/// Only one key is sampled per tick, so at most one of the fields is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Control {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}

impl Control {
    /// No movement, no fire.
    pub const NONE: Control = Control {
        rows_direction: 0,
        columns_direction: 0,
        fire: false,
    };

    /// Move one row up.
    pub const fn up() -> Self {
        Self {
            rows_direction: -1,
            ..Self::NONE
        }
    }

    /// Move one row down.
    pub const fn down() -> Self {
        Self {
            rows_direction: 1,
            ..Self::NONE
        }
    }

    /// Move one column left.
    pub const fn left() -> Self {
        Self {
            columns_direction: -1,
            ..Self::NONE
        }
    }

    /// Move one column right.
    pub const fn right() -> Self {
        Self {
            columns_direction: 1,
            ..Self::NONE
        }
    }

    /// Fire without moving.
    pub const fn fire() -> Self {
        Self {
            fire: true,
            ..Self::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(SHIP_TICK_MS, 100);
        assert_eq!(SHOT_TICK_MS, 20);
        assert_eq!(BLINK_MIN_MS, 100);
        assert_eq!(BLINK_MAX_MS, 1000);
        assert!(BLINK_MIN_MS < BLINK_MAX_MS);
    }

    #[test]
    fn default_shot_goes_straight_up() {
        assert!(SHOT_ROW_SPEED < 0.0);
        assert_eq!(SHOT_COLUMN_SPEED, 0.0);
    }

    #[test]
    fn controls_are_unit_deltas() {
        assert_eq!(Control::up().rows_direction, -1);
        assert_eq!(Control::down().rows_direction, 1);
        assert_eq!(Control::left().columns_direction, -1);
        assert_eq!(Control::right().columns_direction, 1);
        assert!(Control::fire().fire);
        assert_eq!(Control::fire().rows_direction, 0);
        assert_eq!(Control::default(), Control::NONE);
    }
}
