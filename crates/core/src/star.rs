//! Twinkling stars.

use std::time::Duration;

use crate::rng::SimpleRng;
use crate::sched::{Context, Step, Task};
use crate::types::{Attr, BLINK_MAX_MS, BLINK_MIN_MS, STAR_SYMBOLS};

/// Where a star sits and what it looks like. Never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub row: i32,
    pub col: i32,
    pub symbol: char,
}

/// Scatter `count` stars over the interior `[1, rows-2] x [1, cols-2]`.
///
/// Returns no stars when the canvas is too small to have an interior.
pub fn scatter_stars(rng: &mut SimpleRng, rows: u16, cols: u16, count: usize) -> Vec<Star> {
    if rows < 3 || cols < 3 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let row = rng.range_inclusive(1, rows as i32 - 2);
            let col = rng.range_inclusive(1, cols as i32 - 2);
            let symbol = rng.choose(&STAR_SYMBOLS).copied().unwrap_or('*');
            Star { row, col, symbol }
        })
        .collect()
}

/// The four blink phases, in order. The cycle has no end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    Dim,
    Rising,
    Bold,
    Falling,
}

impl BlinkPhase {
    pub fn attr(self) -> Attr {
        match self {
            BlinkPhase::Dim => Attr::Dim,
            BlinkPhase::Rising | BlinkPhase::Falling => Attr::Normal,
            BlinkPhase::Bold => Attr::Bold,
        }
    }

    pub fn next(self) -> Self {
        match self {
            BlinkPhase::Dim => BlinkPhase::Rising,
            BlinkPhase::Rising => BlinkPhase::Bold,
            BlinkPhase::Bold => BlinkPhase::Falling,
            BlinkPhase::Falling => BlinkPhase::Dim,
        }
    }
}

/// One star's blink loop.
#[derive(Debug, Clone)]
pub struct Blink {
    star: Star,
    phase: BlinkPhase,
}

impl Blink {
    pub fn new(star: Star) -> Self {
        Self {
            star,
            phase: BlinkPhase::Dim,
        }
    }
}

impl Task for Blink {
    fn resume(&mut self, cx: &mut Context<'_>) -> Step {
        let Star { row, col, symbol } = self.star;
        cx.canvas().set_cell(row, col, symbol, self.phase.attr());
        self.phase = self.phase.next();

        let ms = cx.rng().uniform(BLINK_MIN_MS as f64, BLINK_MAX_MS as f64);
        Step::Sleep(Duration::from_secs_f64(ms / 1000.0))
    }

    fn name(&self) -> &'static str {
        "star"
    }
}
