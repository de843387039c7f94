//! Projectiles.
//!
//! A shot flashes at its spawn point (`*`, then `O`), rings the bell once,
//! then steps along a straight line, drawing its glyph for one step interval
//! and erasing it before moving on. It finishes as soon as its rounded
//! position leaves the interior.

use std::time::Duration;

use crate::frame::to_cell;
use crate::sched::{Context, Step, Task};
use crate::types::{Attr, SHOT_COLUMN_SPEED, SHOT_ROW_SPEED, SHOT_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Spawn,
    Flash,
    Launch,
    Flight,
}

#[derive(Debug, Clone)]
pub struct Shot {
    row: f64,
    col: f64,
    rows_speed: f64,
    columns_speed: f64,
    stage: Stage,
    drawn: Option<(i32, i32)>,
}

impl Shot {
    /// A shot going straight up.
    pub fn new(row: f64, col: f64) -> Self {
        Self::with_speed(row, col, SHOT_ROW_SPEED, SHOT_COLUMN_SPEED)
    }

    pub fn with_speed(row: f64, col: f64, rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            row,
            col,
            rows_speed,
            columns_speed,
            stage: Stage::Spawn,
            drawn: None,
        }
    }

    /// `-` for anything with horizontal motion, `|` otherwise.
    pub fn glyph(&self) -> char {
        if self.columns_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn cell(&self) -> (i32, i32) {
        (to_cell(self.row), to_cell(self.col))
    }

    fn advance(&mut self) {
        self.row += self.rows_speed;
        self.col += self.columns_speed;
    }

    /// Rounded position lies strictly inside `(1, rows-1) x (1, cols-1)`.
    fn inside(&self, (rows, cols): (u16, u16)) -> bool {
        let (row, col) = self.cell();
        1 < row && row < rows as i32 - 1 && 1 < col && col < cols as i32 - 1
    }

    fn fly(&mut self, cx: &mut Context<'_>) -> Step {
        if !self.inside(cx.canvas().dimensions()) {
            return Step::Done;
        }

        let (row, col) = self.cell();
        cx.canvas().set_cell(row, col, self.glyph(), Attr::Normal);
        self.drawn = Some((row, col));
        Step::Sleep(Duration::from_millis(SHOT_TICK_MS as u64))
    }
}

impl Task for Shot {
    fn resume(&mut self, cx: &mut Context<'_>) -> Step {
        match self.stage {
            Stage::Spawn => {
                let (row, col) = self.cell();
                cx.canvas().set_cell(row, col, '*', Attr::Normal);
                self.stage = Stage::Flash;
                Step::Yield
            }
            Stage::Flash => {
                let (row, col) = self.cell();
                cx.canvas().set_cell(row, col, 'O', Attr::Normal);
                self.stage = Stage::Launch;
                Step::Yield
            }
            Stage::Launch => {
                let (row, col) = self.cell();
                cx.canvas().set_cell(row, col, ' ', Attr::Normal);
                cx.canvas().beep();
                self.advance();
                self.stage = Stage::Flight;
                self.fly(cx)
            }
            Stage::Flight => {
                if let Some((row, col)) = self.drawn.take() {
                    cx.canvas().set_cell(row, col, ' ', Attr::Normal);
                }
                self.advance();
                self.fly(cx)
            }
        }
    }

    fn name(&self) -> &'static str {
        "shot"
    }
}
