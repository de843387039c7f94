//! Player spaceship.
//!
//! Each tick the ship samples one control, switches to the next texture,
//! moves (clamped so the sprite never touches the border), draws itself and
//! sleeps. On the following tick it first erases exactly what it drew, then
//! fires if the previous control asked for it.

use std::time::Duration;

use crate::frame::{draw_frame, frame_size};
use crate::sched::{Context, Step, Task};
use crate::shot::Shot;
use crate::types::{Control, SHIP_SPEED, SHIP_TICK_MS};

/// Clamp a requested position so a `height x width` frame stays inside the
/// border of a `rows x cols` canvas.
///
/// The legal origin range is `[1, rows-height-1] x [1, cols-width-1]`. When
/// the frame is too large for the canvas the origin pins to `(1, 1)`.
pub fn clamp_position(
    row: f64,
    col: f64,
    (height, width): (u16, u16),
    (rows, cols): (u16, u16),
) -> (f64, f64) {
    let max_row = rows as f64 - height as f64 - 1.0;
    let max_col = cols as f64 - width as f64 - 1.0;
    (row.min(max_row).max(1.0), col.min(max_col).max(1.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drawn {
    row: f64,
    col: f64,
    frame: usize,
    fire: bool,
}

#[derive(Debug, Clone)]
pub struct Spaceship {
    row: f64,
    col: f64,
    frames: [String; 2],
    next_frame: usize,
    drawn: Option<Drawn>,
}

impl Spaceship {
    pub fn new(row: f64, col: f64, frames: [String; 2]) -> Self {
        Self {
            row,
            col,
            frames,
            next_frame: 0,
            drawn: None,
        }
    }

    fn erase_previous(&mut self, cx: &mut Context<'_>) {
        let Some(drawn) = self.drawn.take() else {
            return;
        };
        let frame = &self.frames[drawn.frame];
        draw_frame(cx.canvas(), drawn.row, drawn.col, frame, true);

        if drawn.fire {
            let (_, width) = frame_size(frame);
            cx.spawn(Shot::new(drawn.row, drawn.col + (width / 2) as f64));
        }
    }
}

impl Task for Spaceship {
    fn resume(&mut self, cx: &mut Context<'_>) -> Step {
        self.erase_previous(cx);

        let control: Control = cx.read_control();

        let index = self.next_frame;
        self.next_frame = (self.next_frame + 1) % self.frames.len();
        let frame = &self.frames[index];

        let dims = cx.canvas().dimensions();
        let (row, col) = clamp_position(
            self.row + control.rows_direction as f64 * SHIP_SPEED,
            self.col + control.columns_direction as f64 * SHIP_SPEED,
            frame_size(frame),
            dims,
        );
        self.row = row;
        self.col = col;

        draw_frame(cx.canvas(), row, col, frame, false);
        self.drawn = Some(Drawn {
            row,
            col,
            frame: index,
            fire: control.fire,
        });
        if control.fire {
            tracing::trace!(target: "ship", row, col, "fire_requested");
        }

        Step::Sleep(Duration::from_millis(SHIP_TICK_MS as u64))
    }

    fn name(&self) -> &'static str {
        "ship"
    }
}
