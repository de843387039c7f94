//! Sprite drawing.
//!
//! A frame is a block of text with embedded newlines. Spaces are transparent
//! and leave whatever is underneath untouched. Erasing is drawing the same
//! frame again with every visible cell replaced by a blank, so no backbuffer
//! is needed.

use crate::canvas::Canvas;
use crate::types::Attr;

/// Round a fractional coordinate to a cell index (ties to even).
#[inline]
pub fn to_cell(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// `(rows, cols)` of a frame's bounding box, measured in chars.
///
/// Saturates at `u16::MAX` on either axis.
pub fn frame_size(text: &str) -> (u16, u16) {
    let rows = text.lines().count();
    let cols = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (
        u16::try_from(rows).unwrap_or(u16::MAX),
        u16::try_from(cols).unwrap_or(u16::MAX),
    )
}

/// Draw (or erase) `text` with its top-left at `(start_row, start_col)`.
///
/// Cells outside the canvas, transparent spaces and the bottom-right corner
/// of the canvas are skipped. Writing the last cell makes some terminals
/// scroll, so that cell is never touched.
pub fn draw_frame(canvas: &mut Canvas, start_row: f64, start_col: f64, text: &str, erase: bool) {
    let (rows, cols) = canvas.dimensions();
    let (rows, cols) = (rows as i32, cols as i32);
    let row0 = to_cell(start_row);
    let col0 = to_cell(start_col);

    for (dy, line) in text.lines().enumerate() {
        let row = row0 + dy as i32;
        if row < 0 || row >= rows {
            continue;
        }

        for (dx, symbol) in line.chars().enumerate() {
            let col = col0 + dx as i32;
            if col < 0 || col >= cols || symbol == ' ' {
                continue;
            }
            if row == rows - 1 && col == cols - 1 {
                continue;
            }

            let ch = if erase { ' ' } else { symbol };
            canvas.set_cell(row, col, ch, Attr::Normal);
        }
    }
}
