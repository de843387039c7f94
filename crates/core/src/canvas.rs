//! Canvas: fixed-size grid of attributed character cells.
//!
//! All effects draw into one canvas. Writes outside the grid are dropped, so
//! callers never need to bounds-check before drawing.

use crate::types::Attr;

/// A single canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        attr: Attr::Normal,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D grid of cells addressed by `(row, col)`.
///
/// The dimensions are fixed at construction and never change for the life of
/// the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    cursor_visible: bool,
    border: bool,
    bells: u16,
}

impl Canvas {
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            cells: vec![Cell::BLANK; len],
            cursor_visible: true,
            border: false,
            bells: 0,
        }
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Write one cell. Out-of-range coordinates are a no-op.
    pub fn set_cell(&mut self, row: i32, col: i32, ch: char, attr: Attr) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = Cell { ch, attr };
        }
    }

    /// Box the outermost ring of cells.
    pub fn draw_border(&mut self) {
        if self.rows < 2 || self.cols < 2 {
            return;
        }
        let last_row = self.rows as i32 - 1;
        let last_col = self.cols as i32 - 1;

        for col in 1..last_col {
            self.set_cell(0, col, '─', Attr::Normal);
            self.set_cell(last_row, col, '─', Attr::Normal);
        }
        for row in 1..last_row {
            self.set_cell(row, 0, '│', Attr::Normal);
            self.set_cell(row, last_col, '│', Attr::Normal);
        }
        self.set_cell(0, 0, '┌', Attr::Normal);
        self.set_cell(0, last_col, '┐', Attr::Normal);
        self.set_cell(last_row, 0, '└', Attr::Normal);
        self.set_cell(last_row, last_col, '┘', Attr::Normal);
        self.border = true;
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Queue one terminal bell for the next refresh.
    pub fn beep(&mut self) {
        self.bells = self.bells.saturating_add(1);
    }

    pub fn pending_bells(&self) -> u16 {
        self.bells
    }

    /// Drain queued bells.
    pub fn take_bells(&mut self) -> u16 {
        std::mem::take(&mut self.bells)
    }

    /// Characters of one row, for inspection in tests and logs.
    pub fn row_text(&self, row: i32) -> String {
        (0..self.cols as i32)
            .filter_map(|col| self.get(row, col))
            .map(|cell| cell.ch)
            .collect()
    }

    /// True when every cell is a blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.ch == ' ')
    }
}
