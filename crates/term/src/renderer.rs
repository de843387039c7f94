//! TerminalRenderer: flushes a canvas to a real terminal.
//!
//! The first refresh redraws everything; later ones only emit changed runs of
//! cells. Queued bells and the canvas's cursor flag are applied on the same
//! flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::Canvas;
use crate::types::Attr;

const BEL: char = '\x07';

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Canvas>,
    cursor_visible: Option<bool>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            cursor_visible: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Push the canvas to the screen and drain its queued bells.
    pub fn refresh(&mut self, canvas: &mut Canvas) -> Result<()> {
        self.buf.clear();
        encode_refresh_into(self.last.as_ref(), canvas, &mut self.buf)?;

        let visible = canvas.cursor_visible();
        if self.cursor_visible != Some(visible) {
            if visible {
                self.buf.queue(cursor::Show)?;
            } else {
                self.buf.queue(cursor::Hide)?;
            }
            self.cursor_visible = Some(visible);
        }

        let bells = canvas.take_bells();
        for _ in 0..bells {
            self.buf.queue(Print(BEL))?;
        }
        if bells > 0 {
            tracing::trace!(target: "term", bells, "bell");
        }

        self.flush_buf()?;

        match self.last.as_mut() {
            Some(last) => last.clone_from(canvas),
            None => self.last = Some(canvas.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode whatever it takes to turn `prev` into `next` on screen.
///
/// Falls back to a full redraw when there is no previous frame or its size
/// differs.
pub fn encode_refresh_into(prev: Option<&Canvas>, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    match prev {
        Some(prev) if prev.dimensions() == next.dimensions() => encode_diff_into(prev, next, out),
        _ => encode_full_into(next, out),
    }
}

/// Encode a full-canvas redraw into `out`.
pub fn encode_full_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (rows, cols) = canvas.dimensions();
    let mut current: Option<Attr> = None;
    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row))?;
        for col in 0..cols {
            // The last cell would scroll some terminals.
            if row + 1 == rows && col + 1 == cols {
                continue;
            }
            let cell = canvas.get(row as i32, col as i32).unwrap_or_default();
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &Canvas, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Attr> = None;
    let mut any = false;

    for_each_changed_run(prev, next, |row, col, len| {
        any = true;
        out.queue(cursor::MoveTo(col, row))?;
        for dc in 0..len {
            let cell = next.get(row as i32, (col + dc) as i32).unwrap_or_default();
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if any {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_attr_into(out: &mut Vec<u8>, attr: Attr) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match attr {
        Attr::Normal => {}
        Attr::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Attr::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    Ok(())
}

/// Call `f(row, col, len)` for each horizontal run of cells that differ.
///
/// Both canvases must have the same dimensions. The bottom-right cell is
/// never reported.
fn for_each_changed_run(
    prev: &Canvas,
    next: &Canvas,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let (rows, cols) = next.dimensions();

    for row in 0..rows {
        let width = if row + 1 == rows { cols.saturating_sub(1) } else { cols };
        let differs = |col: u16| prev.get(row as i32, col as i32) != next.get(row as i32, col as i32);

        let mut col = 0;
        while col < width {
            if !differs(col) {
                col += 1;
                continue;
            }

            let start = col;
            col += 1;
            while col < width && differs(col) {
                col += 1;
            }
            f(row, start, col - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = Canvas::new(1, 6);
        let mut b = Canvas::new(1, 6);

        // Change cells [1..=3] into X.
        for col in 1..=3 {
            b.set_cell(0, col, 'X', Attr::Normal);
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |row, col, len| {
            runs.push((row, col, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 1, 3)]);
    }

    #[test]
    fn attribute_change_alone_is_a_diff() {
        let mut a = Canvas::new(2, 2);
        a.set_cell(0, 0, '*', Attr::Dim);
        let mut b = a.clone();
        b.set_cell(0, 0, '*', Attr::Bold);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |row, col, len| {
            runs.push((row, col, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 1)]);
    }

    #[test]
    fn bottom_right_cell_is_never_reported() {
        let a = Canvas::new(2, 2);
        let mut b = Canvas::new(2, 2);
        b.set_cell(1, 1, 'X', Attr::Normal);

        let mut calls = 0;
        for_each_changed_run(&a, &b, |_, _, _| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn identical_canvases_encode_nothing() {
        let a = Canvas::new(3, 3);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
