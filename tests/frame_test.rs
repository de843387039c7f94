//! Sprite drawing invariants: transparency, the reserved corner and erase.

use proptest::prelude::*;

use starfield::core::{draw_frame, Canvas};
use starfield::types::Attr;

/// Fill every cell with a recognizable background.
fn patterned(rows: u16, cols: u16) -> Canvas {
    let mut canvas = Canvas::new(rows, cols);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            canvas.set_cell(row, col, '.', Attr::Dim);
        }
    }
    canvas
}

fn sprite_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[ a-z#/\\\\|]{0,6}", 1..5).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn spaces_never_change_the_canvas(
        sprite in sprite_strategy(),
        row in -4.0f64..16.0,
        col in -4.0f64..16.0,
        erase in any::<bool>(),
    ) {
        let before = patterned(12, 12);
        let mut after = before.clone();
        draw_frame(&mut after, row, col, &sprite, erase);

        let row0 = row.round_ties_even() as i32;
        let col0 = col.round_ties_even() as i32;
        for (dy, line) in sprite.lines().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    let (r, c) = (row0 + dy as i32, col0 + dx as i32);
                    prop_assert_eq!(before.get(r, c), after.get(r, c));
                }
            }
        }
    }

    #[test]
    fn bottom_right_cell_is_never_written(
        sprite in sprite_strategy(),
        row in 4.0f64..10.0,
        col in 4.0f64..10.0,
    ) {
        let mut canvas = patterned(10, 10);
        draw_frame(&mut canvas, row, col, &sprite, false);
        draw_frame(&mut canvas, row, col, &sprite, true);
        prop_assert_eq!(canvas.get(9, 9).map(|c| c.ch), Some('.'));
    }

    #[test]
    fn draw_then_erase_leaves_a_blank_canvas(
        sprite in sprite_strategy(),
        row in -4.0f64..14.0,
        col in -4.0f64..14.0,
    ) {
        let mut canvas = Canvas::new(10, 10);
        draw_frame(&mut canvas, row, col, &sprite, false);
        draw_frame(&mut canvas, row, col, &sprite, true);
        prop_assert!(canvas.is_blank());
    }
}

#[test]
fn erase_only_touches_what_the_sprite_covers() {
    let mut canvas = patterned(6, 6);
    draw_frame(&mut canvas, 1.0, 1.0, "ab\n c", false);
    draw_frame(&mut canvas, 1.0, 1.0, "ab\n c", true);

    assert_eq!(canvas.row_text(1), ".  ...");
    assert_eq!(canvas.row_text(2), ".. ...");
    assert_eq!(canvas.row_text(3), "......");
}

#[test]
fn sprite_hanging_off_the_bottom_is_clipped() {
    let mut canvas = Canvas::new(4, 8);
    draw_frame(&mut canvas, 2.0, 0.0, "top\nmid\nbot\nxxx", false);
    assert_eq!(canvas.row_text(2), "top     ");
    assert_eq!(canvas.row_text(3), "mid     ");
}
