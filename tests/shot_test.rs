//! Projectile flight.

use std::time::Duration;

use starfield::core::{Canvas, Scheduler, Shot, SimpleRng};

const STEP: Duration = Duration::from_millis(20);

fn scheduler() -> Scheduler {
    Scheduler::new(Canvas::new(20, 40), SimpleRng::new(1))
}

fn find(canvas: &Canvas, glyph: char) -> Vec<(i32, i32)> {
    let (rows, cols) = canvas.dimensions();
    let mut hits = Vec::new();
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if canvas.get(row, col).map(|c| c.ch) == Some(glyph) {
                hits.push((row, col));
            }
        }
    }
    hits
}

/// Step the shot until it finishes, recording where its glyph was after each
/// step.
fn fly(sched: &mut Scheduler, glyph: char) -> Vec<(i32, i32)> {
    let mut trail = Vec::new();
    for _ in 0..500 {
        let Some(wake) = sched.next_wake() else {
            break;
        };
        sched.run_pass(wake);
        let hits = find(sched.canvas(), glyph);
        assert!(hits.len() <= 1, "more than one glyph on screen: {hits:?}");
        trail.extend(hits);
    }
    assert_eq!(sched.task_count(), 0, "shot never finished");
    trail
}

#[test]
fn muzzle_flash_then_launch() {
    let mut sched = scheduler();
    sched.spawn(Shot::new(10.0, 20.0));

    sched.run_pass(Duration::ZERO);
    assert_eq!(sched.canvas().get(10, 20).map(|c| c.ch), Some('*'));
    assert_eq!(sched.canvas().pending_bells(), 0);

    sched.run_pass(Duration::ZERO);
    assert_eq!(sched.canvas().get(10, 20).map(|c| c.ch), Some('O'));

    sched.run_pass(Duration::ZERO);
    // 9.7 rounds back onto the spawn cell.
    assert_eq!(sched.canvas().get(10, 20).map(|c| c.ch), Some('|'));
    assert_eq!(sched.canvas().pending_bells(), 1);
    assert_eq!(sched.next_wake(), Some(STEP));
}

#[test]
fn upward_shot_climbs_and_stops_above_row_one() {
    let mut sched = scheduler();
    sched.spawn(Shot::new(10.0, 20.0));
    // Flash only; the launch is the first step of the trail.
    for _ in 0..2 {
        sched.run_pass(Duration::ZERO);
    }

    let trail = fly(&mut sched, '|');
    assert_eq!(trail.first(), Some(&(10, 20)));
    assert!(trail.windows(2).all(|w| w[1].0 <= w[0].0), "{trail:?}");
    assert!(trail.iter().all(|&(row, col)| row > 1 && col == 20));
    assert_eq!(trail.last().map(|&(row, _)| row), Some(2));

    // Everything it drew has been erased again and it rang exactly once.
    assert!(sched.canvas().is_blank());
    assert_eq!(sched.canvas().pending_bells(), 1);
}

#[test]
fn horizontal_shot_uses_dash_and_stops_before_right_edge() {
    let mut sched = scheduler();
    sched.spawn(Shot::with_speed(5.0, 10.0, 0.0, 1.0));
    // Flash only; the launch is the first step of the trail.
    for _ in 0..2 {
        sched.run_pass(Duration::ZERO);
    }

    let trail = fly(&mut sched, '-');
    assert_eq!(trail.first(), Some(&(5, 11)));
    assert_eq!(trail.last(), Some(&(5, 38)));
    assert!(trail.windows(2).all(|w| w[1].1 == w[0].1 + 1));
}

#[test]
fn shot_spawned_on_the_edge_only_flashes() {
    let mut sched = scheduler();
    sched.spawn(Shot::new(1.0, 20.0));
    for _ in 0..3 {
        sched.run_pass(Duration::ZERO);
    }
    assert_eq!(sched.task_count(), 0);
    assert!(find(sched.canvas(), '|').is_empty());
    assert_eq!(sched.canvas().pending_bells(), 1);
}
