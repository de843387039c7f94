//! Whole-scene startup and determinism.

use std::time::Duration;

use starfield::core::{populate, Canvas, SceneConfig, Scheduler, SimpleRng};
use starfield::types::{Control, STAR_SYMBOLS};

fn frames() -> [String; 2] {
    [" ^\n/#\\".to_string(), " ^\n/%\\".to_string()]
}

fn scene(seed: u32) -> Scheduler {
    let mut sched = Scheduler::new(Canvas::new(24, 80), SimpleRng::new(seed));
    populate(&mut sched, frames(), SceneConfig::default());
    sched
}

#[test]
fn startup_hides_cursor_draws_border_and_spawns_everything() {
    let sched = scene(3);
    let canvas = sched.canvas();

    assert!(!canvas.cursor_visible());
    assert!(canvas.has_border());
    assert_eq!(canvas.get(0, 0).map(|c| c.ch), Some('┌'));
    assert_eq!(sched.count_tasks("star"), 100);
    assert_eq!(sched.count_tasks("ship"), 1);
}

#[test]
fn first_pass_lights_stars_inside_the_border_only() {
    let mut sched = scene(3);
    sched.run_pass(Duration::ZERO);
    let canvas = sched.canvas();

    for row in 1..23 {
        for col in 1..79 {
            let ch = canvas.get(row, col).map(|c| c.ch).unwrap_or(' ');
            assert!(
                ch == ' ' || STAR_SYMBOLS.contains(&ch) || "^/\\#".contains(ch),
                "unexpected {ch:?} at ({row}, {col})"
            );
        }
    }
    // Ship starts at the centre.
    assert_eq!(canvas.get(12, 41).map(|c| c.ch), Some('^'));
}

#[test]
fn border_survives_a_long_run() {
    let mut sched = scene(9);
    let border_top = sched.canvas().row_text(0);
    for _ in 0..20 {
        sched.push_control(Control::up());
    }
    sched.run_until(Duration::from_secs(3));
    assert_eq!(sched.now(), Duration::from_secs(3));

    assert_eq!(sched.canvas().row_text(0), border_top);
    assert_eq!(sched.count_tasks("star"), 100);
}

#[test]
fn same_seed_same_sky() {
    let mut a = scene(77);
    let mut b = scene(77);
    a.run_until(Duration::from_secs(2));
    b.run_until(Duration::from_secs(2));
    assert_eq!(a.canvas(), b.canvas());

    let mut c = scene(78);
    c.run_until(Duration::from_secs(2));
    assert_ne!(a.canvas(), c.canvas());
}

#[test]
fn small_scene_config() {
    let mut sched = Scheduler::new(Canvas::new(12, 30), SimpleRng::new(1));
    populate(
        &mut sched,
        frames(),
        SceneConfig {
            star_count: 5,
            border: false,
        },
    );
    assert_eq!(sched.task_count(), 6);
    assert!(!sched.canvas().has_border());
}
