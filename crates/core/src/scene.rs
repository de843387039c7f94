//! Scene setup: everything that happens once before the loop starts.

use crate::sched::Scheduler;
use crate::ship::Spaceship;
use crate::star::{scatter_stars, Blink};
use crate::types::STAR_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    pub star_count: usize,
    pub border: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            border: true,
        }
    }
}

/// Hide the cursor, draw the border, scatter the stars and put the ship in
/// the middle of the canvas. All tasks start on the scheduler's next pass.
pub fn populate(sched: &mut Scheduler, textures: [String; 2], config: SceneConfig) {
    let (rows, cols) = sched.canvas().dimensions();

    let canvas = sched.canvas_mut();
    canvas.set_cursor_visible(false);
    if config.border {
        canvas.draw_border();
    }

    let stars = scatter_stars(sched.rng_mut(), rows, cols, config.star_count);
    tracing::info!(target: "scene", rows, cols, stars = stars.len(), "scene_populated");
    for star in stars {
        sched.spawn(Blink::new(star));
    }

    sched.spawn(Spaceship::new(
        (rows / 2) as f64,
        (cols / 2) as f64,
        textures,
    ));
}
