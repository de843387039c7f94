//! Core animation module - pure, deterministic, and testable
//!
//! This crate contains the canvas, the sprite renderer, every visual effect
//! and the cooperative scheduler that interleaves them. It does no terminal
//! I/O, which keeps it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical frames
//! - **Testable**: Virtual time is stepped directly, no sleeping in tests
//! - **Portable**: The presenter is a separate crate
//!
//! # Module Structure
//!
//! - [`canvas`]: fixed-size grid of attributed cells
//! - [`frame`]: multi-line sprite draw/erase with transparency and clipping
//! - [`rng`]: seeded LCG used for star placement and blink timing
//! - [`sched`]: single-threaded timer-queue scheduler and the [`Task`] trait
//! - [`star`], [`shot`], [`ship`]: the effects
//! - [`scene`]: startup population of a scheduler
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use starfield_core::{populate, Canvas, SceneConfig, Scheduler, SimpleRng};
//!
//! let mut sched = Scheduler::new(Canvas::new(24, 80), SimpleRng::new(7));
//! let frames = [" ^\n/ \\".to_string(), " ^\n/*\\".to_string()];
//! populate(&mut sched, frames, SceneConfig::default());
//!
//! // 100 stars plus the ship.
//! assert_eq!(sched.task_count(), 101);
//!
//! sched.run_until(Duration::from_secs(1));
//! assert!(!sched.canvas().cursor_visible());
//! ```

pub mod canvas;
pub mod frame;
pub mod rng;
pub mod scene;
pub mod sched;
pub mod ship;
pub mod shot;
pub mod star;

pub use starfield_types as types;

pub use canvas::{Canvas, Cell};
pub use frame::{draw_frame, frame_size, to_cell};
pub use rng::SimpleRng;
pub use scene::{populate, SceneConfig};
pub use sched::{Context, Scheduler, Step, Task, TaskId};
pub use ship::{clamp_position, Spaceship};
pub use shot::Shot;
pub use star::{scatter_stars, Blink, BlinkPhase, Star};
