//! Starfield (workspace facade crate).
//!
//! Re-exports the workspace crates under `starfield::{core,input,term,types}`
//! and owns the one piece of startup I/O the core stays out of: loading the
//! spaceship textures.

pub mod textures;

pub use starfield_core as core;
pub use starfield_input as input;
pub use starfield_term as term;
pub use starfield_types as types;

pub use textures::{load_textures, load_textures_from};
