//! Spaceship texture loading.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::types::{TEXTURE_DIR, TEXTURE_FILES};

/// Load both spaceship frames from [`TEXTURE_DIR`] under the working
/// directory.
pub fn load_textures() -> Result<[String; 2]> {
    load_textures_from(Path::new(TEXTURE_DIR))
}

/// Load both spaceship frames from `dir`.
///
/// A missing, unreadable or blank file is a startup fault; there is no
/// fallback texture.
pub fn load_textures_from(dir: &Path) -> Result<[String; 2]> {
    let [first, second] = TEXTURE_FILES;
    Ok([load_one(dir, first)?, load_one(dir, second)?])
}

fn load_one(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read texture {}", path.display()))?;
    if text.trim().is_empty() {
        bail!("texture {} is empty", path.display());
    }
    tracing::debug!(target: "io", file = %path.display(), bytes = text.len(), "texture_loaded");
    Ok(text)
}
