//! Init command - write a default config file

use crate::config;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = config::init_path(explicit);
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, config::DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
