//! Validate command - parse a snapshot and report its shape

use crate::snapshot;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let threads = snapshot::load(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;

    println!(
        "✓ {}: {} threads in {} stack groups",
        path.display(),
        threads.thread_count,
        threads.unique_stack_count()
    );
    for group in &threads.groups {
        let exception = if group.captured_exception().is_some() {
            ", exception"
        } else {
            ""
        };
        println!(
            "  {} ({} frames{})",
            group.header,
            group.info.stack_frames.len(),
            exception
        );
    }
    Ok(())
}
