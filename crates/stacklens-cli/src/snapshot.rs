//! Snapshot loading - the boundary with the grouping collaborator
//!
//! A snapshot file is the JSON serialization of
//! [`ParallelThreads`](stacklens_core::ParallelThreads), produced by
//! whatever walked the target process and grouped its threads by identical
//! call stack.

use stacklens_core::{Error, ParallelThreads, Result};
use std::path::Path;
use tracing::debug;

pub fn load(path: &Path) -> Result<ParallelThreads> {
    let content = std::fs::read_to_string(path)?;
    let threads: ParallelThreads = serde_json::from_str(&content)?;

    // There cannot be more distinct stacks than threads.
    if threads.unique_stack_count() as u64 > u64::from(threads.thread_count) {
        return Err(Error::InvalidSnapshot(format!(
            "{} stack groups but only {} threads",
            threads.unique_stack_count(),
            threads.thread_count
        )));
    }

    debug!(
        path = %path.display(),
        threads = threads.thread_count,
        groups = threads.groups.len(),
        "snapshot loaded"
    );
    Ok(threads)
}
