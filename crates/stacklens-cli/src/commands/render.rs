//! Render command - snapshot file to bordered report
//!
//! Builds the sink set (console plus optional file target) and drains the
//! report through a composite sink so every target receives the identical
//! stream.

use crate::config::Config;
use crate::snapshot;
use anyhow::{Context, Result};
use clap::Args;
use stacklens_render::{
    CompositeSink, ConsoleSink, FileSink, RenderOptions, RenderSink, ReportRenderer,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Snapshot JSON file produced by the grouping collaborator
    pub snapshot: PathBuf,

    /// Overall box character width
    #[arg(long, value_name = "COLS")]
    pub max_width: Option<usize>,

    /// Also emit unparsed frame text for each group
    #[arg(long)]
    pub raw_frames: bool,

    /// Write the report to a file as well; without a value the name is
    /// derived from the snapshot file
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,

    /// Skip the console stream (requires --output)
    #[arg(long, requires = "output")]
    pub no_console: bool,
}

pub fn run(config: &Config, args: RenderArgs) -> Result<()> {
    let threads = snapshot::load(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;

    let options = RenderOptions {
        max_width: args.max_width.unwrap_or(config.render.max_width),
        show_raw_frames: args.raw_frames || config.render.raw_frames,
    };

    let output_path = args.output.map(|explicit| match explicit {
        Some(path) => path,
        None => derived_output_path(&args.snapshot),
    });

    let mut sinks: Vec<Box<dyn RenderSink>> = Vec::new();
    if !args.no_console {
        sinks.push(Box::new(ConsoleSink::new()));
    }
    if let Some(path) = &output_path {
        let sink = FileSink::create(path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?;
        sinks.push(Box::new(sink));
    }
    let mut sink = CompositeSink::new(sinks);

    ReportRenderer::new(options).render(&threads, &mut sink)?;

    if let Some(path) = &output_path {
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

/// Default file target, named after the snapshot: `<stem>.stacks.txt`
/// alongside it.
fn derived_output_path(snapshot: &Path) -> PathBuf {
    let stem = snapshot
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    snapshot.with_file_name(format!("{stem}.stacks.txt"))
}
