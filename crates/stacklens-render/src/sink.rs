//! Output sinks - destinations for rendered report text
//!
//! A sink exposes two operations: write a piece of text, returning the
//! width written, and terminate the current physical line.
//! [`CompositeSink`] fans one rendered stream out to several sinks so a
//! report can land on the console and in a file in a single pass.

use stacklens_core::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Stdout, Write};
use std::path::Path;
use tracing::warn;

/// Destination for rendered characters.
pub trait RenderSink {
    /// Write `text` and return the width written, in character cells.
    fn write(&mut self, text: &str) -> Result<usize>;

    /// Terminate the current physical line.
    fn write_newline(&mut self) -> Result<()>;
}

fn cell_width(text: &str) -> usize {
    text.chars().count()
}

/// Sink writing to standard output.
pub struct ConsoleSink {
    out: Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for ConsoleSink {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.out.write_all(text.as_bytes())?;
        Ok(cell_width(text))
    }

    fn write_newline(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// Sink writing to a file it exclusively owns.
///
/// The handle is buffered and closed when the sink is dropped, whether the
/// rendering pass completes or unwinds early. Call [`FileSink::flush`] to
/// surface write-back errors instead of relying on drop.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create (truncating) the report file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Flush buffered output to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl RenderSink for FileSink {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.writer.write_all(text.as_bytes())?;
        Ok(cell_width(text))
    }

    fn write_newline(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!("failed to flush report file: {}", e);
        }
    }
}

/// In-memory sink capturing the rendered stream.
#[derive(Debug, Default)]
pub struct BufferSink {
    contents: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn into_contents(self) -> String {
        self.contents
    }
}

impl RenderSink for BufferSink {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.contents.push_str(text);
        Ok(cell_width(text))
    }

    fn write_newline(&mut self) -> Result<()> {
        self.contents.push('\n');
        Ok(())
    }
}

/// Fan-out sink forwarding every call, in registration order, to each
/// underlying sink.
///
/// Every registered sink receives the same writes in the same order. The
/// widths the sinks report are compared on each write; divergence means a
/// sink is misreporting and is surfaced as an output error rather than
/// silently desynchronizing the layout. A write failure on any sink aborts
/// the pass for the same reason.
pub struct CompositeSink {
    sinks: Vec<Box<dyn RenderSink>>,
}

impl CompositeSink {
    pub fn new(sinks: Vec<Box<dyn RenderSink>>) -> Self {
        Self { sinks }
    }

    /// Number of registered sinks
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl RenderSink for CompositeSink {
    fn write(&mut self, text: &str) -> Result<usize> {
        let mut width: Option<usize> = None;
        for sink in &mut self.sinks {
            let written = sink.write(text)?;
            match width {
                None => width = Some(written),
                Some(w) if w != written => {
                    return Err(Error::Output(format!(
                        "sink width divergence: {} vs {}",
                        w, written
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(width.unwrap_or_else(|| cell_width(text)))
    }

    fn write_newline(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.write_newline()?;
        }
        Ok(())
    }
}
