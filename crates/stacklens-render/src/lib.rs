//! Stacklens Render - the report rendering pipeline
//!
//! Turns a grouped thread snapshot into a fixed-width, bordered plain-text
//! report and drains it into one or more output sinks:
//!
//! - `sink` - the two-operation sink capability, console/file/buffer
//!   implementations, and the composite fan-out
//! - `line` - the bordered, word-wrapping layout engine
//! - `report` - report orchestration (overview banner, per-group blocks)
//!
//! Rendering is single-threaded and synchronous; a rendering pass owns its
//! sinks exclusively for its duration.

pub mod line;
pub mod report;
pub mod sink;

pub use line::{LineRenderer, DEFAULT_MAX_WIDTH};
pub use report::{RenderOptions, ReportRenderer};
pub use sink::{BufferSink, CompositeSink, ConsoleSink, FileSink, RenderSink};
