//! Fixed-width bordered line layout
//!
//! Lays a logical line of fragments into one or more bordered physical
//! lines, wrapping between fragments but never inside one. A fragment wider
//! than the box is emitted whole and the physical line overflows past the
//! nominal width; diagnostic text is never truncated.

use crate::sink::RenderSink;
use stacklens_core::{Fragment, Result};

/// Default overall box character width.
pub const DEFAULT_MAX_WIDTH: usize = 100;

/// Opening border of the first physical line of a logical line.
const OPEN_PREFIX: &str = "| ";
/// Opening border of a wrapped continuation line.
const CONTINUATION_PREFIX: &str = "|    ";
/// Closing border, appended after right-padding to the configured width.
const CLOSE_SUFFIX: &str = " |";

/// Layout engine for one bordered box column.
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer {
    max_width: usize,
}

impl LineRenderer {
    pub fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Render one logical line, wrapping into continuation lines as needed.
    ///
    /// The running width is fed by the widths the sink reports back, so a
    /// fan-out sink with diverging members fails here rather than emitting a
    /// skewed box.
    ///
    /// # Panics
    ///
    /// Panics when `fragments` is empty. Callers always assemble at least
    /// one fragment per semantic row; an empty logical line is a
    /// programming error, not a runtime condition.
    pub fn render(&self, fragments: &[Fragment], sink: &mut dyn RenderSink) -> Result<()> {
        assert!(
            !fragments.is_empty(),
            "logical line must contain at least one fragment"
        );

        let mut current = sink.write(OPEN_PREFIX)?;
        for fragment in fragments {
            let needed = current + fragment.width() + CLOSE_SUFFIX.len();
            if needed > self.max_width && current != OPEN_PREFIX.len() {
                self.close_line(current, sink)?;
                current = sink.write(CONTINUATION_PREFIX)?;
            }
            current += sink.write(&fragment.text)?;
        }
        self.close_line(current, sink)
    }

    /// Pad to the configured width and emit the closing border.
    fn close_line(&self, current: usize, sink: &mut dyn RenderSink) -> Result<()> {
        let padding = self.max_width.saturating_sub(current);
        if padding > 0 {
            sink.write(&" ".repeat(padding))?;
        }
        sink.write(CLOSE_SUFFIX)?;
        sink.write_newline()
    }
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH)
    }
}
