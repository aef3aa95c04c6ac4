//! Report orchestration
//!
//! Drains a grouped thread snapshot into bordered boxes in a single forward
//! pass: overview banner, then for each group a header, optional exception
//! and lock details, the parsed stack frames and, when enabled, the raw
//! frame text.

use crate::line::{LineRenderer, DEFAULT_MAX_WIDTH};
use crate::sink::RenderSink;
use stacklens_core::{
    argument_fragments, name_fragments, Fragment, FragmentKind, ParallelThreads, Result,
    StackFrame, ThreadGroup,
};
use tracing::debug;

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Overall box character width
    pub max_width: usize,
    /// Also emit unparsed frame text for each group
    pub show_raw_frames: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            show_raw_frames: false,
        }
    }
}

/// Renders a full snapshot report to a sink.
pub struct ReportRenderer {
    line: LineRenderer,
    show_raw_frames: bool,
}

impl ReportRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            line: LineRenderer::new(options.max_width),
            show_raw_frames: options.show_raw_frames,
        }
    }

    /// Render the overview banner, then each group in input order.
    pub fn render(&self, threads: &ParallelThreads, sink: &mut dyn RenderSink) -> Result<()> {
        self.render_overview(threads, sink)?;
        for group in &threads.groups {
            self.render_group(group, sink)?;
        }
        debug!(
            threads = threads.thread_count,
            groups = threads.groups.len(),
            "report rendered"
        );
        Ok(())
    }

    fn render_overview(&self, threads: &ParallelThreads, sink: &mut dyn RenderSink) -> Result<()> {
        self.render_separator(sink)?;
        let summary = format!(
            "Thread count: {}  Unique stack traces: {}",
            threads.thread_count,
            threads.unique_stack_count()
        );
        self.line.render(&[Fragment::text(summary)], sink)?;
        self.render_separator(sink)
    }

    fn render_group(&self, group: &ThreadGroup, sink: &mut dyn RenderSink) -> Result<()> {
        self.render_separator(sink)?;
        self.line.render(
            &[Fragment::new(FragmentKind::Header, group.header.clone())],
            sink,
        )?;
        self.render_separator(sink)?;

        self.render_extra_info(group, sink)?;

        for frame in &group.info.stack_frames {
            self.line.render(&frame_fragments(frame), sink)?;
        }

        if self.show_raw_frames && !group.info.raw_stack_frames.is_empty() {
            self.render_separator(sink)?;
            self.line
                .render(&[Fragment::text("Raw stack frames:")], sink)?;
            for raw in &group.info.raw_stack_frames {
                self.line
                    .render(&name_fragments(raw, FragmentKind::TypeName), sink)?;
            }
        }

        self.render_separator(sink)
    }

    /// Exception and lock details. The whole block, trailing separator
    /// included, is suppressed when the group contributes neither.
    fn render_extra_info(&self, group: &ThreadGroup, sink: &mut dyn RenderSink) -> Result<()> {
        let mut fragments = Vec::new();
        if let Some(exception) = group.captured_exception() {
            fragments.push(Fragment::new(
                FragmentKind::ExceptionType,
                exception.type_name.clone(),
            ));
            if let Some(message) = &exception.message {
                fragments.push(Fragment::separator(": "));
                fragments.push(Fragment::new(FragmentKind::ExceptionMessage, message.clone()));
            }
        }
        if let Some(count) = group.info.lock_count {
            fragments.push(Fragment::text("LockCount"));
            fragments.push(Fragment::separator(": "));
            fragments.push(Fragment::text(count.to_string()));
        }
        if fragments.is_empty() {
            return Ok(());
        }
        self.line.render(&fragments, sink)?;
        self.render_separator(sink)
    }

    fn render_separator(&self, sink: &mut dyn RenderSink) -> Result<()> {
        let dashes = "-".repeat(self.line.max_width().saturating_sub(2));
        self.line
            .render(&[Fragment::new(FragmentKind::Border, dashes)], sink)
    }
}

/// One logical line for a parsed frame: `Type.Method(arguments)` with every
/// piece classified for downstream styling.
fn frame_fragments(frame: &StackFrame) -> Vec<Fragment> {
    let mut fragments = name_fragments(&frame.type_name, FragmentKind::TypeName);
    fragments.push(Fragment::separator("."));
    fragments.extend(name_fragments(&frame.method, FragmentKind::MethodName));
    fragments.push(Fragment::separator("("));
    fragments.extend(argument_fragments(&frame.arguments));
    fragments.push(Fragment::separator(")"));
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use stacklens_core::{CapturedException, GroupKind, ThreadInfo};

    fn group(kind: GroupKind, header: &str, info: ThreadInfo) -> ThreadGroup {
        ThreadGroup {
            kind,
            header: header.to_string(),
            info,
        }
    }

    fn bare_info() -> ThreadInfo {
        ThreadInfo {
            lock_count: None,
            exception: None,
            stack_frames: vec![StackFrame {
                type_name: "App.Worker".to_string(),
                method: "Run".to_string(),
                arguments: "".to_string(),
            }],
            raw_stack_frames: vec!["App.Worker.Run()".to_string()],
        }
    }

    fn render_to_string(options: RenderOptions, threads: &ParallelThreads) -> String {
        let mut sink = BufferSink::new();
        ReportRenderer::new(options).render(threads, &mut sink).unwrap();
        sink.into_contents()
    }

    #[test]
    fn test_overview_banner() {
        let threads = ParallelThreads {
            thread_count: 3,
            groups: vec![],
        };
        let out = render_to_string(RenderOptions::default(), &threads);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("| {} |", "-".repeat(98)));
        assert!(lines[1].starts_with("| Thread count: 3  Unique stack traces: 0"));
        assert!(lines[1].ends_with(" |"));
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn test_extra_info_suppressed_without_exception_or_locks() {
        let threads = ParallelThreads {
            thread_count: 1,
            groups: vec![group(GroupKind::Single, "Thread 7", bare_info())],
        };
        let out = render_to_string(RenderOptions::default(), &threads);
        let lines: Vec<&str> = out.lines().collect();
        let separator = format!("| {} |", "-".repeat(98));
        // Overview (3) + header block (3) + one frame + trailing separator.
        assert_eq!(lines.len(), 8);
        assert!(lines[4].starts_with("| Thread 7"));
        assert_eq!(lines[5], separator);
        assert!(lines[6].starts_with("| App.Worker.Run()"));
        assert_eq!(lines[7], separator);
    }

    #[test]
    fn test_extra_info_with_exception_and_locks() {
        let mut info = bare_info();
        info.lock_count = Some(2);
        info.exception = Some(CapturedException {
            type_name: "System.TimeoutException".to_string(),
            message: Some("lock wait timed out".to_string()),
        });
        let threads = ParallelThreads {
            thread_count: 1,
            groups: vec![group(GroupKind::Single, "Thread 7", info)],
        };
        let out = render_to_string(RenderOptions::default(), &threads);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[6].starts_with(
            "| System.TimeoutException: lock wait timed outLockCount: 2"
        ));
        // Extra info carries its own trailing separator before the frames.
        assert_eq!(lines[7], format!("| {} |", "-".repeat(98)));
        assert!(lines[8].starts_with("| App.Worker.Run()"));
    }

    #[test]
    fn test_exception_without_message_renders_type_only() {
        let mut info = bare_info();
        info.exception = Some(CapturedException {
            type_name: "System.OperationCanceledException".to_string(),
            message: None,
        });
        let threads = ParallelThreads {
            thread_count: 1,
            groups: vec![group(GroupKind::Single, "Thread 7", info)],
        };
        let out = render_to_string(RenderOptions::default(), &threads);
        assert!(out.contains("| System.OperationCanceledException "));
        assert!(!out.contains("System.OperationCanceledException:"));
    }

    #[test]
    fn test_aggregated_group_never_renders_exception() {
        let mut info = bare_info();
        info.exception = Some(CapturedException {
            type_name: "System.TimeoutException".to_string(),
            message: None,
        });
        let threads = ParallelThreads {
            thread_count: 4,
            groups: vec![group(GroupKind::Aggregated, "4 threads", info)],
        };
        let out = render_to_string(RenderOptions::default(), &threads);
        assert!(!out.contains("TimeoutException"));
    }

    #[test]
    fn test_lock_count_alone_renders_extra_info() {
        let mut info = bare_info();
        info.lock_count = Some(1);
        let threads = ParallelThreads {
            thread_count: 4,
            groups: vec![group(GroupKind::Aggregated, "4 threads", info)],
        };
        let out = render_to_string(RenderOptions::default(), &threads);
        assert!(out.contains("| LockCount: 1"));
    }

    #[test]
    fn test_raw_frames_gated_by_option() {
        let threads = ParallelThreads {
            thread_count: 1,
            groups: vec![group(GroupKind::Single, "Thread 7", bare_info())],
        };
        let without = render_to_string(RenderOptions::default(), &threads);
        assert!(!without.contains("Raw stack frames:"));

        let options = RenderOptions {
            show_raw_frames: true,
            ..RenderOptions::default()
        };
        let with = render_to_string(options, &threads);
        assert!(with.contains("| Raw stack frames:"));
        // The raw text appears once in the raw block in addition to the
        // parsed frame line.
        assert_eq!(with.matches("App.Worker.Run()").count(), 2);
    }

    #[test]
    fn test_raw_frames_block_skipped_when_group_has_none() {
        let mut info = bare_info();
        info.raw_stack_frames.clear();
        let threads = ParallelThreads {
            thread_count: 1,
            groups: vec![group(GroupKind::Single, "Thread 7", info)],
        };
        let options = RenderOptions {
            show_raw_frames: true,
            ..RenderOptions::default()
        };
        let out = render_to_string(options, &threads);
        assert!(!out.contains("Raw stack frames:"));
    }

    #[test]
    fn test_frame_fragments_shape() {
        let frame = StackFrame {
            type_name: "System.Threading.Monitor".to_string(),
            method: "Wait".to_string(),
            arguments: "ref,System.Object".to_string(),
        };
        let fragments = frame_fragments(&frame);
        let rebuilt: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(rebuilt, "System.Threading.Monitor.Wait(ref,System.Object)");
        assert!(fragments
            .iter()
            .any(|f| f.kind == FragmentKind::ArgumentModifier && f.text == "ref"));
        assert!(fragments
            .iter()
            .any(|f| f.kind == FragmentKind::MethodName && f.text == "Wait"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let threads = ParallelThreads {
            thread_count: 2,
            groups: vec![group(GroupKind::Single, "Thread 7", bare_info())],
        };
        let first = render_to_string(RenderOptions::default(), &threads);
        let second = render_to_string(RenderOptions::default(), &threads);
        assert_eq!(first, second);
    }
}
