//! Thread-snapshot entities - the input contract with the grouping
//! collaborator
//!
//! Values of these types arrive fully materialized and already grouped by
//! identical call stack; rendering reads them once and never mutates them.

use serde::{Deserialize, Serialize};

/// A full snapshot of thread state, grouped by identical call stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelThreads {
    /// Total number of threads observed in the snapshot
    pub thread_count: u32,
    /// Thread groups in discovery order
    #[serde(default)]
    pub groups: Vec<ThreadGroup>,
}

impl ParallelThreads {
    /// Number of distinct call stacks in the snapshot
    pub fn unique_stack_count(&self) -> usize {
        self.groups.len()
    }
}

/// Discriminant for the two group variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// One thread with a stack no other thread shares
    Single,
    /// Several threads sharing an identical call stack
    Aggregated,
}

/// A set of threads sharing an identical call stack, rendered once under a
/// representative header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadGroup {
    pub kind: GroupKind,
    /// Representative header text, e.g. thread ids and names
    pub header: String,
    pub info: ThreadInfo,
}

impl ThreadGroup {
    /// The captured exception this group contributes to the report, if any.
    ///
    /// Exception capture is per thread, so only the single-thread variant
    /// reports one; an `exception` field on an aggregated group is accepted
    /// at the deserialization boundary but ignored here.
    pub fn captured_exception(&self) -> Option<&CapturedException> {
        match self.kind {
            GroupKind::Single => self.info.exception.as_ref(),
            GroupKind::Aggregated => None,
        }
    }
}

/// Per-group thread details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadInfo {
    /// Number of locks held; absent when none were observed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lock_count: Option<u32>,
    /// Exception captured on the thread at snapshot time
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub exception: Option<CapturedException>,
    /// Parsed stack frames, innermost first
    #[serde(default)]
    pub stack_frames: Vec<StackFrame>,
    /// Unparsed frame text as reported by the runtime
    #[serde(default)]
    pub raw_stack_frames: Vec<String>,
}

/// An exception captured on a thread at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedException {
    /// Fully-qualified exception type name
    pub type_name: String,
    /// Exception message, if one was set
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// One parsed stack frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackFrame {
    /// Fully-qualified declaring type
    pub type_name: String,
    /// Method name, possibly generic
    pub method: String,
    /// Raw argument list text, parentheses already stripped
    #[serde(default)]
    pub arguments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "thread_count": 5,
            "groups": [
                {
                    "kind": "single",
                    "header": "Thread 1 (main)",
                    "info": {
                        "lock_count": 2,
                        "exception": {
                            "type_name": "System.InvalidOperationException",
                            "message": "queue drained"
                        },
                        "stack_frames": [
                            {
                                "type_name": "System.Threading.Monitor",
                                "method": "Wait",
                                "arguments": "System.Object"
                            }
                        ],
                        "raw_stack_frames": ["System.Threading.Monitor.Wait(System.Object)"]
                    }
                },
                {
                    "kind": "aggregated",
                    "header": "4 threads",
                    "info": {
                        "stack_frames": []
                    }
                }
            ]
        }"#
    }

    #[test]
    fn test_snapshot_deserializes() {
        let threads: ParallelThreads = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(threads.thread_count, 5);
        assert_eq!(threads.unique_stack_count(), 2);
        assert_eq!(threads.groups[0].kind, GroupKind::Single);
        assert_eq!(threads.groups[0].info.lock_count, Some(2));
        assert_eq!(threads.groups[1].kind, GroupKind::Aggregated);
        assert_eq!(threads.groups[1].info.lock_count, None);
        assert!(threads.groups[1].info.raw_stack_frames.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let threads: ParallelThreads = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&threads).unwrap();
        let back: ParallelThreads = serde_json::from_str(&json).unwrap();
        assert_eq!(back, threads);
    }

    #[test]
    fn test_captured_exception_only_on_single_variant() {
        let mut threads: ParallelThreads = serde_json::from_str(sample_json()).unwrap();
        assert!(threads.groups[0].captured_exception().is_some());

        // Same payload under the aggregated variant is ignored.
        let exception = threads.groups[0].info.exception.clone();
        threads.groups[1].info.exception = exception;
        assert!(threads.groups[1].captured_exception().is_none());
    }
}
