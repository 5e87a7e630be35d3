#![allow(dead_code)] // Complete API module, not all methods currently used
//! Trace capture and step snapshots
//!
//! Demos never print directly. They write through a [`Tracer`], which
//! - collects every output line, so plain mode can dump the whole trace to
//!   stdout and tests can assert on it, and
//! - records a [`Snapshot`] after each mutating operation: the operation
//!   label, a rendering of the structure's state at that moment, and a
//!   watermark into the output so the TUI can replay the trace in lockstep
//!   while stepping forward and backward.

/// State of a demonstration captured after one operation
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Short label for the operation that produced this state,
    /// e.g. `PUSH 'A'` or `call fib(3)`
    pub operation: String,
    /// Rendered structure state, one line per row
    pub state: Vec<String>,
    /// Number of output lines emitted up to and including this operation
    pub output_len: usize,
}

/// Captures a demo's output lines and per-operation snapshots
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    lines: Vec<String>,
    snapshots: Vec<Snapshot>,
}

impl Tracer {
    pub fn new() -> Self {
        Tracer::default()
    }

    /// Emit one line of trace output
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Emit an empty line
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Emit a `=== title ===` section header with surrounding spacing
    pub fn section(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.lines.push(format!("=== {} ===", title));
        self.blank();
    }

    /// Record the structure state after a mutating operation
    pub fn snapshot(&mut self, operation: impl Into<String>, state: Vec<String>) {
        self.snapshots.push(Snapshot {
            operation: operation.into(),
            state,
            output_len: self.lines.len(),
        });
    }

    /// All captured output lines, in emission order
    pub fn output(&self) -> &[String] {
        &self.lines
    }

    /// All captured snapshots, in operation order
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// True if any output line contains `needle` (test helper)
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_spacing() {
        let mut tracer = Tracer::new();
        tracer.section("First");
        tracer.line("body");
        tracer.section("Second");

        let output = tracer.output();
        assert_eq!(output[0], "=== First ===");
        assert_eq!(output[1], "");
        assert_eq!(output[2], "body");
        assert_eq!(output[3], "");
        assert_eq!(output[4], "=== Second ===");
    }

    #[test]
    fn test_snapshot_watermarks_track_output() {
        let mut tracer = Tracer::new();
        tracer.line("one");
        tracer.snapshot("op A", vec!["state".to_string()]);
        tracer.line("two");
        tracer.line("three");
        tracer.snapshot("op B", vec![]);

        let snaps = tracer.snapshots();
        assert_eq!(snaps[0].output_len, 1);
        assert_eq!(snaps[1].output_len, 3);
        assert_eq!(snaps[1].operation, "op B");
    }
}
