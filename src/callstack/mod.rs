#![allow(dead_code)] // Complete API module, not all methods currently used
//! Simulated call stack
//!
//! This module provides the call stack used by the visualization demos:
//! - [`CallStack`]: the stack of frames, with depth and call accounting
//! - [`Frame`]: a single function's activation record
//!
//! # Simulated addresses
//!
//! Each frame is assigned a deterministic virtual stack-pointer address,
//! starting at [`STACK_BASE_ADDRESS`] and descending by the frame's size.
//! Real stack pointers vary run to run (and with ASLR); virtual ones keep
//! the "stack grows downward" lesson visible while making the trace stable
//! enough to test.

use crate::errors::DemoError;

/// Simulated address of the first frame's stack pointer.
/// Frames below it get strictly lower addresses.
pub const STACK_BASE_ADDRESS: u64 = 0x7fff_ff00_0000;

/// Default simulated size of one frame in bytes
pub const DEFAULT_FRAME_SIZE: u64 = 0x40;

/// A single function's activation record
#[derive(Debug, Clone)]
pub struct Frame {
    pub function_name: String,
    /// Simulated stack-pointer address for this frame
    pub address: u64,
    /// Simulated size of this frame in bytes
    pub size: u64,
    /// Local variables as (name, rendered value) pairs, in declaration order
    pub locals: Vec<(String, String)>,
}

impl Frame {
    pub fn declare_local(&mut self, name: &str, value: impl ToString) {
        self.locals.push((name.to_string(), value.to_string()));
    }
}

/// The simulated call stack
#[derive(Debug, Clone)]
pub struct CallStack {
    frames: Vec<Frame>,
    max_depth: usize,
    total_calls: usize,
    depth_limit: Option<usize>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth: 0,
            total_calls: 0,
            depth_limit: None,
        }
    }

    /// Create a call stack that refuses to grow past `limit` frames
    pub fn with_depth_limit(limit: usize) -> Self {
        CallStack {
            depth_limit: Some(limit),
            ..CallStack::new()
        }
    }

    /// Push a frame with the default simulated size
    pub fn push_frame(&mut self, function_name: &str) -> Result<&mut Frame, DemoError> {
        self.push_frame_sized(function_name, DEFAULT_FRAME_SIZE)
    }

    /// Push a frame with an explicit simulated size in bytes.
    ///
    /// Fails with [`DemoError::DepthLimitExceeded`] when a depth limit is
    /// configured and this call would exceed it.
    pub fn push_frame_sized(
        &mut self,
        function_name: &str,
        size: u64,
    ) -> Result<&mut Frame, DemoError> {
        if let Some(limit) = self.depth_limit {
            if self.frames.len() >= limit {
                return Err(DemoError::DepthLimitExceeded {
                    depth: self.frames.len() + 1,
                    limit,
                });
            }
        }

        // The stack grows downward: each frame sits below the previous one
        let address = match self.frames.last() {
            Some(frame) => frame.address - size,
            None => STACK_BASE_ADDRESS,
        };

        self.frames.push(Frame {
            function_name: function_name.to_string(),
            address,
            size,
            locals: Vec::new(),
        });

        self.total_calls += 1;
        self.max_depth = self.max_depth.max(self.frames.len());
        // Just pushed, so last() is always present
        Ok(self.frames.last_mut().expect("frame was just pushed"))
    }

    /// Pop the top frame, simulating a function return
    pub fn pop_frame(&mut self) -> Result<Frame, DemoError> {
        self.frames.pop().ok_or(DemoError::NoActiveFrame)
    }

    /// The current (top) frame, if any
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// All live frames, bottom of the stack first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Deepest nesting reached over the lifetime of this stack
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Total number of frames ever pushed
    pub fn total_calls(&self) -> usize {
        self.total_calls
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total simulated bytes occupied by live frames
    pub fn bytes_in_use(&self) -> u64 {
        self.frames.iter().map(|frame| frame.size).sum()
    }

    /// Render the live frames top-of-stack first, one line per frame
    pub fn render(&self) -> Vec<String> {
        if self.frames.is_empty() {
            return vec!["(no frames)".to_string()];
        }
        self.frames
            .iter()
            .rev()
            .map(|frame| {
                let mut line = format!("{}()  sp=0x{:012x}", frame.function_name, frame.address);
                if !frame.locals.is_empty() {
                    let locals: Vec<String> = frame
                        .locals
                        .iter()
                        .map(|(name, value)| format!("{}={}", name, value))
                        .collect();
                    line.push_str(&format!("  [{}]", locals.join(", ")));
                }
                line
            })
            .collect()
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_descend() {
        let mut stack = CallStack::new();
        let first = stack.push_frame("main").unwrap().address;
        let second = stack.push_frame("helper").unwrap().address;
        let third = stack.push_frame("inner").unwrap().address;

        assert_eq!(first, STACK_BASE_ADDRESS);
        assert!(second < first);
        assert!(third < second);
        assert_eq!(first - second, DEFAULT_FRAME_SIZE);
    }

    #[test]
    fn test_depth_accounting_survives_pops() {
        let mut stack = CallStack::new();
        stack.push_frame("a").unwrap();
        stack.push_frame("b").unwrap();
        stack.pop_frame().unwrap();
        stack.push_frame("c").unwrap();
        stack.pop_frame().unwrap();
        stack.pop_frame().unwrap();

        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.max_depth(), 2);
        assert_eq!(stack.total_calls(), 3);
    }

    #[test]
    fn test_depth_limit_enforced() {
        let mut stack = CallStack::with_depth_limit(2);
        stack.push_frame("a").unwrap();
        stack.push_frame("b").unwrap();

        let err = stack.push_frame("c").unwrap_err();
        assert_eq!(err, DemoError::DepthLimitExceeded { depth: 3, limit: 2 });
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_pop_empty_is_an_error() {
        let mut stack = CallStack::new();
        assert_eq!(stack.pop_frame().unwrap_err(), DemoError::NoActiveFrame);
    }

    #[test]
    fn test_render_lists_top_first() {
        let mut stack = CallStack::new();
        stack.push_frame("main").unwrap();
        let frame = stack.push_frame("work").unwrap();
        frame.declare_local("n", 42);

        let lines = stack.render();
        assert!(lines[0].starts_with("work()"));
        assert!(lines[0].contains("n=42"));
        assert!(lines[1].starts_with("main()"));
    }
}
