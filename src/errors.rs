//! Error types for the demonstration library
//!
//! This module defines [`DemoError`], which represents everything that can go
//! wrong while a demonstration runs (as opposed to I/O or terminal errors).
//!
//! Capacity violations are first-class errors here rather than silent no-ops:
//! the bounded containers exist to show what happens at their limits.

use std::fmt;

/// Errors that can occur while running a demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// Push onto a stack that is already at capacity
    StackOverflow { capacity: usize },

    /// Enqueue onto a queue that is already at capacity
    QueueOverflow { capacity: usize },

    /// Recursion or call nesting exceeded the configured safe limit
    DepthLimitExceeded { depth: usize, limit: usize },

    /// A return was simulated with no frame on the call stack
    NoActiveFrame,

    /// Requested demo name is not registered
    UnknownDemo { name: String },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::StackOverflow { capacity } => {
                write!(f, "stack overflow: capacity of {} elements exceeded", capacity)
            }
            DemoError::QueueOverflow { capacity } => {
                write!(f, "queue overflow: capacity of {} elements exceeded", capacity)
            }
            DemoError::DepthLimitExceeded { depth, limit } => {
                write!(f, "call depth {} exceeds the safe limit of {}", depth, limit)
            }
            DemoError::NoActiveFrame => {
                write!(f, "no active stack frame to return from")
            }
            DemoError::UnknownDemo { name } => {
                write!(f, "unknown demo '{}'", name)
            }
        }
    }
}

impl std::error::Error for DemoError {}
