//! # Introduction
//!
//! stacklab is a gallery of small LIFO/FIFO and call-stack demonstrations.
//! Each demo runs deterministically, writes its trace through a capture
//! layer, and records a state snapshot after every mutating operation. The
//! recording can be printed straight to stdout or stepped through forward
//! and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Demo → Containers / CallStack → Tracer (lines + snapshots) → stdout or TUI
//! ```
//!
//! 1. [`containers`] — the bounded structures under demonstration:
//!    [`containers::BoundedStack`] and [`containers::RingQueue`].
//! 2. [`callstack`] — the simulated call stack with virtual frame addresses
//!    used by the visualization demos.
//! 3. [`demos`] — the gallery itself; each demo narrates one concept into a
//!    [`trace::Tracer`].
//! 4. [`trace`] — captured output lines plus per-operation
//!    [`trace::Snapshot`]s.
//! 5. [`ui`] — ratatui-based step-through viewer; not part of the stable
//!    library API.
//!
//! ## The gallery
//!
//! Bury/unbury message reversal, stack-vs-queue comparison, bracket
//! matching, print-job spooling on a circular buffer, nested-call frame
//! visualization, fibonacci (recursive, iterative, memoized), and a
//! controlled deep-recursion probe.

pub mod callstack;
pub mod containers;
pub mod demos;
pub mod errors;
pub mod trace;
pub mod ui;
