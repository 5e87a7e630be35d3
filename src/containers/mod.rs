//! Fixed-capacity container implementations
//!
//! The two textbook structures every demonstration is built on:
//! - [`stack::BoundedStack`]: array-backed LIFO stack with a top index
//! - [`queue::RingQueue`]: circular-buffer FIFO queue with front/rear/size
//!   fields wrapping modulo capacity
//!
//! Both are deliberately bounded. Exceeding the capacity is a typed error
//! ([`crate::errors::DemoError`]) surfaced in the demo trace, because the
//! behavior at the limit is part of what the demos teach.

pub mod queue;
pub mod stack;

pub use queue::RingQueue;
pub use stack::BoundedStack;
