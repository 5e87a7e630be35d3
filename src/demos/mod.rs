//! The demonstration gallery
//!
//! One module per demonstration, each a self-contained lesson that writes
//! its trace through a [`Tracer`](crate::trace::Tracer):
//!
//! - [`stack_hello`] — bury/unbury a message through a stack
//! - [`stack_vs_queue`] — LIFO and FIFO side by side
//! - [`balanced`] — bracket matching with a stack
//! - [`spooler`] — print-job spooling on a circular buffer
//! - [`frames`] — nested calls and the shape of a stack frame
//! - [`fibonacci`] — recursion depth, call counts, and memoization
//! - [`overflow`] — controlled deep recursion against a safe limit
//!
//! Demos are registered in [`DEMOS`] and looked up by name, so the CLI and
//! the tests drive them through the same [`run`] entry point.

pub mod balanced;
pub mod fibonacci;
pub mod frames;
pub mod overflow;
pub mod spooler;
pub mod stack_hello;
pub mod stack_vs_queue;

use crate::errors::DemoError;
use crate::trace::Tracer;

/// A registered demonstration
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: fn(&mut Tracer) -> Result<(), DemoError>,
}

/// The full gallery, in teaching order
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "stack-hello",
        summary: "Push a message onto a stack, pop it back out reversed",
        run: stack_hello::run,
    },
    Demo {
        name: "stack-vs-queue",
        summary: "Fill and drain a LIFO stack and a FIFO queue side by side",
        run: stack_vs_queue::run,
    },
    Demo {
        name: "balanced",
        summary: "Check bracket balance with a stack of open brackets",
        run: balanced::run,
    },
    Demo {
        name: "spooler",
        summary: "Spool print jobs through a wrapping circular-buffer queue",
        run: spooler::run,
    },
    Demo {
        name: "frames",
        summary: "Watch stack frames appear and unwind through nested calls",
        run: frames::run,
    },
    Demo {
        name: "fibonacci",
        summary: "Recursive vs iterative vs memoized fibonacci, with call depth",
        run: fibonacci::run,
    },
    Demo {
        name: "overflow",
        summary: "Recurse toward a safe depth limit and stop before the cliff",
        run: overflow::run,
    },
];

/// Look up a demo by its registered name
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

/// Run one demo by name and return its captured trace
pub fn run(name: &str) -> Result<Tracer, DemoError> {
    let demo = find(name).ok_or_else(|| DemoError::UnknownDemo {
        name: name.to_string(),
    })?;
    let mut tracer = Tracer::new();
    (demo.run)(&mut tracer)?;
    Ok(tracer)
}
