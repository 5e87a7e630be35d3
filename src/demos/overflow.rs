//! Controlled deep recursion against a safe limit
//!
//! Recurses toward a depth limit on the simulated [`CallStack`], each frame
//! claiming 1 KiB of virtual stack, and stops at the limit instead of
//! falling off the cliff. Along the way it shows the frame addresses
//! descending and tallies how much stack the run consumed. The uncontrolled
//! variant is narrated, not executed: without the limit the recursion only
//! ends when the stack pointer hits the guard page and the process dies.

use crate::callstack::{CallStack, STACK_BASE_ADDRESS};
use crate::errors::DemoError;
use crate::trace::Tracer;

/// Virtual bytes claimed by each recursive frame
const FRAME_BYTES: u64 = 1024;

/// Depth the demo recurses to before stopping
const SAFE_LIMIT: usize = 1000;

/// Depths at which the trace reports progress
const REPORT_EVERY: usize = 200;

/// Recurse until the stack's depth limit refuses a frame, reporting
/// progress along the way.
/// Returns the depth actually reached.
fn descend(
    depth: usize,
    stack: &mut CallStack,
    tracer: &mut Tracer,
) -> Result<usize, DemoError> {
    let frame = match stack.push_frame_sized(&format!("descend#{}", depth), FRAME_BYTES) {
        Ok(frame) => frame,
        Err(DemoError::DepthLimitExceeded { .. }) => {
            tracer.line(format!(
                "  depth {}: the guard refused the next frame. Stopping here.",
                depth - 1
            ));
            return Ok(depth - 1);
        }
        Err(err) => return Err(err),
    };
    let address = frame.address;

    if depth % REPORT_EVERY == 0 || depth == 1 {
        tracer.line(format!(
            "  depth {:4}: frame at 0x{:012x}, {:4} KiB of stack in use",
            depth,
            address,
            stack.bytes_in_use() / 1024
        ));
        tracer.snapshot(
            format!("depth {}", depth),
            vec![
                format!("frames: {}", stack.depth()),
                format!("top frame: 0x{:012x}", address),
                format!("stack in use: {} KiB", stack.bytes_in_use() / 1024),
            ],
        );
    }

    let reached = descend(depth + 1, stack, tracer)?;
    stack.pop_frame()?;
    Ok(reached)
}

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Controlled Deep Recursion");

    tracer.line(format!(
        "Each frame claims {} bytes of (virtual) stack.",
        FRAME_BYTES
    ));
    tracer.line(format!(
        "The first frame sits at 0x{:012x}; the stack grows downward.",
        STACK_BASE_ADDRESS
    ));
    tracer.line(format!("Safe limit: {} frames.", SAFE_LIMIT));
    tracer.blank();

    let mut stack = CallStack::with_depth_limit(SAFE_LIMIT);
    let reached = descend(1, &mut stack, tracer)?;

    tracer.blank();
    tracer.line(format!(
        "Reached depth {} and unwound cleanly. Peak stack: {} KiB.",
        reached,
        (stack.max_depth() as u64 * FRAME_BYTES) / 1024
    ));
    tracer.snapshot(
        "unwound",
        vec![
            format!("frames: {}", stack.depth()),
            format!("max depth: {}", stack.max_depth()),
        ],
    );

    tracer.blank();
    tracer.line("Without the limit, nothing stops the descent. The recursion");
    tracer.line("runs until the stack pointer crosses into the guard page, the");
    tracer.line("kernel delivers SIGSEGV, and the process dies with a");
    tracer.line("segmentation fault. A typical Linux thread gets 8 MiB, so at");
    tracer.line("1 KiB per frame that is roughly 8000 frames from the cliff.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_exactly_at_the_limit() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains(&format!(
            "depth {}: the guard refused the next frame",
            SAFE_LIMIT
        )));
        assert!(tracer.contains(&format!("Reached depth {} and unwound cleanly", SAFE_LIMIT)));
    }

    #[test]
    fn test_unwinds_to_empty() {
        let mut stack = CallStack::with_depth_limit(10);
        let mut tracer = Tracer::new();
        let reached = descend(1, &mut stack, &mut tracer).unwrap();

        assert_eq!(reached, 10);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.max_depth(), 10);
    }

    #[test]
    fn test_peak_usage_reported_in_kib() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("Peak stack: 1000 KiB"));
    }
}
