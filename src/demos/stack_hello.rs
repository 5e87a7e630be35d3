//! Bury/unbury: push a message onto a stack, pop it back out
//!
//! Turing called these operations "bury" and "unbury". Pushing a message
//! character by character and popping it all back reverses it, which is the
//! shortest possible proof of LIFO order. A buffer is still needed on the
//! way out: the stack is ephemeral, so the characters have to land somewhere
//! before they can be read in either direction.

use crate::containers::BoundedStack;
use crate::errors::DemoError;
use crate::trace::Tracer;

const MESSAGE: &str = "Hello World!";

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Stack Hello: Bury and Unbury");

    let mut stack = BoundedStack::new(MESSAGE.len());

    tracer.line(format!("Message: \"{}\"", MESSAGE));
    tracer.blank();
    tracer.line("BURYING (pushing to stack):");
    for ch in MESSAGE.chars() {
        stack.push(ch)?;
        tracer.line(format!("  PUSH '{}' -> {}", ch, stack.contents()));
        tracer.snapshot(format!("PUSH '{}'", ch), vec![stack.contents()]);
    }

    tracer.blank();
    tracer.line("UNBURYING (popping from stack):");
    let mut buffer = Vec::new();
    while let Some(ch) = stack.pop() {
        tracer.line(format!("  POP  '{}' <- {}", ch, stack.contents()));
        tracer.snapshot(format!("POP '{}'", ch), vec![stack.contents()]);
        buffer.push(ch);
    }

    let reversed: String = buffer.iter().collect();
    let restored: String = buffer.iter().rev().collect();

    tracer.blank();
    tracer.line(format!("Popped order:  \"{}\"", reversed));
    tracer.line(format!("Read backward: \"{}\"", restored));
    tracer.line("Last in, first out: the stack reversed the message.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_comes_back_reversed() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("Popped order:  \"!dlroW olleH\""));
        assert!(tracer.contains("Read backward: \"Hello World!\""));
    }

    #[test]
    fn test_one_snapshot_per_operation() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        // One push and one pop per character
        assert_eq!(tracer.snapshots().len(), MESSAGE.len() * 2);
    }
}
