//! LIFO vs FIFO, side by side
//!
//! Feeds the same input sequence into a [`BoundedStack`] and a [`RingQueue`],
//! then drains both. The stack hands the elements back reversed, the queue
//! in arrival order. Closes with the classic use-case lists and the
//! property table.

use crate::containers::{BoundedStack, RingQueue};
use crate::errors::DemoError;
use crate::trace::Tracer;

const INPUT: &str = "ABCDE";

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Stack (LIFO) vs Queue (FIFO)");

    let mut stack = BoundedStack::new(INPUT.len());
    let mut queue = RingQueue::new(INPUT.len());

    tracer.line(format!("Input sequence: {}", INPUT));
    tracer.blank();

    tracer.line("--- Filling STACK (LIFO) ---");
    for ch in INPUT.chars() {
        stack.push(ch)?;
        tracer.line(format!("  PUSH '{}' -> Stack now: {}", ch, stack.contents()));
        tracer.snapshot(
            format!("PUSH '{}'", ch),
            vec![
                format!("stack: {}", stack.contents()),
                format!("queue: {}", queue.contents()),
            ],
        );
    }

    tracer.blank();
    tracer.line("--- Filling QUEUE (FIFO) ---");
    for ch in INPUT.chars() {
        queue.enqueue(ch)?;
        tracer.line(format!(
            "  ENQUEUE '{}' -> Queue now: {}",
            ch,
            queue.contents()
        ));
        tracer.snapshot(
            format!("ENQUEUE '{}'", ch),
            vec![
                format!("stack: {}", stack.contents()),
                format!("queue: {}", queue.contents()),
            ],
        );
    }

    tracer.blank();
    tracer.line("--- Emptying STACK (last in, first out) ---");
    let mut stack_output = String::new();
    while let Some(ch) = stack.pop() {
        tracer.line(format!("  POP  '{}' <- Stack now: {}", ch, stack.contents()));
        tracer.snapshot(
            format!("POP '{}'", ch),
            vec![
                format!("stack: {}", stack.contents()),
                format!("queue: {}", queue.contents()),
            ],
        );
        stack_output.push(ch);
    }
    tracer.line(format!("Stack output: {}", stack_output));

    tracer.blank();
    tracer.line("--- Emptying QUEUE (first in, first out) ---");
    let mut queue_output = String::new();
    while let Some(ch) = queue.dequeue() {
        tracer.line(format!(
            "  DEQUEUE '{}' <- Queue now: {}",
            ch,
            queue.contents()
        ));
        tracer.snapshot(
            format!("DEQUEUE '{}'", ch),
            vec![
                format!("stack: {}", stack.contents()),
                format!("queue: {}", queue.contents()),
            ],
        );
        queue_output.push(ch);
    }
    tracer.line(format!("Queue output: {}", queue_output));

    tracer.section("Where Each Shines");
    tracer.line("STACK:");
    tracer.line("  1. The function call stack");
    tracer.line("  2. Undo/redo in editors");
    tracer.line("  3. Bracket matching in expressions");
    tracer.line("  4. Backtracking (maze solving, DFS)");
    tracer.line("  5. Browser back button");
    tracer.blank();
    tracer.line("QUEUE:");
    tracer.line("  1. Print job spooling");
    tracer.line("  2. CPU task scheduling");
    tracer.line("  3. Breadth-first search");
    tracer.line("  4. Network packet buffering");
    tracer.line("  5. Message queues between processes");

    tracer.section("Key Differences");
    tracer.line("Property  | Stack          | Queue");
    tracer.line("----------+----------------+----------------");
    tracer.line("Order     | LIFO           | FIFO");
    tracer.line("Add       | push (top)     | enqueue (rear)");
    tracer.line("Remove    | pop (top)      | dequeue (front)");
    tracer.line("Access    | top only       | front only");
    tracer.line("Use case  | backtracking   | scheduling");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_orders_differ() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("Stack output: EDCBA"));
        assert!(tracer.contains("Queue output: ABCDE"));
    }

    #[test]
    fn test_snapshots_cover_every_operation() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        // Five elements through four phases: push, enqueue, pop, dequeue
        assert_eq!(tracer.snapshots().len(), INPUT.len() * 4);
    }
}
