#![allow(dead_code)] // Complete API module, not all methods currently used
//! Circular-buffer bounded queue
//!
//! [`RingQueue`] is the FIFO structure used by the spooler and comparison
//! demos. It keeps the classic `front`/`rear`/`size` triple and wraps both
//! indices modulo the capacity, so slots are reused after a dequeue without
//! ever shifting elements.

use crate::errors::DemoError;
use std::fmt;

/// A fixed-capacity FIFO queue backed by a circular buffer
#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    buffer: Vec<Option<T>>,
    front: usize,
    rear: usize,
    size: usize,
}

impl<T> RingQueue<T> {
    /// Create an empty queue that can hold at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        RingQueue {
            buffer,
            front: 0,
            rear: 0,
            size: 0,
        }
    }

    /// Add an element at the rear of the queue.
    ///
    /// Fails with [`DemoError::QueueOverflow`] when the queue is full;
    /// the queue is left unchanged in that case.
    pub fn enqueue(&mut self, item: T) -> Result<(), DemoError> {
        if self.is_full() {
            return Err(DemoError::QueueOverflow {
                capacity: self.capacity(),
            });
        }
        self.buffer[self.rear] = Some(item);
        self.rear = (self.rear + 1) % self.capacity();
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at the front, or `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        item
    }

    /// Look at the front element without removing it
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.front].as_ref()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Iterate front-to-rear in FIFO order, following the wrap-around
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.size).filter_map(move |offset| {
            let idx = (self.front + offset) % self.capacity();
            self.buffer[idx].as_ref()
        })
    }
}

impl<T: fmt::Display> RingQueue<T> {
    /// Render the contents front-to-rear as `[a b c]`, or `(empty)`
    pub fn contents(&self) -> String {
        if self.is_empty() {
            return "(empty)".to_string();
        }
        let inner: Vec<String> = self.iter().map(|item| item.to_string()).collect();
        format!("[{}]", inner.join(" "))
    }

    /// Render the raw buffer slots, marking the front and rear positions.
    ///
    /// Used by the spooler demo to make the wrap-around visible:
    /// `slot 0: 'C'  <- front`, `slot 1: (free)`, ...
    pub fn slots(&self) -> Vec<String> {
        (0..self.capacity())
            .map(|idx| {
                let content = match &self.buffer[idx] {
                    Some(item) => format!("{}", item),
                    None => "(free)".to_string(),
                };
                let mut line = format!("slot {}: {}", idx, content);
                if !self.is_empty() && idx == self.front {
                    line.push_str("  <- front");
                }
                if !self.is_empty() && idx == (self.front + self.size - 1) % self.capacity() {
                    line.push_str("  <- rear");
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = RingQueue::new(8);
        for ch in "abc".chars() {
            queue.enqueue(ch).unwrap();
        }

        assert_eq!(queue.dequeue(), Some('a'));
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), Some('c'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_enqueue_at_capacity_fails_without_mutating() {
        let mut queue = RingQueue::new(2);
        queue.enqueue('x').unwrap();
        queue.enqueue('y').unwrap();

        let err = queue.enqueue('z').unwrap_err();
        assert_eq!(err, DemoError::QueueOverflow { capacity: 2 });
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.front(), Some(&'x'));
    }

    #[test]
    fn test_wrap_around_preserves_order() {
        let mut queue = RingQueue::new(3);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();

        // Free two slots, then reuse them past the buffer end
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap();

        let order: Vec<i32> = queue.iter().copied().collect();
        assert_eq!(order, vec![3, 4, 5]);
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), Some(5));
    }

    #[test]
    fn test_slots_mark_front_and_rear() {
        let mut queue = RingQueue::new(3);
        queue.enqueue('A').unwrap();
        queue.enqueue('B').unwrap();
        queue.dequeue();

        let slots = queue.slots();
        assert_eq!(slots[0], "slot 0: (free)");
        assert!(slots[1].contains("<- front"));
        assert!(slots[1].contains("<- rear"));
    }
}
