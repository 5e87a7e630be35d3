#![allow(dead_code)] // Complete API module, not all methods currently used
//! Array-backed bounded stack
//!
//! [`BoundedStack`] is the LIFO structure used throughout the demos. The
//! backing storage is a `Vec` that never grows past the capacity fixed at
//! construction, so it behaves like the classic `data[MAX]; top` pair while
//! staying generic over the element type.

use crate::errors::DemoError;
use std::fmt;

/// A fixed-capacity LIFO stack
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack that can hold at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        BoundedStack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push an element onto the top of the stack.
    ///
    /// Fails with [`DemoError::StackOverflow`] when the stack is full;
    /// the stack is left unchanged in that case.
    pub fn push(&mut self, item: T) -> Result<(), DemoError> {
        if self.is_full() {
            return Err(DemoError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top element, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Look at the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Iterate bottom-to-top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> BoundedStack<T> {
    /// Render the contents bottom-to-top as `[a b c]`, or `(empty)`
    pub fn contents(&self) -> String {
        if self.is_empty() {
            return "(empty)".to_string();
        }
        let inner: Vec<String> = self.items.iter().map(|item| item.to_string()).collect();
        format!("[{}]", inner.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = BoundedStack::new(8);
        for ch in "abc".chars() {
            stack.push(ch).unwrap();
        }

        assert_eq!(stack.pop(), Some('c'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_at_capacity_fails_without_mutating() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());

        let err = stack.push(3).unwrap_err();
        assert_eq!(err, DemoError::StackOverflow { capacity: 2 });
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&2));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = BoundedStack::new(4);
        stack.push("top").unwrap();
        assert_eq!(stack.peek(), Some(&"top"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_contents_rendering() {
        let mut stack = BoundedStack::new(4);
        assert_eq!(stack.contents(), "(empty)");
        stack.push('A').unwrap();
        stack.push('B').unwrap();
        assert_eq!(stack.contents(), "[A B]");
    }
}
