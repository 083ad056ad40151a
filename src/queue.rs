//! FIFO queue and a stable priority-queue variant.
//!
//! [`Queue`] is the frontier store used by breadth-first search; both types
//! are also part of the public surface.  Dequeueing from an empty queue is an
//! explicit `None`, never a panic.

use std::collections::VecDeque;
use std::fmt;

/// A first-in, first-out queue.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends an item at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the earliest-enqueued item, or `None` if the queue
    /// is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

/// Priority level; lower values are served first.
pub type Priority = u32;

/// A queue serving items in ascending-priority order, ties broken by
/// insertion order.
///
/// Ordering is maintained with a stable sort on insertion, so two items with
/// equal priority always come out in the order they went in.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    items: Vec<(T, Priority)>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts an item with the given priority.
    pub fn enqueue(&mut self, item: T, priority: Priority) {
        self.items.push((item, priority));
        // Stable sort: equal priorities keep insertion order.
        self.items.sort_by_key(|&(_, priority)| priority);
    }

    /// Removes and returns the item with the lowest priority value, or `None`
    /// if the queue is empty.
    pub fn dequeue(&mut self) -> Option<(T, Priority)> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Returns the next item to be served without removing it.
    pub fn peek(&self) -> Option<(&T, Priority)> {
        self.items.first().map(|(item, priority)| (item, *priority))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (item, priority)) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}({priority})")?;
        }
        write!(f, "]")
    }
}
