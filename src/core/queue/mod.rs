use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

/// Core queue structure: ordered elements, tail insertion, head-relative access.
/// Serializes as the plain sequence of its elements, head first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Create a queue holding the given elements, in the order given.
    /// An empty iterator yields an empty queue.
    pub fn create<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self { items: elements.into_iter().collect() }
    }

    /// Append elements at the tail, element by element, in the order given.
    /// An empty iterator leaves the queue unchanged; to enqueue an "absent"
    /// marker the caller must pass an explicit placeholder element.
    pub fn enqueue<I: IntoIterator<Item = T>>(&mut self, elements: I) -> &mut Self {
        let len_before = self.items.len();
        self.items.extend(elements);
        // --post operation assertion: prior elements are never dropped
        assert!(self.items.len() >= len_before, "Queue must retain prior elements after enqueue");
        self
    }

    /// Return the head element, or None on an empty queue
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Return the element at `position`, counting from the head at 0.
    /// Negative positions count back from the tail, -1 being the tail
    /// element. Out-of-range positions yield None rather than an error.
    pub fn peek_at(&self, position: isize) -> Option<&T> {
        let index = if position < 0 {
            self.items.len().checked_sub(position.unsigned_abs())?
        } else {
            position as usize
        };
        self.items.get(index)
    }

    /// Remove up to `count` elements from the head and return them, in
    /// order, as a new queue; the remainder stays in place. A count of 0
    /// defaults to 1. A count past the end stops at the end without error.
    pub fn dequeue(&mut self, count: usize) -> Queue<T> {
        let count = if count == 0 { 1 } else { count };
        let take = count.min(self.items.len());
        let len_before = self.items.len();
        let removed: VecDeque<T> = self.items.drain(..take).collect();
        // --post op assertion: queue shrinks by exactly the removed prefix
        assert_eq!(
            self.items.len(),
            len_before - removed.len(),
            "Queue length must decrease by the number of removed elements"
        );
        Queue { items: removed }
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the elements from head to tail without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::create(iter)
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
