use std::fmt::{self, Debug, Display, Formatter};

use tracing::warn;

use crate::collections::linked::list::{Iter, LinkedList};
use crate::util::fmt::{write_chain, DebugEntries};

/// A first-in-first-out collection.
pub struct Queue<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` at the rear of the Queue.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the front element, logging a warning if the Queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let popped = self.list.pop_front();
        if popped.is_none() {
            warn!("The queue is empty, unable to pop.");
        }
        popped
    }

    /// Returns the front element without removing it, logging a warning if the Queue
    /// is empty.
    pub fn peek(&self) -> Option<&T> {
        let front = self.list.front();
        if front.is_none() {
            warn!("The queue is empty, unable to peek.");
        }
        front
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let front = self.list.front_mut();
        if front.is_none() {
            warn!("The queue is empty, unable to peek.");
        }
        front
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from the front of the Queue to the rear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_to_rear", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter(), "The queue is empty.")
    }
}
