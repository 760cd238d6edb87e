use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, Node};
use crate::collections::arena::{Arena, Link, NodeIndex};
use crate::util::fmt::{write_chain, DebugEntries};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A list with links in one direction, from the head to the tail.
///
/// The native insertion method is [`push_back`](LinkedList::push_back), so encoding and then
/// decoding a LinkedList reproduces it in the same order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
}

impl<T> LinkedList<T> {
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        Some(&self.nodes[self.head?].value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.nodes[self.head?].value)
    }

    pub fn back(&self) -> Option<&T> {
        Some(&self.nodes[self.tail?].value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.nodes[self.tail?].value)
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.nodes.alloc(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
    }

    pub fn push_back(&mut self, value: T) {
        let node = self.nodes.alloc(Node {
            value,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.nodes.free(self.head?);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        Some(node.value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        &self.nodes[self.checked_seek(index).throw()].value
    }

    pub fn try_get(&self, index: usize) -> Option<&T> {
        Some(&self.nodes[self.checked_seek(index).ok()?].value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        let node = self.checked_seek(index).throw();
        &mut self.nodes[node].value
    }

    pub fn try_get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.checked_seek(index).ok()?;
        Some(&mut self.nodes[node].value)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|i| i == item)
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeIndex, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }

        let mut curr = self.head;
        for _ in 0..index {
            curr = curr.and_then(|node| self.nodes[node].next);
        }
        curr.ok_or(IndexOutOfBounds { index, len })
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter(), "The list is empty.")
    }
}
