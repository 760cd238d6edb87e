use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, Node};
use crate::collections::arena::{Arena, Link};
use crate::util::fmt::{write_chain, DebugEntries};

/// A list with links in both directions.
///
/// Only the forward links take part in encoding: a DoublyLinkedList is written from head to tail
/// and the backward links are rebuilt by [`push_back`](DoublyLinkedList::push_back), its native
/// insertion method, when decoding.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
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
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.nodes[head].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
    }

    pub fn push_back(&mut self, value: T) {
        let node = self.nodes.alloc(Node {
            value,
            prev: self.tail,
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
        match node.next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }

        Some(node.value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.nodes.free(self.tail?);

        self.tail = node.prev;
        match node.prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }

        Some(node.value)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|i| i == item)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Walks the list forwards, checking that every node's backward link points at the node that
    /// precedes it and that the walk ends at the tail.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut prev = None;
        let mut curr = self.head;

        while let Some(index) = curr {
            assert!(self.nodes[index].prev == prev, "Backward link of {index} is broken.");
            prev = curr;
            curr = self.nodes[index].next;
        }

        assert!(self.tail == prev, "Forward links should end at the tail.");
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter(), "The list is empty.")
    }
}
