use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::Display;

use crate::util::option::OptionExtension;

/// The position of a node within an [`Arena`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("#{_0}")]
pub(crate) struct NodeIndex(pub(super) usize);

/// An optional reference to another node in the same arena.
pub(crate) type Link = Option<NodeIndex>;

enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Link },
}

use Slot::*;

/// A vector of slots where freed slots are chained into a free list and reused by later
/// allocations.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Link,
    len: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots, occupied or not.
    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Moves `value` into a vacant slot, reusing the most recently freed one if there is one.
    pub fn alloc(&mut self, value: T) -> NodeIndex {
        self.len += 1;

        match self.free {
            Some(index) => {
                let next_free = match mem::replace(&mut self.slots[index.0], Occupied(value)) {
                    Vacant { next_free } => next_free,
                    Occupied(_) => unreachable!("free list contains an occupied slot"),
                };
                self.free = next_free;
                index
            },
            None => {
                self.slots.push(Occupied(value));
                NodeIndex(self.slots.len() - 1)
            },
        }
    }

    /// Vacates the slot at `index`, returning its value.
    ///
    /// # Panics
    /// Panics if the slot is already vacant.
    pub fn free(&mut self, index: NodeIndex) -> T {
        assert!(
            matches!(self.slots[index.0], Occupied(_)),
            "Attempted to free vacant arena slot {index}!"
        );

        let next_free = self.free;
        match mem::replace(&mut self.slots[index.0], Vacant { next_free }) {
            Occupied(value) => {
                self.free = Some(index);
                self.len -= 1;
                value
            },
            Vacant { .. } => unreachable!(),
        }
    }

    pub fn get(&self, index: NodeIndex) -> Option<&T> {
        match self.slots.get(index.0)? {
            Occupied(value) => Some(value),
            Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut T> {
        match self.slots.get_mut(index.0)? {
            Occupied(value) => Some(value),
            Vacant { .. } => None,
        }
    }

    /// Drops every value and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<T> Index<NodeIndex> for Arena<T> {
    type Output = T;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        // UNREACHABLE: Collections only hold links to occupied slots.
        self.get(index).unreachable()
    }
}

impl<T> IndexMut<NodeIndex> for Arena<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        self.get_mut(index).unreachable()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Arena<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("free", &self.free)
            .finish()
    }
}
