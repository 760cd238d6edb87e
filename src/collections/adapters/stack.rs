use std::fmt::{self, Debug, Display, Formatter};

use tracing::warn;

use crate::collections::linked::list::{Iter, LinkedList};
use crate::util::fmt::{write_chain, DebugEntries};

/// A last-in-first-out collection.
///
/// [`pop`](Stack::pop) and [`peek`](Stack::peek) return None on an empty Stack and log a warning,
/// as using an empty Stack is usually a logic error in the caller.
pub struct Stack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Places `value` on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top element, logging a warning if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let popped = self.list.pop_front();
        if popped.is_none() {
            warn!("The stack is empty, unable to pop.");
        }
        popped
    }

    /// Returns the top element without removing it, logging a warning if the Stack is empty.
    pub fn peek(&self) -> Option<&T> {
        let top = self.list.front();
        if top.is_none() {
            warn!("The stack is empty, unable to peek.");
        }
        top
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let top = self.list.front_mut();
        if top.is_none() {
            warn!("The stack is empty, unable to peek.");
        }
        top
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from the top of the Stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_to_bottom", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter(), "The stack is empty.")
    }
}
