use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::vec;

use super::Node;
use crate::collections::arena::{Arena, Link, NodeIndex};

/// A breadth-first iterator over the values of a
/// [`CompleteBinaryTree`](super::CompleteBinaryTree).
pub struct LevelOrder<'a, T> {
    pub(crate) nodes: &'a Arena<Node<T>>,
    pub(crate) queue: VecDeque<NodeIndex>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.queue.pop_front()?];

        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.value)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

impl<T> Clone for LevelOrder<'_, T> {
    fn clone(&self) -> Self {
        LevelOrder {
            nodes: self.nodes,
            queue: self.queue.clone(),
        }
    }
}

/// A pre-order iterator over a [`CompleteBinaryTree`](super::CompleteBinaryTree), yielding
/// `Some(value)` for each node and None for each absent child.
pub struct PreOrder<'a, T> {
    pub(crate) nodes: &'a Arena<Node<T>>,
    pub(crate) stack: Vec<Link>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;

        match self.stack.pop()? {
            None => Some(None),
            Some(index) => {
                let node = &nodes[index];
                // The right subtree is pushed first so that the left one is visited first.
                self.stack.push(node.right);
                self.stack.push(node.left);
                Some(Some(&node.value))
            },
        }
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        PreOrder {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

/// An owned iterator over the values of a [`CompleteBinaryTree`](super::CompleteBinaryTree), in
/// level order.
pub struct IntoIter<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) order: vec::IntoIter<NodeIndex>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        Some(self.nodes.free(index).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
