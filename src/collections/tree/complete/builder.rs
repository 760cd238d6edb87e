use super::{CompleteBinaryTree, Node};
use crate::collections::arena::NodeIndex;

/// A child slot waiting for the next pre-order record.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    Left(NodeIndex),
    Right(NodeIndex),
}

/// Rebuilds a tree from its pre-order records one record at a time, using an explicit stack of
/// open child slots in place of recursion, so the depth of the input can't overflow the call
/// stack.
pub(crate) struct PreOrderBuilder<T> {
    tree: CompleteBinaryTree<T>,
    pending: Vec<Slot>,
}

impl<T> PreOrderBuilder<T> {
    pub fn new() -> PreOrderBuilder<T> {
        PreOrderBuilder {
            tree: CompleteBinaryTree::new(),
            pending: vec![Slot::Root],
        }
    }

    /// Returns the number of nodes placed so far.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true once every slot has been filled or marked absent.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fills the next open slot with `record`, or marks it absent if `record` is None. Records
    /// pushed after the tree is complete are dropped.
    pub fn push(&mut self, record: Option<T>) {
        let Some(slot) = self.pending.pop() else {
            return;
        };

        let Some(value) = record else {
            return;
        };

        let node = self.tree.nodes.alloc(Node::leaf(value));
        match slot {
            Slot::Root => self.tree.root = Some(node),
            Slot::Left(parent) => self.tree.nodes[parent].left = Some(node),
            Slot::Right(parent) => self.tree.nodes[parent].right = Some(node),
        }

        self.pending.push(Slot::Right(node));
        self.pending.push(Slot::Left(node));
    }

    /// Returns the rebuilt tree. Slots that are still open are left absent.
    pub fn finish(self) -> CompleteBinaryTree<T> {
        self.tree
    }
}
