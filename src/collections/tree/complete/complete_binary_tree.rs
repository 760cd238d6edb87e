use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::debug;

use super::{IntoIter, LevelOrder, Node, PreOrder, PreOrderBuilder};
use crate::codec::{CodecError, Replay};
use crate::collections::arena::{Arena, Link, NodeIndex};
use crate::util::fmt::DebugEntries;

/// A binary tree which is filled level by level, from left to right.
///
/// [`insert`](CompleteBinaryTree::insert) always places the new value in the first open child slot
/// found by a breadth-first search, so a tree built only by inserting is complete. Trees rebuilt by
/// decoding keep whatever shape was encoded, which need not be complete.
///
/// The tree is encoded in pre-order (node, left subtree, right subtree) with an explicit marker
/// for every absent child, which is enough to rebuild exactly the same shape.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n)` |
/// | `level_order` | `O(n)` |
/// | `pre_order` | `O(n)` |
pub struct CompleteBinaryTree<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Link,
}

impl<T> CompleteBinaryTree<T> {
    pub const fn new() -> CompleteBinaryTree<T> {
        CompleteBinaryTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&T> {
        Some(&self.nodes[self.root?].value)
    }

    /// Inserts `value` into the first open child slot in level order.
    pub fn insert(&mut self, value: T) {
        let node = self.nodes.alloc(Node::leaf(value));

        let Some(root) = self.root else {
            self.root = Some(node);
            return;
        };

        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            let current = &mut self.nodes[current];

            match current.left {
                Some(left) => queue.push_back(left),
                None => {
                    current.left = Some(node);
                    return;
                },
            }

            match current.right {
                Some(right) => queue.push_back(right),
                None => {
                    current.right = Some(node);
                    return;
                },
            }
        }

        unreachable!("a finite tree always has an open child slot");
    }

    /// Returns the number of levels in the tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<_> = self.root.into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level.into_iter()
                .flat_map(|index| [self.nodes[index].left, self.nodes[index].right])
                .flatten()
                .collect();
        }

        height
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns a breadth-first iterator over the values of the tree.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            nodes: &self.nodes,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Returns a pre-order iterator which yields None for every absent child. An empty tree
    /// yields nothing at all.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            nodes: &self.nodes,
            stack: self.root.map(Some).into_iter().collect(),
        }
    }
}

impl<T> CompleteBinaryTree<T> {
    /// Returns the indices of every node in level order.
    pub(crate) fn level_order_indices(&self) -> Vec<NodeIndex> {
        let mut order = Vec::with_capacity(self.len());
        let mut queue: VecDeque<_> = self.root.into_iter().collect();

        while let Some(index) = queue.pop_front() {
            order.push(index);
            queue.extend(self.nodes[index].left);
            queue.extend(self.nodes[index].right);
        }

        order
    }

    /// Rebuilds a tree from pre-order `records` and merges it into self. Records after the
    /// rebuilt tree is complete are ignored, while records that end before it is complete leave
    /// the remaining children absent.
    ///
    /// If a record fails, the part of the tree rebuilt before it is still merged and counted.
    pub(crate) fn replay_pre_order<I>(&mut self, records: I) -> Replay
    where
        I: IntoIterator<Item = Result<Option<T>, CodecError>>,
    {
        let mut builder = PreOrderBuilder::new();
        let mut records = records.into_iter();
        let mut error = None;

        while !builder.is_complete() {
            match records.next() {
                Some(Ok(record)) => builder.push(record),
                Some(Err(e)) => {
                    error = Some(e);
                    break;
                },
                None => break,
            }
        }

        if error.is_none() && builder.is_complete() && records.next().is_some() {
            debug!("ignoring records after a complete tree");
        }

        let count = builder.len();
        self.graft(builder.finish());
        Replay { count, error }
    }

    /// Adopts `decoded` as is if self is empty, otherwise inserts its values in level order.
    pub(crate) fn graft(&mut self, decoded: CompleteBinaryTree<T>) {
        if self.is_empty() {
            *self = decoded;
        } else {
            for value in decoded {
                self.insert(value);
            }
        }
    }
}

impl<T> FromIterator<T> for CompleteBinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = CompleteBinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for CompleteBinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> IntoIterator for CompleteBinaryTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in level order.
    fn into_iter(self) -> Self::IntoIter {
        let order = self.level_order_indices();
        IntoIter {
            nodes: self.nodes,
            order: order.into_iter(),
        }
    }
}

impl<T> Default for CompleteBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trees are equal if they have the same shape and the same values in the same positions.
impl<T: PartialEq> PartialEq for CompleteBinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.pre_order().eq(other.pre_order())
    }
}

impl<T: Eq> Eq for CompleteBinaryTree<T> {}

impl<T: Debug> Debug for CompleteBinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompleteBinaryTree")
            .field("pre_order", &DebugEntries(self.pre_order()))
            .field("len", &self.len())
            .finish()
    }
}

/// Writes the values in level order, separated by spaces.
impl<T: Display> Display for CompleteBinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "The tree is empty.");
        }

        for (i, value) in self.level_order().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
