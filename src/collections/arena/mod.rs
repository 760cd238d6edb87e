//! Index-addressed node storage shared by the linked collections and the tree.
//!
//! Nodes refer to each other through [`NodeIndex`]es into an [`Arena`] rather than through
//! pointers. The arena owns every node, so dropping a collection drops all of its values without
//! walking any links.

mod arena;

pub(crate) use arena::*;
