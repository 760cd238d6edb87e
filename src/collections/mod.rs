//! Various general-purpose collection types, each of which can be written out and rebuilt through
//! both encodings in [`codec`](crate::codec).
//!
//! # Purpose
//! Every collection here implements [`TextCodec`](crate::codec::TextCodec) and
//! [`BinaryCodec`](crate::codec::BinaryCodec) on top of its own traversal order and its own
//! insertion method.
//!
//! # Method
//! The linked collections and the tree don't allocate their nodes individually. Nodes live in a
//! shared [`Arena`](arena::Arena) and refer to each other by index, which keeps all of them free of
//! unsafe code and makes dropping a long chain iterative rather than recursive.

#[cfg(any(feature = "linked", feature = "tree"))]
pub(crate) mod arena;

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
