//! Tree collection types.

pub mod complete;

#[doc(inline)]
pub use complete::CompleteBinaryTree;
