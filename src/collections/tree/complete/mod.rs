mod builder;
mod codec;
mod complete_binary_tree;
mod iter;
mod node;

pub(crate) use builder::*;
pub use complete_binary_tree::*;
pub use iter::*;
pub(crate) use node::*;
