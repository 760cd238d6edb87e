//! A module containing [`HashTable`] and associated types.
//!
//! Iteration is provided over entries, keys or values, always in slot order. There is no mutable
//! iterator over keys because mutating the keys of a HashTable in place would cause a logic error.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod codec;
mod hash_table;
mod iter;
mod tests;

pub use hash_table::*;
pub use iter::*;

#[doc(inline)]
pub use crate::util::error::TableFullError;
