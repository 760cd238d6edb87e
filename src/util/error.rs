use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::Display as DeriveDisplay;

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Every slot of a fixed-capacity table is occupied and none of them holds the key being inserted.
#[derive(Debug, DeriveDisplay, derive_more::Error, Clone, Copy, PartialEq, Eq)]
#[display("no free slot for a new key in a table with capacity {cap}")]
pub struct TableFullError {
    pub cap: usize,
}
