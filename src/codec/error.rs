use std::io;

use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::TableFullError;

/// A text token didn't match the grammar of the type it was decoded as.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unable to parse token {token:?} at position {position}")]
pub struct ParseError {
    pub token: String,
    pub position: usize,
}

/// A tree record started with a byte other than the absent (`0`) or present (`1`) marker.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid presence marker {marker:#04x}")]
pub struct MarkerError {
    pub marker: u8,
}

/// Any error that stops an encode or decode before the whole stream has been handled.
///
/// Records handled before the error are kept: a failed decode leaves the records preceding the
/// failure inserted into the target collection.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum CodecError {
    Io(io::Error),
    Parse(ParseError),
    Marker(MarkerError),
    TableFull(TableFullError),
}
