//! The two encodings shared by every collection in this crate.
//!
//! Both encodings write a collection's records in its canonical traversal order and rebuild it by
//! replaying those records, in the same order, through the collection's own insertion method:
//! - The text encoding writes every record as a token followed by a space.
//! - The binary encoding writes every record as raw fixed-width bytes, with nothing in between.
//!
//! Because of the replay, a round-trip only reproduces the original when the native insertion
//! method appends. A [`Stack`](crate::collections::adapters::Stack) pushes onto its top, so
//! decoding its encoding reverses it.
//!
//! # Decoding augments
//! Decoding never clears the target first. Records are inserted into whatever the collection
//! already holds.
//!
//! # Error handling
//! The `encode_*` / `decode_*` methods and [`write_file`](BinaryCodec::write_file) /
//! [`read_file`](BinaryCodec::read_file) report failures as a [`CodecError`]. The
//! `serialize_*` / `deserialize_*` methods are permissive instead: failures are logged as warnings
//! and the call does nothing further. The `deserialize_*` methods still return the number of records
//! inserted before the failure.
//!
//! Both are built on the `replay_*` methods, which return a [`Replay`] holding the count and the
//! error together.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::warn;

pub mod binary;
mod element;
mod error;
mod replay;
pub mod sequence;
pub mod text;

pub use element::*;
pub use error::*;
pub use replay::*;

/// A collection that can be written to and rebuilt from the text encoding.
pub trait TextCodec {
    /// Writes every record in traversal order. An empty collection produces an empty string.
    fn encode_text(&self) -> String;

    /// Inserts the records of `text` into self until they run out or one can't be decoded.
    fn replay_text(&mut self, text: &str) -> Replay;

    /// Inserts every record of `text` into self, returning the number of records inserted. If a
    /// token can't be decoded, the records before it remain inserted.
    fn decode_text(&mut self, text: &str) -> Result<usize, CodecError> {
        self.replay_text(text).into_result()
    }

    /// Decodes `text` into self, returning the number of records inserted. An error is logged as
    /// a warning, with the records before it still inserted and counted.
    fn deserialize_text(&mut self, text: &str) -> usize {
        let Replay { count, error } = self.replay_text(text);
        if let Some(error) = error {
            warn!(%error, count, "text deserialization stopped early");
        }
        count
    }
}

/// A collection that can be written to and rebuilt from the binary encoding.
pub trait BinaryCodec {
    /// Writes every record in traversal order to `sink`.
    fn encode_binary<W: Write>(&self, sink: &mut W) -> Result<(), CodecError>;

    /// Inserts the complete records read from `source` into self until it runs out or a record
    /// can't be read.
    fn replay_binary<R: Read>(&mut self, source: &mut R) -> Replay;

    /// Inserts every complete record read from `source` into self, returning the number of records
    /// inserted. A truncated trailing record isn't an error, it is dropped.
    fn decode_binary<R: Read>(&mut self, source: &mut R) -> Result<usize, CodecError> {
        self.replay_binary(source).into_result()
    }

    /// Creates (or truncates) the file at `path` and encodes self into it.
    fn write_file(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let mut sink = BufWriter::new(File::create(path)?);
        self.encode_binary(&mut sink)?;
        sink.flush()?;
        Ok(())
    }

    /// Decodes the whole file at `path` into self.
    fn read_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CodecError> {
        let mut source = BufReader::new(File::open(path)?);
        self.decode_binary(&mut source)
    }

    /// Encodes self into the file at `path`. If the file can't be written, a warning is logged
    /// and the call is otherwise a no-op.
    fn serialize_binary(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(error) = self.write_file(path) {
            warn!(path = %path.display(), %error, "unable to open the file for binary serialization");
        }
    }

    /// Decodes the file at `path` into self, returning the number of records inserted. If the file
    /// can't be opened, a warning is logged and 0 is returned. If reading fails part way, a warning
    /// is logged and the records before the failure are still inserted and counted.
    fn deserialize_binary(&mut self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) => {
                warn!(path = %path.display(), %error, "unable to open the file for binary deserialization");
                return 0;
            },
        };

        let Replay { count, error } = self.replay_binary(&mut BufReader::new(file));
        if let Some(error) = error {
            warn!(path = %path.display(), %error, count, "binary deserialization stopped early");
        }
        count
    }
}
