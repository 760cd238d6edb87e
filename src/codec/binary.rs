//! Helpers for the fixed-width binary encoding.
//!
//! There is no header, no record count and no terminator: a stream is read one fixed-width record
//! at a time until it runs out. A trailing record that is cut short is dropped.

use std::io::{self, ErrorKind, Read, Write};
use std::marker::PhantomData;

use tracing::debug;

use super::{BinaryElement, CodecError, MarkerError};

pub const ABSENT: u8 = 0;
pub const PRESENT: u8 = 1;

/// How much of a buffer [`fill`] managed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Complete,
    /// The source ended after this many bytes.
    Partial(usize),
    Exhausted,
}

/// Reads from `source` until `buf` is full or the source ends.
pub fn fill<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<Fill> {
    let mut filled = 0;

    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(match filled {
        n if n == buf.len() => Fill::Complete,
        0 => Fill::Exhausted,
        n => Fill::Partial(n),
    })
}

pub fn write_element<T: BinaryElement, W: Write>(sink: &mut W, value: T) -> io::Result<()> {
    sink.write_all(value.to_bytes().as_ref())
}

/// Reads the next element, or None if the source is exhausted or ends mid-record.
pub fn read_element<T: BinaryElement, R: Read>(source: &mut R) -> io::Result<Option<T>> {
    let mut bytes = T::Bytes::default();

    match fill(source, bytes.as_mut())? {
        Fill::Complete => Ok(Some(T::from_bytes(bytes))),
        Fill::Partial(read) => {
            debug!(read, width = T::WIDTH, "discarding truncated trailing record");
            Ok(None)
        },
        Fill::Exhausted => Ok(None),
    }
}

pub fn write_pair<K, V, W>(sink: &mut W, key: K, value: V) -> io::Result<()>
where
    K: BinaryElement,
    V: BinaryElement,
    W: Write,
{
    write_element(sink, key)?;
    write_element(sink, value)
}

/// Reads a key immediately followed by its value. A record with a complete key but a short value
/// is discarded as a whole.
pub fn read_pair<K, V, R>(source: &mut R) -> io::Result<Option<(K, V)>>
where
    K: BinaryElement,
    V: BinaryElement,
    R: Read,
{
    let Some(key) = read_element::<K, R>(source)? else {
        return Ok(None);
    };

    match read_element::<V, R>(source)? {
        Some(value) => Ok(Some((key, value))),
        None => {
            debug!(width = K::WIDTH + V::WIDTH, "discarding record without a complete value");
            Ok(None)
        },
    }
}

/// Writes a presence marker followed by the value, or by zeroes in place of an absent value, so
/// that every record has the same width.
pub fn write_marked<T: BinaryElement, W: Write>(sink: &mut W, value: Option<T>) -> io::Result<()> {
    match value {
        Some(value) => {
            sink.write_all(&[PRESENT])?;
            write_element(sink, value)
        },
        None => {
            sink.write_all(&[ABSENT])?;
            sink.write_all(T::Bytes::default().as_ref())
        },
    }
}

/// Reads a record written by [`write_marked`]. The outer Option is None once the source runs out.
pub fn read_marked<T: BinaryElement, R: Read>(
    source: &mut R,
) -> Result<Option<Option<T>>, CodecError> {
    let mut marker = [ABSENT];

    if fill(source, &mut marker)? != Fill::Complete {
        return Ok(None);
    }

    let Some(value) = read_element::<T, R>(source)? else {
        debug!(width = T::WIDTH + 1, "discarding marked record without a complete value");
        return Ok(None);
    };

    match marker[0] {
        ABSENT => Ok(Some(None)),
        PRESENT => Ok(Some(Some(value))),
        marker => Err(MarkerError { marker }.into()),
    }
}

/// Returns an iterator reading elements from `source` until it runs out.
pub fn elements<T: BinaryElement, R: Read>(source: &mut R) -> Elements<'_, T, R> {
    Elements {
        source,
        done: false,
        _phantom: PhantomData,
    }
}

pub struct Elements<'a, T, R> {
    source: &'a mut R,
    done: bool,
    _phantom: PhantomData<T>,
}

impl<T: BinaryElement, R: Read> Iterator for Elements<'_, T, R> {
    type Item = io::Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match read_element::<T, R>(&mut *self.source) {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(e) => {
                self.done = true;
                Some(Err(e))
            },
        }
    }
}
