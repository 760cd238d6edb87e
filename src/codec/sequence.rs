//! Encoding and replay for collections whose traversal is a plain sequence of elements (lists,
//! stacks and queues). Each function takes the collection's traversal or native insertion method,
//! so the collections only need to say which ones to use.

use std::io::{Read, Write};

use tracing::trace;

use super::{binary, text, BinaryElement, CodecError, Replay, TextElement};

pub fn encode_text<'a, T, I>(values: I) -> String
where
    T: TextElement + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for value in values {
        text::write_token(&mut out, value);
    }
    out
}

pub fn replay_text<T, F>(input: &str, mut insert: F) -> Replay
where
    T: TextElement,
    F: FnMut(T),
{
    Replay::run(|count| {
        for token in text::tokens(input) {
            insert(token.parse()?);
            *count += 1;
        }

        trace!(count = *count, "replayed text records");
        Ok(())
    })
}

pub fn encode_binary<'a, T, I, W>(values: I, sink: &mut W) -> Result<(), CodecError>
where
    T: BinaryElement + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    for value in values {
        binary::write_element(sink, *value)?;
    }
    Ok(())
}

pub fn replay_binary<T, R, F>(source: &mut R, mut insert: F) -> Replay
where
    T: BinaryElement,
    R: Read,
    F: FnMut(T),
{
    Replay::run(|count| {
        for value in binary::elements::<T, R>(source) {
            insert(value?);
            *count += 1;
        }

        trace!(count = *count, "replayed binary records");
        Ok(())
    })
}
