use std::io::{Read, Write};

use super::{Queue, Stack};
use crate::codec::{
    sequence, BinaryCodec, BinaryElement, CodecError, Replay, TextCodec, TextElement,
};

// Both are encoded from the front. Replaying through push reverses a Stack and preserves a Queue.

impl<T: TextElement> TextCodec for Stack<T> {
    fn encode_text(&self) -> String {
        sequence::encode_text(self)
    }

    fn replay_text(&mut self, text: &str) -> Replay {
        sequence::replay_text(text, |value| self.push(value))
    }
}

impl<T: BinaryElement> BinaryCodec for Stack<T> {
    fn encode_binary<W: Write>(&self, sink: &mut W) -> Result<(), CodecError> {
        sequence::encode_binary(self, sink)
    }

    fn replay_binary<R: Read>(&mut self, source: &mut R) -> Replay {
        sequence::replay_binary(source, |value| self.push(value))
    }
}

impl<T: TextElement> TextCodec for Queue<T> {
    fn encode_text(&self) -> String {
        sequence::encode_text(self)
    }

    fn replay_text(&mut self, text: &str) -> Replay {
        sequence::replay_text(text, |value| self.push(value))
    }
}

impl<T: BinaryElement> BinaryCodec for Queue<T> {
    fn encode_binary<W: Write>(&self, sink: &mut W) -> Result<(), CodecError> {
        sequence::encode_binary(self, sink)
    }

    fn replay_binary<R: Read>(&mut self, source: &mut R) -> Replay {
        sequence::replay_binary(source, |value| self.push(value))
    }
}
