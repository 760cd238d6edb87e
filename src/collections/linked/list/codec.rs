use std::io::{Read, Write};

use super::LinkedList;
use crate::codec::{
    sequence, BinaryCodec, BinaryElement, CodecError, Replay, TextCodec, TextElement,
};

impl<T: TextElement> TextCodec for LinkedList<T> {
    fn encode_text(&self) -> String {
        sequence::encode_text(self)
    }

    fn replay_text(&mut self, text: &str) -> Replay {
        sequence::replay_text(text, |value| self.push_back(value))
    }
}

impl<T: BinaryElement> BinaryCodec for LinkedList<T> {
    fn encode_binary<W: Write>(&self, sink: &mut W) -> Result<(), CodecError> {
        sequence::encode_binary(self, sink)
    }

    fn replay_binary<R: Read>(&mut self, source: &mut R) -> Replay {
        sequence::replay_binary(source, |value| self.push_back(value))
    }
}
