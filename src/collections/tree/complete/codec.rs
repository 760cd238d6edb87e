use std::io::{Read, Write};

use super::CompleteBinaryTree;
use crate::codec::{
    binary, text, BinaryCodec, BinaryElement, CodecError, Replay, TextCodec, TextElement,
};

// Encoded in pre-order with a marker for every absent child. Decoding into an empty tree rebuilds
// the encoded shape exactly; decoding into a non-empty tree inserts the decoded values in level
// order.

impl<T: TextElement> TextCodec for CompleteBinaryTree<T> {
    fn encode_text(&self) -> String {
        let mut out = String::new();
        for record in self.pre_order() {
            text::write_optional(&mut out, record);
        }
        out
    }

    fn replay_text(&mut self, input: &str) -> Replay {
        self.replay_pre_order(
            text::tokens(input).map(|token| token.parse_optional::<T>().map_err(CodecError::from))
        )
    }
}

impl<T: BinaryElement> BinaryCodec for CompleteBinaryTree<T> {
    fn encode_binary<W: Write>(&self, sink: &mut W) -> Result<(), CodecError> {
        self.pre_order()
            .try_for_each(|record| binary::write_marked(&mut *sink, record.copied()))
            .map_err(CodecError::from)
    }

    fn replay_binary<R: Read>(&mut self, source: &mut R) -> Replay {
        self.replay_pre_order(
            std::iter::from_fn(|| binary::read_marked::<T, R>(&mut *source).transpose())
        )
    }
}
