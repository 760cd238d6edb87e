use std::hash::{BuildHasher, Hash};
use std::io::{Read, Write};

use tracing::{debug, trace};

use super::HashTable;
use crate::codec::{
    binary, text, BinaryCodec, BinaryElement, CodecError, Replay, TextCodec, TextElement,
};

// Entries are written in slot order. Decoding inserts them through the probing insert, so the
// decoded table maps the same keys to the same values even if they land in different slots.

impl<K, V, B> TextCodec for HashTable<K, V, B>
where
    K: Hash + Eq + TextElement,
    V: TextElement,
    B: BuildHasher,
{
    fn encode_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in self {
            text::write_entry(&mut out, key, value);
        }
        out
    }

    fn replay_text(&mut self, input: &str) -> Replay {
        Replay::run(|count| {
            for token in text::tokens(input) {
                let Some((key, value)) = token.split_entry() else {
                    debug!(token = token.text, position = token.position, "skipping token without a delimiter");
                    continue;
                };

                self.insert(key.parse()?, value.parse()?)?;
                *count += 1;
            }

            trace!(count = *count, "replayed text entries");
            Ok(())
        })
    }
}

impl<K, V, B> BinaryCodec for HashTable<K, V, B>
where
    K: Hash + Eq + BinaryElement,
    V: BinaryElement,
    B: BuildHasher,
{
    fn encode_binary<W: Write>(&self, sink: &mut W) -> Result<(), CodecError> {
        for (key, value) in self {
            binary::write_pair(sink, *key, *value)?;
        }
        Ok(())
    }

    fn replay_binary<R: Read>(&mut self, source: &mut R) -> Replay {
        Replay::run(|count| {
            // Both halves are read before inserting, so a pair cut short is never inserted.
            while let Some((key, value)) = binary::read_pair::<K, V, R>(source)? {
                self.insert(key, value)?;
                *count += 1;
            }

            trace!(count = *count, "replayed binary entries");
            Ok(())
        })
    }
}
