#![cfg(test)]

use super::*;
use crate::codec::{BinaryCodec, TextCodec};
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::log::count_warnings;

#[test]
fn test_insert_and_get() {
    let mut table = HashTable::<String, i32>::new();
    assert_eq!(table.cap(), DEFAULT_CAP);

    assert_eq!(table.insert("one".into(), 1), Ok(None));
    assert_eq!(table.insert("two".into(), 2), Ok(None));

    assert_eq!(table.get("one"), Some(&1));
    assert_eq!(table.get("two"), Some(&2));
    assert_eq!(table.len(), 2);

    assert_eq!(table.insert("one".into(), 10), Ok(Some(1)), "Inserting an existing key should replace its value.");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_missing_key_is_distinct_from_zero() {
    let mut table = HashTable::<String, i32>::new();
    table.insert("zero".into(), 0).unwrap();

    assert_eq!(table.get("zero"), Some(&0));
    assert_eq!(table.get("nonexistent"), None, "A missing key shouldn't look like a stored zero.");
    assert!(!table.contains("nonexistent"));
}

#[test]
fn test_remove() {
    let mut table = HashTable::<String, i32>::new();
    table.insert("one".into(), 1).unwrap();
    table.insert("two".into(), 2).unwrap();

    assert_eq!(table.remove("one"), Some(1));
    assert_eq!(table.get("one"), None);
    assert_eq!(table.get("two"), Some(&2));
    assert_eq!(table.remove("one"), None);
}

#[test]
fn test_table_full() {
    let mut table = HashTable::<u32, u32>::with_cap(3);
    for i in 0..3 {
        table.insert(i, i).unwrap();
    }
    assert!(table.is_full());

    assert_eq!(
        table.insert(3, 3),
        Err(TableFullError { cap: 3 }),
        "Inserting a new key into a full table should fail rather than probe forever."
    );
    assert_eq!(table.insert(1, 100), Ok(Some(1)), "Existing keys should still be replaceable.");
    assert_eq!(table.get(&3), None, "Lookups of a missing key should terminate on a full table.");

    let mut empty = HashTable::<u32, u32>::with_cap(0);
    assert!(empty.insert(0, 0).is_err());
    assert_eq!(empty.get(&0), None);
}

#[test]
fn test_hash_collisions() {
    let mut table = HashTable::with_cap_and_hasher(6, BadHasherBuilder);
    table.insert(ManualHash::new(0, "zero"), 0).unwrap();
    table.insert(ManualHash::new(0, "one"), 1).unwrap();
    table.insert(ManualHash::new(2, "two"), 2).unwrap();
    table.insert(ManualHash::new(0, "three"), 3).unwrap();
    table.insert(ManualHash::new(2, "four"), 4).unwrap();
    table.insert(ManualHash::new(1, "five"), 5).unwrap();

    table.remove(&ManualHash::new(0, "zero"));
    table.remove(&ManualHash::new(2, "two"));

    assert_eq!(
        table.values().copied().collect::<Vec<_>>(),
        [1, 3, 4, 5],
        "Removal should shift colliding entries back so that none of them are lost."
    );
    for (hash, name) in [(0, "one"), (0, "three"), (2, "four"), (1, "five")] {
        assert!(
            table.contains(&ManualHash::new(hash, name)),
            "Shifted entries should still be reachable from their ideal index."
        );
    }

    let mut table = HashTable::with_cap_and_hasher(6, BadHasherBuilder);
    table.insert(ManualHash::new(5, "zero"), 0).unwrap();
    table.insert(ManualHash::new(5, "one"), 1).unwrap();
    table.insert(ManualHash::new(1, "two"), 2).unwrap();
    table.insert(ManualHash::new(5, "three"), 3).unwrap();

    table.remove(&ManualHash::new(5, "zero"));

    assert_eq!(
        table.values().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "Hash collisions should be handled in a wrapping manner."
    );
}

#[test]
fn test_text_round_trip() {
    let mut table = HashTable::<String, i32>::with_cap(10);
    table.insert("one".into(), 1).unwrap();
    table.insert("two".into(), 2).unwrap();

    let text = table.encode_text();
    let mut tokens: Vec<_> = text.split_whitespace().collect();
    tokens.sort();
    assert_eq!(tokens, ["one:1", "two:2"]);

    let mut decoded = HashTable::<String, i32>::with_cap(10);
    assert_eq!(decoded.decode_text(&text).unwrap(), 2);
    assert_eq!(decoded.get("one"), Some(&1));
    assert_eq!(decoded.get("two"), Some(&2));

    let mut reordered = HashTable::<String, i32>::new();
    reordered.decode_text("two:2 one:1").unwrap();
    assert_eq!(reordered.get("one"), Some(&1), "Token order shouldn't affect lookups.");
}

#[test]
fn test_text_entry_grammar() {
    let mut table = HashTable::<String, i32>::new();
    assert!(table.decode_text("nodelimiter a:1 b:c:2").unwrap_err().is_parse());
    assert_eq!(table.get("a"), Some(&1), "Entries before the bad one should remain inserted.");
    assert_eq!(table.len(), 1, "Tokens without a delimiter should be skipped.");

    let mut table = HashTable::<String, i32>::new();
    table.decode_text("key:-5 :3").unwrap();
    assert_eq!(table.get("key"), Some(&-5));
    assert_eq!(table.get(""), Some(&3), "The key is everything before the first delimiter.");
}

#[test]
fn test_binary_round_trip() {
    let mut table = HashTable::<u32, i64>::with_cap(16);
    for i in 0..12 {
        table.insert(i * 7, -(i as i64)).unwrap();
    }

    let mut bytes = Vec::new();
    table.encode_binary(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 12 * (size_of::<u32>() + size_of::<i64>()));

    let mut decoded = HashTable::<u32, i64>::with_cap(16);
    assert_eq!(decoded.decode_binary(&mut bytes.as_slice()).unwrap(), 12);
    for i in 0..12 {
        assert_eq!(decoded.get(&(i * 7)), Some(&-(i as i64)));
    }
}

#[test]
fn test_truncated_pair_is_discarded() {
    let mut table = HashTable::<u32, u32>::new();
    table.insert(1, 10).unwrap();
    table.insert(2, 20).unwrap();

    let mut bytes = Vec::new();
    table.encode_binary(&mut bytes).unwrap();

    // Leave the final key intact but cut its value short.
    bytes.truncate(bytes.len() - 2);
    let mut decoded = HashTable::<u32, u32>::new();
    assert_eq!(decoded.decode_binary(&mut bytes.as_slice()).unwrap(), 1);
    assert_eq!(decoded.len(), 1, "A key without a complete value shouldn't be inserted.");

    // Remove the value entirely, leaving only the key.
    bytes.truncate(bytes.len() - 2);
    let mut decoded = HashTable::<u32, u32>::new();
    assert_eq!(decoded.decode_binary(&mut bytes.as_slice()).unwrap(), 1);
}

#[test]
fn test_decode_into_full_table() {
    let mut table = HashTable::<u8, u8>::with_cap(2);
    let error = table.decode_text("1:1 2:2 3:3").unwrap_err();

    assert!(error.is_table_full());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_empty() {
    let table = HashTable::<String, i32>::new();
    assert_eq!(table.encode_text(), "");
    assert_eq!(table.to_string(), "The table is empty.");
    assert_eq!(table.iter().next(), None);
}

#[test]
fn test_missing_key_warns() {
    let mut table = HashTable::<String, i32>::new();
    table.insert("one".into(), 1).unwrap();

    let (found, warnings) = count_warnings(|| table.get("one").copied());
    assert_eq!(found, Some(1));
    assert_eq!(warnings, 0, "Finding a key shouldn't log anything.");

    let (missing, warnings) = count_warnings(|| {
        (table.get("two").copied(), table.get_entry("two").is_some())
    });
    assert_eq!(missing, (None, false));
    assert_eq!(warnings, 2, "Every lookup of a missing key should log a warning.");

    let (missing, warnings) = count_warnings(|| {
        (table.get_mut("two").is_some(), table.remove("two"))
    });
    assert_eq!(missing, (false, None));
    assert_eq!(warnings, 2);

    let (contained, warnings) = count_warnings(|| table.contains("two"));
    assert!(!contained);
    assert_eq!(warnings, 0, "Checking for a key is not a failed lookup and shouldn't warn.");
}
