use std::fmt::Debug;
use std::path::Path;

use serial_collections::codec::{BinaryCodec, TextCodec};
use serial_collections::collections::adapters::{Queue, Stack};
use serial_collections::collections::hash::HashTable;
use serial_collections::collections::linked::{DoublyLinkedList, LinkedList};
use serial_collections::collections::tree::CompleteBinaryTree;
use tempfile::tempdir;

/// Writes `original` to a file with the strict API, reads it into a fresh default collection and
/// returns that collection.
fn through_file<C>(original: &C, path: &Path) -> C
where
    C: BinaryCodec + Default,
{
    original.write_file(path).unwrap();
    let mut decoded = C::default();
    decoded.read_file(path).unwrap();
    decoded
}

/// Same as [`through_file`], but with the permissive API.
fn through_file_permissive<C>(original: &C, path: &Path) -> C
where
    C: BinaryCodec + Default,
{
    original.serialize_binary(path);
    let mut decoded = C::default();
    decoded.deserialize_binary(path);
    decoded
}

fn through_text<C>(original: &C) -> C
where
    C: TextCodec + Default,
{
    let mut decoded = C::default();
    decoded.decode_text(&original.encode_text()).unwrap();
    decoded
}

fn assert_round_trips<C>(original: &C, path: &Path)
where
    C: TextCodec + BinaryCodec + Default + PartialEq + Debug,
{
    assert_eq!(&through_text(original), original, "The text round trip should match.");
    assert_eq!(&through_file(original, path), original, "The strict file round trip should match.");
    assert_eq!(
        &through_file_permissive(original, path),
        original,
        "The permissive file round trip should match."
    );
}

#[test]
fn test_sequences_round_trip_through_files() {
    let dir = tempdir().unwrap();

    let list: LinkedList<i64> = [-3, 0, 7, i64::MAX].into_iter().collect();
    assert_round_trips(&list, &dir.path().join("list.bin"));

    let doubly: DoublyLinkedList<f32> = [1.25, -0.5, f32::MIN_POSITIVE].into_iter().collect();
    assert_round_trips(&doubly, &dir.path().join("doubly.bin"));

    let queue: Queue<u16> = (100..110).collect();
    assert_round_trips(&queue, &dir.path().join("queue.bin"));
}

#[test]
fn test_stack_comes_back_reversed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stack.bin");

    let mut stack = Stack::new();
    for i in 1..=3_u8 {
        stack.push(i);
    }
    assert_eq!(stack.to_string(), "(3) -> (2) -> (1)");

    let decoded = through_file(&stack, &path);
    assert_eq!(decoded.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(through_text(&stack), decoded, "Both encodings should reverse the same way.");

    let twice = through_file(&decoded, &path);
    assert_eq!(twice, stack, "Reversing twice should restore the original.");
}

#[test]
fn test_hash_table_through_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.bin");

    let mut table = HashTable::<u32, f64>::new();
    table.insert(1, 0.1).unwrap();
    table.insert(2, 0.2).unwrap();
    table.insert(11, 1.1).unwrap();

    for decoded in [through_file(&table, &path), through_file_permissive(&table, &path)] {
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded.get(&1), Some(&0.1));
        assert_eq!(decoded.get(&2), Some(&0.2));
        assert_eq!(decoded.get(&11), Some(&1.1));
        assert_eq!(decoded.get(&3), None);
    }
}

#[test]
fn test_hash_table_text_entries() {
    let mut table = HashTable::<String, i32>::with_cap(10);
    table.insert("one".to_owned(), 1).unwrap();
    table.insert("two".to_owned(), 2).unwrap();

    let text = table.encode_text();
    let mut tokens: Vec<_> = text.split_whitespace().collect();
    tokens.sort();
    assert_eq!(tokens, ["one:1", "two:2"]);

    let mut decoded = HashTable::<String, i32>::new();
    decoded.deserialize_text(&text);
    assert_eq!(decoded.get("one"), Some(&1));
    assert_eq!(decoded.get("two"), Some(&2));
}

#[test]
fn test_tree_through_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tree.bin");

    let tree: CompleteBinaryTree<i32> = (1..=5).collect();
    assert_eq!(tree.to_string(), "1 2 3 4 5");
    assert_round_trips(&tree, &path);

    let decoded = through_file(&tree, &path);
    assert_eq!(
        decoded.level_order().collect::<Vec<_>>(),
        tree.level_order().collect::<Vec<_>>()
    );
}

#[test]
fn test_write_file_truncates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.bin");

    let long: LinkedList<u32> = (0..100).collect();
    long.write_file(&path).unwrap();

    let short: LinkedList<u32> = (0..3).collect();
    assert_eq!(through_file(&short, &path), short, "Old file contents should be discarded.");
}

#[test]
fn test_strict_api_reports_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.bin");

    let mut list = LinkedList::<u8>::new();
    assert!(list.read_file(&missing).unwrap_err().is_io());

    let nested = dir.path().join("no").join("such").join("dir.bin");
    assert!(list.write_file(&nested).unwrap_err().is_io());
}

#[test]
fn test_permissive_api_is_a_no_op_on_failure() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("no").join("such").join("dir.bin");

    let list: LinkedList<u8> = (1..=3).collect();
    list.serialize_binary(&nested);
    assert!(!nested.exists(), "Nothing should be written to an unopenable path.");

    let mut decoded: LinkedList<u8> = [9].into_iter().collect();
    assert_eq!(decoded.deserialize_binary(&nested), 0);
    assert_eq!(
        decoded.iter().copied().collect::<Vec<_>>(),
        [9],
        "The target should be untouched when the file can't be opened."
    );

    // A directory can be neither created as a file nor read as one.
    let mut tree = CompleteBinaryTree::<u8>::new();
    tree.serialize_binary(dir.path());
    assert_eq!(tree.deserialize_binary(dir.path()), 0);
    assert!(tree.is_empty());
}

#[test]
fn test_decoding_a_file_augments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("queue.bin");

    let queue: Queue<i8> = [4, 5].into_iter().collect();
    queue.write_file(&path).unwrap();

    let mut target: Queue<i8> = [1, 2, 3].into_iter().collect();
    assert_eq!(target.read_file(&path).unwrap(), 2);
    assert_eq!(target.to_string(), "(1) -> (2) -> (3) -> (4) -> (5)");
}

#[test]
fn test_permissive_file_decode_counts_records_before_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tree.bin");

    let tree: CompleteBinaryTree<u16> = (1..=3).collect();
    tree.write_file(&path).unwrap();

    // Keep the records for nodes 1 and 2, then follow them with an invalid marker.
    let record = 1 + size_of::<u16>();
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.truncate(2 * record);
    bytes.extend([9, 0, 0]);
    std::fs::write(&path, &bytes).unwrap();

    let mut decoded = CompleteBinaryTree::<u16>::new();
    assert_eq!(
        decoded.deserialize_binary(&path),
        2,
        "The nodes read before the invalid record should be kept and counted."
    );
    assert_eq!(decoded.level_order().copied().collect::<Vec<_>>(), [1, 2]);
    assert!(decoded.read_file(&path).unwrap_err().is_marker());

    let mut bytes = Vec::new();
    let list: LinkedList<u16> = (1..=3).collect();
    list.encode_binary(&mut bytes).unwrap();
    std::fs::write(&path, &bytes).unwrap();

    let mut decoded = LinkedList::<u16>::new();
    assert_eq!(decoded.deserialize_binary(&path), 3);
    assert_eq!(decoded.deserialize_text("4 5 bad 6"), 2);
    assert_eq!(decoded.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}
