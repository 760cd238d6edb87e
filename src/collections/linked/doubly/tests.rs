#![cfg(test)]

use super::*;
use crate::codec::{BinaryCodec, TextCodec};

#[test]
fn test_links_in_both_directions() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    list.verify_double_links();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);

    assert_eq!(list.pop_back(), Some(3));
    list.verify_double_links();
    assert_eq!(list.pop_front(), Some(1));
    list.verify_double_links();
    assert_eq!(list.pop_back(), Some(2));
    list.verify_double_links();
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_iter_meets_in_the_middle() {
    let list: DoublyLinkedList<_> = (0..5).collect();
    let mut iter = list.iter();

    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), [&1, &2, &3], "Both ends shouldn't yield the same node.");
}

#[test]
fn test_text_round_trip() {
    let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    let text = list.encode_text();
    assert_eq!(text, "1 2 3 ");

    let mut decoded = DoublyLinkedList::<i32>::new();
    decoded.decode_text(&text).unwrap();
    decoded.verify_double_links();
    assert_eq!(decoded.to_string(), "(1) -> (2) -> (3)");
}

#[test]
fn test_binary_round_trip() {
    let list: DoublyLinkedList<i64> = [-1, 0, i64::MAX].into_iter().collect();
    let mut bytes = Vec::new();
    list.encode_binary(&mut bytes).unwrap();

    let mut decoded = DoublyLinkedList::<i64>::new();
    assert_eq!(decoded.decode_binary(&mut bytes.as_slice()).unwrap(), 3);
    decoded.verify_double_links();
    assert_eq!(decoded, list);
    assert_eq!(decoded.back(), Some(&i64::MAX));
}

#[test]
fn test_truncated_binary() {
    let list: DoublyLinkedList<u32> = [1, 2, 3].into_iter().collect();
    let mut bytes = Vec::new();
    list.encode_binary(&mut bytes).unwrap();
    bytes.pop();

    let mut decoded = DoublyLinkedList::<u32>::new();
    assert_eq!(decoded.decode_binary(&mut bytes.as_slice()).unwrap(), 2);
    assert_eq!(
        decoded.iter().copied().collect::<Vec<_>>(),
        [1, 2],
        "A short final record should be dropped rather than decoded."
    );
}

#[test]
fn test_empty() {
    let list = DoublyLinkedList::<u8>::new();
    assert_eq!(list.encode_text(), "");
    assert_eq!(list.to_string(), "The list is empty.");
}
