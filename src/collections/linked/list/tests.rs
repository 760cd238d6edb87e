#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::codec::{BinaryCodec, TextCodec};
use crate::util::alloc::CountedDrop;
use crate::util::log::count_warnings;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());

    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.back(), None, "Popping the last element should clear the tail as well.");

    list.push_back(4);
    assert_eq!(list.front(), list.back());
}

#[test]
fn test_indexing() {
    let mut list: LinkedList<_> = (10..15).collect();

    assert_eq!(*list.get(0), 10);
    assert_eq!(*list.get(4), 14);
    assert_eq!(list.try_get(5), None);

    *list.get_mut(2) = 100;
    assert_eq!(list.try_get(2), Some(&100));

    assert_panics!({
        let list: LinkedList<u8> = LinkedList::new();
        let _ = list.get(0);
    });
}

#[test]
fn test_text_round_trip() {
    let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    let text = list.encode_text();
    assert_eq!(text, "1 2 3 ");

    let mut decoded = LinkedList::<i32>::new();
    assert_eq!(decoded.decode_text(&text).unwrap(), 3);
    assert_eq!(decoded, list);
}

#[test]
fn test_binary_round_trip() {
    let list: LinkedList<u16> = [7, 300, 65535].into_iter().collect();
    let mut bytes = Vec::new();
    list.encode_binary(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 3 * size_of::<u16>(), "Records should have no delimiters.");

    let mut decoded = LinkedList::<u16>::new();
    decoded.decode_binary(&mut bytes.as_slice()).unwrap();
    assert_eq!(decoded, list);
}

#[test]
fn test_decode_augments() {
    let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
    list.decode_text("3 4").unwrap();

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3, 4],
        "Decoding should append to the existing elements rather than replacing them."
    );
}

#[test]
fn test_decode_stops_at_bad_token() {
    let mut list = LinkedList::<u8>::new();
    let error = list.decode_text("1 2 three 4").unwrap_err();

    assert!(error.is_parse());
    assert_eq!(list.len(), 2, "Tokens before the bad one should remain inserted.");
}

#[test]
fn test_empty() {
    let list = LinkedList::<u32>::new();
    assert_eq!(list.encode_text(), "");
    assert_eq!(list.to_string(), "The list is empty.");

    let mut bytes = Vec::new();
    list.encode_binary(&mut bytes).unwrap();
    assert!(bytes.is_empty());

    let mut decoded = LinkedList::<u32>::new();
    assert_eq!(decoded.decode_text("  ").unwrap(), 0);
    assert_eq!(decoded.decode_binary(&mut b"".as_slice()).unwrap(), 0);
    assert!(decoded.is_empty());
}

#[test]
fn test_display() {
    let list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list.to_string(), "(a) -> (b) -> (c)");
}

#[test]
fn test_drop_and_clear() {
    let counter = Rc::new(RefCell::new(0));

    let mut list = LinkedList::new();
    for _ in 0..4 {
        list.push_back(CountedDrop::new(&counter));
    }
    list.pop_front();
    assert_eq!(*counter.borrow(), 1);

    list.clear();
    assert_eq!(*counter.borrow(), 4, "Clearing should drop every element.");
    assert!(list.is_empty());

    list.push_front(CountedDrop::new(&counter));
    drop(list);
    assert_eq!(*counter.borrow(), 5);
}

#[test]
fn test_permissive_decode_counts_records_before_error() {
    let mut list = LinkedList::<i32>::new();

    let (count, warnings) = count_warnings(|| list.deserialize_text("1 2 x 4"));
    assert_eq!(count, 2, "The records before the bad token should be counted.");
    assert_eq!(warnings, 1);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);

    let replay = list.replay_text("5 y");
    assert!(!replay.is_complete());
    assert_eq!(replay.count, 1);
    assert!(replay.error.is_some_and(|error| error.is_parse()));

    let (count, warnings) = count_warnings(|| list.deserialize_text("6 7"));
    assert_eq!((count, warnings), (2, 0));
    assert_eq!(list.len(), 5);
}
