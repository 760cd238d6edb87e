use std::env;
use std::path::PathBuf;

use serial_collections::codec::{BinaryCodec, TextCodec};
use serial_collections::collections::adapters::{Queue, Stack};
use serial_collections::collections::hash::HashTable;
use serial_collections::collections::linked::{DoublyLinkedList, LinkedList};
use serial_collections::collections::tree::CompleteBinaryTree;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = env::temp_dir();
    info!(dir = %dir.display(), "writing binary demo files");

    println!("\n[LinkedList]\n");
    demo_linked_list(dir.join("binary_data_list.bin"));

    println!("\n[DoublyLinkedList]\n");
    demo_doubly_linked_list(dir.join("binary_data_doubly.bin"));

    println!("\n[Stack]\n");
    demo_stack(dir.join("binary_data_stack.bin"));

    println!("\n[Queue]\n");
    demo_queue(dir.join("binary_data_queue.bin"));

    println!("\n[HashTable]\n");
    demo_hash_table(dir.join("binary_data_table.bin"));

    println!("\n[CompleteBinaryTree]\n");
    demo_tree(dir.join("binary_data_tree.bin"));
}

fn demo_linked_list(path: PathBuf) {
    let list: LinkedList<i32> = (1..=3).collect();

    let text = list.encode_text();
    println!("Text Serialization: {text}");

    let mut decoded = LinkedList::<i32>::new();
    decoded.deserialize_text(&text);
    println!("After Text Deserialization: {decoded}");

    list.serialize_binary(&path);
    let mut decoded = LinkedList::<i32>::new();
    decoded.deserialize_binary(&path);
    println!("After Binary Deserialization: {decoded}");
}

fn demo_doubly_linked_list(path: PathBuf) {
    let list: DoublyLinkedList<f64> = [0.5, 1.5, 2.5].into_iter().collect();

    let text = list.encode_text();
    println!("Text Serialization: {text}");

    let mut decoded = DoublyLinkedList::<f64>::new();
    decoded.deserialize_text(&text);
    println!("After Text Deserialization: {decoded}");

    list.serialize_binary(&path);
    let mut decoded = DoublyLinkedList::<f64>::new();
    decoded.deserialize_binary(&path);
    println!("After Binary Deserialization: {decoded}");
    println!(
        "Backwards: {:?}",
        decoded.iter().rev().collect::<Vec<_>>()
    );
}

fn demo_stack(path: PathBuf) {
    let mut stack = Stack::<i32>::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    let text = stack.encode_text();
    println!("Text Serialization: {text}");

    stack.deserialize_text(&text);
    println!("After Text Deserialization: {stack}");

    stack.serialize_binary(&path);
    let mut decoded = Stack::<i32>::new();
    decoded.deserialize_binary(&path);
    println!("After Binary Deserialization: {decoded}");
}

fn demo_queue(path: PathBuf) {
    let mut queue = Queue::<i32>::new();
    queue.push(1);
    queue.push(2);
    queue.push(3);

    let text = queue.encode_text();
    println!("Text Serialization: {text}");

    queue.deserialize_text(&text);
    println!("After Text Deserialization: {queue}");

    queue.serialize_binary(&path);
    let mut decoded = Queue::<i32>::new();
    decoded.deserialize_binary(&path);
    println!("After Binary Deserialization: {decoded}");
}

fn demo_hash_table(path: PathBuf) {
    let mut table = HashTable::<String, i32>::new();
    // A fresh table has room for both.
    let _ = table.insert("one".to_owned(), 1);
    let _ = table.insert("two".to_owned(), 2);

    let text = table.encode_text();
    println!("Text Serialization: {text}");

    let mut decoded = HashTable::<String, i32>::new();
    decoded.deserialize_text(&text);
    println!("After Text Deserialization: {decoded}");
    println!("one: {:?}", decoded.get("one"));
    println!("two: {:?}", decoded.get("two"));

    // Strings have no fixed width, so the binary encoding is shown with integer keys.
    let numbered: HashTable<u32, i32> = {
        let mut numbered = HashTable::new();
        for (key, value) in [(1, 10), (2, 20)] {
            let _ = numbered.insert(key, value);
        }
        numbered
    };

    numbered.serialize_binary(&path);
    let mut decoded = HashTable::<u32, i32>::new();
    decoded.deserialize_binary(&path);
    println!("After Binary Deserialization: {decoded}");
    println!("1: {:?}", decoded.get(&1));
    println!("2: {:?}", decoded.get(&2));
}

fn demo_tree(path: PathBuf) {
    let mut tree = CompleteBinaryTree::<i32>::new();
    for i in 1..=5 {
        tree.insert(i);
    }

    println!("Breadth First Traversal: {tree}");

    let text = tree.encode_text();
    println!("Text Serialization: {text}");

    let mut decoded = CompleteBinaryTree::<i32>::new();
    decoded.deserialize_text(&text);
    println!("After Text Deserialization: {decoded}");

    tree.serialize_binary(&path);
    let mut decoded = CompleteBinaryTree::<i32>::new();
    decoded.deserialize_binary(&path);
    println!("After Binary Deserialization: {decoded}");
}
