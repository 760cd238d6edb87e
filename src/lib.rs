//! A handful of classic collections, each paired with a plain text encoding and a raw binary
//! encoding that can rebuild it.
//!
//! # Purpose
//! The collections are the usual suspects: a singly and a doubly linked list, a stack and a queue
//! built on the singly linked list, a fixed-capacity hash table with linear probing and a binary
//! tree that is filled level by level. None of them are meant to compete with [`std`]; they're
//! here to have something with an interesting shape to serialize.
//!
//! # Method
//! Serialization is split into two halves:
//! - A traversal, which belongs to the collection and decides which records are written and in
//!   what order.
//! - A codec, which decides how each record is written. See [`codec`] for both encodings.
//!
//! Deserializing replays the records through the collection's own insertion method, so the
//! result depends on how the collection inserts. A [`Queue`](collections::adapters::Queue) comes
//! back as it was, while a [`Stack`](collections::adapters::Stack) comes back reversed.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch with small structs that implement
//! [`Error`](std::error::Error), see [`CodecError`](codec::CodecError). Each encoding has a strict
//! API which returns these errors and a permissive API which logs them through [`tracing`] and
//! carries on, for callers who'd rather not handle an error every time they save a collection.
//!
//! Lookups that can miss return an [`Option`] rather than a default value.
//!
//! # Dependencies
//! This crate depends on some derive macros because they remove the need for some very
//! repetitive programming, and on `tracing` for diagnostics. The demo binary installs a
//! `tracing-subscriber` formatter which reads its filter from `RUST_LOG`.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod codec;
pub mod collections;

pub(crate) mod util;
