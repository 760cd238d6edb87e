//! [`Stack`] and [`Queue`], both restricting a singly linked
//! [`LinkedList`](crate::collections::linked::LinkedList) to one end for insertion.
//!
//! The two only differ in their native insertion method: a Stack pushes onto its front (the top)
//! while a Queue pushes onto its back (the rear). Both are traversed, and therefore encoded, from
//! the front. As a result a decoded Queue matches the original, while a decoded Stack is reversed.

mod codec;
mod queue;
mod stack;

pub use queue::*;
pub use stack::*;
