//! Linked collection types: the singly linked [`LinkedList`] and the [`DoublyLinkedList`].
//!
//! Both keep their nodes in an arena and link them by index, so neither contains any unsafe code.

pub mod doubly;
pub mod list;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use list::LinkedList;
