use crate::collections::arena::Link;

pub(crate) struct Node<T> {
    pub value: T,
    pub left: Link,
    pub right: Link,
}

impl<T> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}
