use crate::collections::arena::Link;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}
