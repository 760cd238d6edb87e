pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`], but states that None can't happen because of an invariant
    /// held by the calling collection, rather than because of anything the caller passed in.
    ///
    /// No panics annotation is used so that it passes the clippy lint. If it ever panics, a
    /// collection has broken one of its own invariants.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("collection invariant violated"),
        }
    }
}
