use std::fmt::{self, Debug, Display, Formatter};

/// Writes the wrapped string as-is when debug formatted, without quotes or escapes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug formats the items of a cloneable iterator as a list.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes `(a) -> (b) -> (c)`, or `empty` if there are no items.
pub fn write_chain<I>(f: &mut Formatter<'_>, items: I, empty: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut items = items.into_iter();

    match items.next() {
        None => write!(f, "{empty}"),
        Some(first) => {
            write!(f, "({first})")?;
            for item in items {
                write!(f, " -> ({item})")?;
            }
            Ok(())
        },
    }
}
