use std::fmt::Display;
use std::mem::size_of;
use std::str::FromStr;

/// A value that can be written as a single whitespace-free token and parsed back from it.
///
/// Blanket implemented for everything with a matching [`Display`] / [`FromStr`] pair. It is a logic
/// error for the displayed form to contain whitespace, as it would be split into several tokens.
pub trait TextElement: Display + FromStr {}

impl<T: Display + FromStr> TextElement for T {}

/// A value with a fixed-width binary representation.
///
/// The representation is the value's native memory layout, so encoded bytes are only portable
/// between hosts with the same endianness.
pub trait BinaryElement: Copy {
    /// The raw bytes of a value, always exactly [`WIDTH`](BinaryElement::WIDTH) long.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    const WIDTH: usize = size_of::<Self::Bytes>();

    fn to_bytes(self) -> Self::Bytes;

    fn from_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_binary_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BinaryElement for $ty {
                type Bytes = [u8; size_of::<$ty>()];

                fn to_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_binary_element!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);
