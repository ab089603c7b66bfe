//! Fixed-width scalar kinds that fit in a slot.

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that can be stored in a slot or a packed array.
///
/// Implemented for `bool`, the 8/16/32/64-bit integers and the two float
/// widths. Values are written in native byte order; readers reverse the bytes
/// when the producer's order differs.
pub trait Primitive: Copy + sealed::Sealed {
    /// Natural width in bytes (1, 2, 4 or 8).
    const WIDTH: usize;

    /// Writes the native-order bytes of `self` into `out[..WIDTH]`.
    fn write_ne(self, out: &mut [u8]);

    /// Reads a value from the native-order bytes in `bytes[..WIDTH]`.
    fn read_ne(bytes: &[u8]) -> Self;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn write_ne(self, out: &mut [u8]) {
                    out[..Self::WIDTH].copy_from_slice(&self.to_ne_bytes());
                }

                fn read_ne(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::WIDTH]);
                    <$ty>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl sealed::Sealed for bool {}

impl Primitive for bool {
    const WIDTH: usize = 1;

    fn write_ne(self, out: &mut [u8]) {
        out[0] = u8::from(self);
    }

    fn read_ne(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

/// Reads a `T` from `bytes`, reversing its byte order first when `swap` is set.
pub(crate) fn read_swapped<T: Primitive>(bytes: &[u8], swap: bool) -> T {
    if swap && T::WIDTH > 1 {
        let mut raw = [0u8; 8];
        raw[..T::WIDTH].copy_from_slice(&bytes[..T::WIDTH]);
        raw[..T::WIDTH].reverse();
        T::read_ne(&raw)
    } else {
        T::read_ne(bytes)
    }
}
