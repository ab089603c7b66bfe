//! Aligned slot cursor primitives for the cimbin codec.
//!
//! This crate provides [`SlotWriter`] and [`SlotReader`], the encode and decode
//! sides of the binary cursor. Every scalar occupies one 8-byte slot so that
//! any later typed access is naturally aligned; variable-length data is a
//! `u32` count followed by a payload padded to a multiple of 8 bytes.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Slots are copied, never reinterpreted in place.
//! - **Bounded operations** - All reads are bounds-checked; failed reads do not move.
//! - **No domain knowledge** - This crate knows nothing about CIM values.
//! - **Native order on write** - Readers swap when the producer's order differs.
//!
//! # Example
//!
//! ```
//! use cursor::{SlotReader, SlotWriter};
//!
//! let mut writer = SlotWriter::new();
//! writer.put_bool(true).unwrap();
//! writer.put_u32(42).unwrap();
//! writer.put_string(&[0x68, 0x69]).unwrap();
//!
//! let bytes = writer.into_bytes();
//! assert_eq!(bytes.len() % 8, 0);
//!
//! let mut reader = SlotReader::new(&bytes);
//! assert!(reader.get_bool().unwrap());
//! assert_eq!(reader.get_u32().unwrap(), 42);
//! assert_eq!(reader.get_string().unwrap(), vec![0x68, 0x69]);
//! ```

mod error;
mod primitive;
mod reader;
pub mod utf16;
mod writer;

pub use error::{SlotError, SlotResult};
pub use primitive::Primitive;
pub use reader::SlotReader;
pub use writer::SlotWriter;

/// Width in bytes of one scalar slot.
pub const SLOT_SIZE: usize = 8;

/// Smallest capacity a growing writer allocates.
pub const MIN_GROWTH: usize = 4096;

/// Largest capacity a growing writer may reach.
pub const MAX_CAPACITY: usize = 0x3FFF_FFFF;

/// Rounds `n` up to the next multiple of 8.
#[must_use]
pub const fn round8(n: usize) -> usize {
    (n + 7) & !7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = SlotWriter::new();
        let bytes = writer.into_bytes();
        assert!(bytes.is_empty());

        let reader = SlotReader::new(&bytes);
        assert!(!reader.more());
    }

    #[test]
    fn round8_values() {
        assert_eq!(round8(0), 0);
        assert_eq!(round8(1), 8);
        assert_eq!(round8(7), 8);
        assert_eq!(round8(8), 8);
        assert_eq!(round8(9), 16);
    }

    #[test]
    fn scalars_roundtrip() {
        let mut writer = SlotWriter::new();
        writer.put_bool(true).unwrap();
        writer.put_u8(0xAB).unwrap();
        writer.put_i8(-5).unwrap();
        writer.put_u16(0xABCD).unwrap();
        writer.put_i16(-300).unwrap();
        writer.put_u32(0x1234_5678).unwrap();
        writer.put_i32(-70_000).unwrap();
        writer.put_u64(u64::MAX).unwrap();
        writer.put_i64(i64::MIN).unwrap();
        writer.put_f32(1.25).unwrap();
        writer.put_f64(-2.5).unwrap();
        assert_eq!(writer.size(), 11 * SLOT_SIZE);
        let bytes = writer.into_bytes();

        let mut reader = SlotReader::new(&bytes);
        assert!(reader.get_bool().unwrap());
        assert_eq!(reader.get_u8().unwrap(), 0xAB);
        assert_eq!(reader.get_i8().unwrap(), -5);
        assert_eq!(reader.get_u16().unwrap(), 0xABCD);
        assert_eq!(reader.get_i16().unwrap(), -300);
        assert_eq!(reader.get_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.get_i32().unwrap(), -70_000);
        assert_eq!(reader.get_u64().unwrap(), u64::MAX);
        assert_eq!(reader.get_i64().unwrap(), i64::MIN);
        assert!((reader.get_f32().unwrap() - 1.25).abs() < f32::EPSILON);
        assert!((reader.get_f64().unwrap() + 2.5).abs() < f64::EPSILON);
        assert!(!reader.more());
    }

    #[test]
    fn doctest_example() {
        let mut writer = SlotWriter::new();
        writer.put_bool(true).unwrap();
        writer.put_u32(42).unwrap();

        let bytes = writer.into_bytes();

        let mut reader = SlotReader::new(&bytes);
        assert!(reader.get_bool().unwrap());
        assert_eq!(reader.get_u32().unwrap(), 42);
    }
}
