//! Slot reader with bounded operations.

use crate::error::{SlotError, SlotResult};
use crate::primitive::{read_swapped, Primitive};
use crate::utf16::first_invalid_unit;
use crate::{round8, SLOT_SIZE};

/// A slot reader for decoding aligned binary data.
///
/// All read operations are bounds-checked and return errors on failure. A
/// failed read leaves the position where it was before the call. The reader
/// never panics on malformed input.
#[derive(Debug, Clone)]
pub struct SlotReader<'a> {
    data: &'a [u8],
    pos: usize,
    swap: bool,
    validate: bool,
}

impl<'a> SlotReader<'a> {
    /// Creates a new `SlotReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            swap: false,
            validate: false,
        }
    }

    /// Sets whether multi-byte scalars are byte-reversed on read.
    #[must_use]
    pub const fn with_swap(mut self, swap: bool) -> Self {
        self.swap = swap;
        self
    }

    /// Sets whether decoded strings are checked for UTF-16 validity.
    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Returns `true` if multi-byte scalars are byte-reversed on read.
    #[must_use]
    pub const fn swaps(&self) -> bool {
        self.swap
    }

    /// Returns `true` if decoded strings are validated.
    #[must_use]
    pub const fn validates(&self) -> bool {
        self.validate
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` while unread bytes remain.
    #[must_use]
    pub const fn more(&self) -> bool {
        self.pos != self.data.len()
    }

    /// Moves the read position back to the start of the region.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Reads a scalar from the next slot.
    pub fn get<T: Primitive>(&mut self) -> SlotResult<T> {
        self.ensure_bytes(SLOT_SIZE)?;
        let value = read_swapped(&self.data[self.pos..], self.swap);
        self.pos += SLOT_SIZE;
        Ok(value)
    }

    /// Reads a boolean slot.
    pub fn get_bool(&mut self) -> SlotResult<bool> {
        self.get()
    }

    /// Reads a `u8` slot.
    pub fn get_u8(&mut self) -> SlotResult<u8> {
        self.get()
    }

    /// Reads an `i8` slot.
    pub fn get_i8(&mut self) -> SlotResult<i8> {
        self.get()
    }

    /// Reads a `u16` slot.
    pub fn get_u16(&mut self) -> SlotResult<u16> {
        self.get()
    }

    /// Reads an `i16` slot.
    pub fn get_i16(&mut self) -> SlotResult<i16> {
        self.get()
    }

    /// Reads a `u32` slot.
    pub fn get_u32(&mut self) -> SlotResult<u32> {
        self.get()
    }

    /// Reads an `i32` slot.
    pub fn get_i32(&mut self) -> SlotResult<i32> {
        self.get()
    }

    /// Reads a `u64` slot.
    pub fn get_u64(&mut self) -> SlotResult<u64> {
        self.get()
    }

    /// Reads an `i64` slot.
    pub fn get_i64(&mut self) -> SlotResult<i64> {
        self.get()
    }

    /// Reads an `f32` slot.
    pub fn get_f32(&mut self) -> SlotResult<f32> {
        self.get()
    }

    /// Reads an `f64` slot.
    pub fn get_f64(&mut self) -> SlotResult<f64> {
        self.get()
    }

    /// Reads `len` raw bytes and skips the padding up to the next slot boundary.
    pub fn get_bytes(&mut self, len: usize) -> SlotResult<&'a [u8]> {
        let padded = checked_round8(len).ok_or(SlotError::UnexpectedEof {
            requested: len,
            available: self.remaining(),
        })?;
        self.ensure_bytes(padded)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += padded;
        Ok(bytes)
    }

    /// Reads a count slot followed by packed elements.
    pub fn get_array<T: Primitive>(&mut self) -> SlotResult<Vec<T>> {
        let start = self.pos;
        let result = self.get_array_inner();
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    /// Reads a UTF-16 string: a code unit count then the units.
    ///
    /// With validation enabled, rejects unpaired surrogates and non-characters.
    pub fn get_string(&mut self) -> SlotResult<Vec<u16>> {
        let start = self.pos;
        let units = self.get_array::<u16>()?;
        if self.validate {
            if let Some(offset) = first_invalid_unit(&units) {
                self.pos = start;
                return Err(SlotError::InvalidUtf16 { offset });
            }
        }
        Ok(units)
    }

    fn get_array_inner<T: Primitive>(&mut self) -> SlotResult<Vec<T>> {
        let count = self.get_u32()? as usize;
        let byte_len = count
            .checked_mul(T::WIDTH)
            .and_then(checked_round8)
            .ok_or(SlotError::UnexpectedEof {
                requested: usize::MAX,
                available: self.remaining(),
            })?;
        self.ensure_bytes(byte_len)?;

        let payload = &self.data[self.pos..self.pos + count * T::WIDTH];
        let values = payload
            .chunks_exact(T::WIDTH)
            .map(|chunk| read_swapped(chunk, self.swap))
            .collect();
        self.pos += byte_len;
        Ok(values)
    }

    fn ensure_bytes(&self, bytes: usize) -> SlotResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(SlotError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }
}

fn checked_round8(n: usize) -> Option<usize> {
    n.checked_add(7).map(|_| round8(n))
}
