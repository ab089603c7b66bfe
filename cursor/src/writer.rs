//! Growing slot writer for the encode side.

use crate::error::{SlotError, SlotResult};
use crate::primitive::Primitive;
use crate::{round8, MAX_CAPACITY, MIN_GROWTH, SLOT_SIZE};

/// A slot writer that appends aligned scalars and spans to an owned region.
///
/// Every scalar occupies one 8-byte slot in native byte order. The region
/// grows by doubling (at least [`MIN_GROWTH`] bytes) and is handed to the
/// caller by [`into_bytes`](Self::into_bytes).
#[derive(Debug, Default)]
pub struct SlotWriter {
    /// Written bytes; the length is the write position.
    bytes: Vec<u8>,
    /// Logical capacity maintained by the growth policy.
    capacity: usize,
}

impl SlotWriter {
    /// Creates a new empty `SlotWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `SlotWriter` with pre-allocated capacity.
    ///
    /// The capacity is clamped to [`MAX_CAPACITY`].
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        let capacity = bytes.min(MAX_CAPACITY);
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the capacity reserved by the growth policy.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Releases the written region to the caller.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Ensures `additional` more bytes fit without another growth step.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::CapacityExceeded`] if the grown capacity would pass
    /// [`MAX_CAPACITY`], or [`SlotError::AllocationFailed`] if the allocator
    /// refuses.
    pub fn reserve(&mut self, additional: usize) -> SlotResult<()> {
        let used = self.bytes.len();
        if self.capacity - used >= additional {
            return Ok(());
        }

        let mut cap = self.capacity.saturating_mul(2).max(MIN_GROWTH);
        if additional > cap - used {
            cap = cap.saturating_add(additional);
        }
        if cap > MAX_CAPACITY {
            return Err(SlotError::CapacityExceeded {
                requested: cap,
                max: MAX_CAPACITY,
            });
        }

        self.bytes
            .try_reserve_exact(cap - used)
            .map_err(|_| SlotError::AllocationFailed { requested: cap })?;
        self.capacity = cap;
        Ok(())
    }

    /// Writes a scalar into the next slot.
    pub fn put<T: Primitive>(&mut self, value: T) -> SlotResult<()> {
        self.reserve(SLOT_SIZE)?;
        let mut slot = [0u8; SLOT_SIZE];
        value.write_ne(&mut slot);
        self.bytes.extend_from_slice(&slot);
        Ok(())
    }

    /// Writes a boolean slot.
    pub fn put_bool(&mut self, value: bool) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes a `u8` slot.
    pub fn put_u8(&mut self, value: u8) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes an `i8` slot.
    pub fn put_i8(&mut self, value: i8) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes a `u16` slot.
    pub fn put_u16(&mut self, value: u16) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes an `i16` slot.
    pub fn put_i16(&mut self, value: i16) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes a `u32` slot.
    pub fn put_u32(&mut self, value: u32) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes an `i32` slot.
    pub fn put_i32(&mut self, value: i32) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes a `u64` slot.
    pub fn put_u64(&mut self, value: u64) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes an `i64` slot.
    pub fn put_i64(&mut self, value: i64) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes an `f32` slot.
    pub fn put_f32(&mut self, value: f32) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes an `f64` slot.
    pub fn put_f64(&mut self, value: f64) -> SlotResult<()> {
        self.put(value)
    }

    /// Writes a count as a `u32` slot.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::LengthOverflow`] if `count` exceeds `u32::MAX`.
    pub fn put_count(&mut self, count: usize) -> SlotResult<()> {
        let count = u32::try_from(count).map_err(|_| SlotError::LengthOverflow { length: count })?;
        self.put_u32(count)
    }

    /// Writes raw bytes followed by zero padding up to the next slot boundary.
    ///
    /// No length prefix is written; the reader must know `data.len()`.
    pub fn put_bytes(&mut self, data: &[u8]) -> SlotResult<()> {
        let padded = round8(data.len());
        self.reserve(padded)?;
        self.bytes.extend_from_slice(data);
        self.bytes.resize(self.bytes.len() + (padded - data.len()), 0);
        Ok(())
    }

    /// Writes a count slot followed by `values` packed at their natural width.
    pub fn put_array<T: Primitive>(&mut self, values: &[T]) -> SlotResult<()> {
        let byte_len = values
            .len()
            .checked_mul(T::WIDTH)
            .ok_or(SlotError::LengthOverflow {
                length: values.len(),
            })?;
        let padded = round8(byte_len);
        self.reserve(SLOT_SIZE.saturating_add(padded))?;
        self.put_count(values.len())?;

        let start = self.bytes.len();
        self.bytes.resize(start + padded, 0);
        for (index, value) in values.iter().enumerate() {
            value.write_ne(&mut self.bytes[start + index * T::WIDTH..]);
        }
        Ok(())
    }

    /// Writes a UTF-16 string: a code unit count then the units, padded.
    pub fn put_string(&mut self, units: &[u16]) -> SlotResult<()> {
        self.put_array(units)
    }
}
