//! Error types for slot cursor operations.

use std::fmt;

/// Result type for slot cursor operations.
pub type SlotResult<T> = Result<T, SlotError>;

/// Errors that can occur while writing or reading slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Attempted to read past the end of the region.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A decoded UTF-16 payload contained an unpaired surrogate or a
    /// non-character code unit.
    InvalidUtf16 {
        /// Index of the offending code unit within the string.
        offset: usize,
    },

    /// Growing the write region would exceed [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    CapacityExceeded {
        /// Capacity the growth step asked for.
        requested: usize,
        /// Maximum permitted capacity.
        max: usize,
    },

    /// The allocator refused to grow the write region.
    AllocationFailed {
        /// Capacity the growth step asked for.
        requested: usize,
    },

    /// A length does not fit the `u32` count prefix.
    LengthOverflow {
        /// The offending length.
        length: usize,
    },
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::InvalidUtf16 { offset } => {
                write!(f, "invalid UTF-16 code unit at offset {offset}")
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "requested capacity {requested} bytes exceeds maximum of {max} bytes"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "out of memory growing buffer to {requested} bytes")
            }
            Self::LengthOverflow { length } => {
                write!(f, "length {length} does not fit in a u32 count")
            }
        }
    }
}

impl std::error::Error for SlotError {}

impl SlotError {
    /// Returns `true` for the resource exhaustion errors raised on the encode path.
    #[must_use]
    pub const fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::AllocationFailed { .. }
        )
    }
}
