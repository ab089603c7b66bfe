//! Object discriminator and byte order.

use crate::error::{WireError, WireResult};

/// Discriminator written before an object payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectKind {
    Instance = b'I',
    Class = b'C',
}

impl ObjectKind {
    /// Parses a discriminator from a raw byte.
    pub const fn parse(tag: u8) -> WireResult<Self> {
        match tag {
            b'I' => Ok(Self::Instance),
            b'C' => Ok(Self::Class),
            _ => Err(WireError::UnknownObjectKind { tag }),
        }
    }

    /// Returns the raw discriminator byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Byte order of a producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Returns the byte order of this host.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Returns `true` if data produced in this order must be swapped here.
    #[must_use]
    pub const fn needs_swap(self) -> bool {
        !matches!(
            (self, Self::native()),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }

    /// Returns the opposite byte order.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}
