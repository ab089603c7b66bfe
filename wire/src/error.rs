//! Error types for wire framing operations.

use std::fmt;

use cursor::SlotError;

use crate::marker::Marker;

/// Result type for wire framing operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while reading or writing framing data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// Underlying slot read or write failed.
    Slot(SlotError),

    /// A magic marker did not match the expected constant.
    InvalidMarker { expected: Marker, found: u32 },

    /// A flags word had reserved bits set.
    InvalidFlags { kind: FlagsKind, raw: u32 },

    /// An object discriminator was neither `'I'` nor `'C'`.
    UnknownObjectKind { tag: u8 },

    /// The stream envelope did not start with the expected signature.
    InvalidHeader { found: [u8; 4] },

    /// Unsupported stream envelope version.
    UnsupportedVersion { found: u16 },

    /// Unknown byte order marker in the stream envelope.
    InvalidByteOrder { found: u8 },

    /// Unknown framing marker in the stream envelope.
    InvalidFraming { found: u8 },

    /// A presence sentinel was neither PRESENT nor ABSENT.
    InvalidPresence { found: u32 },
}

/// Which flags word failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagsKind {
    Value,
    Property,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(err) => write!(f, "slot error: {err}"),
            Self::InvalidMarker { expected, found } => {
                write!(
                    f,
                    "invalid {expected} marker: expected 0x{:08X}, found 0x{found:08X}",
                    expected.raw()
                )
            }
            Self::InvalidFlags { kind, raw } => {
                write!(f, "invalid {kind} flags: 0x{raw:08X}")
            }
            Self::UnknownObjectKind { tag } => {
                write!(f, "unknown object kind: 0x{tag:02X}")
            }
            Self::InvalidHeader { found } => {
                write!(f, "invalid stream signature: {found:02X?}")
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported stream version: {found}")
            }
            Self::InvalidByteOrder { found } => {
                write!(f, "invalid byte order marker: 0x{found:02X}")
            }
            Self::InvalidFraming { found } => {
                write!(f, "invalid framing marker: 0x{found:02X}")
            }
            Self::InvalidPresence { found } => {
                write!(f, "invalid presence sentinel: 0x{found:08X}")
            }
        }
    }
}

impl fmt::Display for FlagsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Value => "value",
            Self::Property => "property",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Slot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SlotError> for WireError {
    fn from(err: SlotError) -> Self {
        Self::Slot(err)
    }
}
