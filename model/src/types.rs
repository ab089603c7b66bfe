//! The CIM type enumeration and its wire tags.

use std::fmt;

/// One of the seventeen CIM types.
///
/// The discriminant is the `u32` type tag carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum CimType {
    Boolean = 0,
    Uint8 = 1,
    Sint8 = 2,
    Uint16 = 3,
    Sint16 = 4,
    Uint32 = 5,
    Sint32 = 6,
    Uint64 = 7,
    Sint64 = 8,
    Real32 = 9,
    Real64 = 10,
    Char16 = 11,
    String = 12,
    DateTime = 13,
    Reference = 14,
    Object = 15,
    Instance = 16,
}

impl CimType {
    /// Every type in tag order.
    pub const ALL: [Self; 17] = [
        Self::Boolean,
        Self::Uint8,
        Self::Sint8,
        Self::Uint16,
        Self::Sint16,
        Self::Uint32,
        Self::Sint32,
        Self::Uint64,
        Self::Sint64,
        Self::Real32,
        Self::Real64,
        Self::Char16,
        Self::String,
        Self::DateTime,
        Self::Reference,
        Self::Object,
        Self::Instance,
    ];

    /// Maps a wire tag to a type; `None` for unknown tags.
    #[must_use]
    pub const fn from_tag(tag: u32) -> Option<Self> {
        if tag < Self::ALL.len() as u32 {
            Some(Self::ALL[tag as usize])
        } else {
            None
        }
    }

    /// Returns the wire tag.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Returns the MOF keyword for the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Uint8 => "uint8",
            Self::Sint8 => "sint8",
            Self::Uint16 => "uint16",
            Self::Sint16 => "sint16",
            Self::Uint32 => "uint32",
            Self::Sint32 => "sint32",
            Self::Uint64 => "uint64",
            Self::Sint64 => "sint64",
            Self::Real32 => "real32",
            Self::Real64 => "real64",
            Self::Char16 => "char16",
            Self::String => "string",
            Self::DateTime => "datetime",
            Self::Reference => "reference",
            Self::Object => "object",
            Self::Instance => "instance",
        }
    }
}

impl fmt::Display for CimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
