//! Flags words that gate optional fields.

use crate::error::{FlagsKind, WireError, WireResult};

/// Flags word written after a value marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueFlags(u32);

impl ValueFlags {
    /// The value is null; no payload follows the type tag.
    pub const IS_NULL: u32 = 1 << 0;

    /// The value is an array.
    pub const IS_ARRAY: u32 = 1 << 1;

    /// Reserved bits mask (must be zero).
    const RESERVED_MASK: u32 = !0b11;

    /// Creates flags from their two conditions.
    #[must_use]
    pub const fn new(is_null: bool, is_array: bool) -> Self {
        let mut raw = 0;
        if is_null {
            raw |= Self::IS_NULL;
        }
        if is_array {
            raw |= Self::IS_ARRAY;
        }
        Self(raw)
    }

    /// Validates a raw flags word read from the wire.
    pub const fn from_raw(raw: u32) -> WireResult<Self> {
        if raw & Self::RESERVED_MASK != 0 {
            return Err(WireError::InvalidFlags {
                kind: FlagsKind::Value,
                raw,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if the null bit is set.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 & Self::IS_NULL != 0
    }

    /// Returns `true` if the array bit is set.
    #[must_use]
    pub const fn is_array(self) -> bool {
        self.0 & Self::IS_ARRAY != 0
    }
}

/// Flags word written after a property marker.
///
/// Each bit gates one trailing optional field, in this order: array size,
/// reference class name, class origin, qualifier list. The propagated bit
/// carries its value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyFlags(u32);

impl PropertyFlags {
    /// An array size follows.
    pub const HAS_ARRAY_SIZE: u32 = 1 << 0;
    /// A reference class name follows.
    pub const HAS_REFERENCE_CLASS: u32 = 1 << 1;
    /// A class origin follows.
    pub const HAS_CLASS_ORIGIN: u32 = 1 << 2;
    /// The property is propagated.
    pub const IS_PROPAGATED: u32 = 1 << 3;
    /// A qualifier list follows.
    pub const HAS_QUALIFIERS: u32 = 1 << 4;

    const RESERVED_MASK: u32 = !0b1_1111;

    /// Creates empty flags.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Validates a raw flags word read from the wire.
    pub const fn from_raw(raw: u32) -> WireResult<Self> {
        if raw & Self::RESERVED_MASK != 0 {
            return Err(WireError::InvalidFlags {
                kind: FlagsKind::Property,
                raw,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Sets `bit` when `condition` holds.
    #[must_use]
    pub const fn with(self, bit: u32, condition: bool) -> Self {
        if condition {
            Self(self.0 | bit)
        } else {
            self
        }
    }

    /// Returns `true` if every bit in `bit` is set.
    #[must_use]
    pub const fn contains(self, bit: u32) -> bool {
        self.0 & bit == bit
    }

    #[must_use]
    pub const fn has_array_size(self) -> bool {
        self.contains(Self::HAS_ARRAY_SIZE)
    }

    #[must_use]
    pub const fn has_reference_class(self) -> bool {
        self.contains(Self::HAS_REFERENCE_CLASS)
    }

    #[must_use]
    pub const fn has_class_origin(self) -> bool {
        self.contains(Self::HAS_CLASS_ORIGIN)
    }

    #[must_use]
    pub const fn is_propagated(self) -> bool {
        self.contains(Self::IS_PROPAGATED)
    }

    #[must_use]
    pub const fn has_qualifiers(self) -> bool {
        self.contains(Self::HAS_QUALIFIERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_flags_bits() {
        assert_eq!(ValueFlags::new(false, false).raw(), 0);
        assert_eq!(ValueFlags::new(true, false).raw(), 0b01);
        assert_eq!(ValueFlags::new(false, true).raw(), 0b10);
        let both = ValueFlags::new(true, true);
        assert!(both.is_null());
        assert!(both.is_array());
    }

    #[test]
    fn value_flags_reserved_rejected() {
        assert!(ValueFlags::from_raw(0b11).is_ok());
        let err = ValueFlags::from_raw(0b100).unwrap_err();
        assert_eq!(
            err,
            WireError::InvalidFlags {
                kind: FlagsKind::Value,
                raw: 0b100
            }
        );
    }

    #[test]
    fn property_flags_builder() {
        let flags = PropertyFlags::empty()
            .with(PropertyFlags::HAS_ARRAY_SIZE, true)
            .with(PropertyFlags::HAS_REFERENCE_CLASS, false)
            .with(PropertyFlags::HAS_QUALIFIERS, true);
        assert!(flags.has_array_size());
        assert!(!flags.has_reference_class());
        assert!(!flags.has_class_origin());
        assert!(!flags.is_propagated());
        assert!(flags.has_qualifiers());
        assert_eq!(flags.raw(), 0b1_0001);
    }

    #[test]
    fn property_flags_reserved_rejected() {
        assert!(PropertyFlags::from_raw(0b1_1111).is_ok());
        assert!(PropertyFlags::from_raw(0b10_0000).is_err());
        assert!(PropertyFlags::from_raw(u32::MAX).is_err());
    }

    #[test]
    fn flags_default_is_empty() {
        assert_eq!(ValueFlags::default().raw(), 0);
        assert_eq!(PropertyFlags::default(), PropertyFlags::empty());
    }
}
