//! Magic markers and the framing profile.

use std::fmt;

use cursor::{SlotReader, SlotWriter};

use crate::error::{WireError, WireResult};

/// Marker written before an object path.
pub const OBJECT_PATH_MAGIC: u32 = 0x9232_0710;
/// Marker written before a property.
pub const PROPERTY_MAGIC: u32 = 0xBFEA_A215;
/// Marker written before a typed value.
pub const VALUE_MAGIC: u32 = 0xE83E_360A;
/// Marker written before an instance.
pub const INSTANCE_MAGIC: u32 = 0xD6EF_2219;
/// Marker written before a class.
pub const CLASS_MAGIC: u32 = 0xA8D7_DE41;
/// Marker written before an object (instance or class).
pub const OBJECT_MAGIC: u32 = 0xA6C3_E2F1;
/// Envelope sentinel for a present optional value.
pub const PRESENT_MAGIC: u32 = 0xF55A_7330;
/// Envelope sentinel for an absent optional value.
pub const ABSENT_MAGIC: u32 = 0x77A0_A639;

/// Composite structures that are preceded by a magic marker when framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Marker {
    ObjectPath = OBJECT_PATH_MAGIC,
    Property = PROPERTY_MAGIC,
    Value = VALUE_MAGIC,
    Instance = INSTANCE_MAGIC,
    Class = CLASS_MAGIC,
    Object = OBJECT_MAGIC,
}

impl Marker {
    /// Returns the raw marker constant.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ObjectPath => "object path",
            Self::Property => "property",
            Self::Value => "value",
            Self::Instance => "instance",
            Self::Class => "class",
            Self::Object => "object",
        };
        write!(f, "{name}")
    }
}

/// Wire profile: whether composites carry magic markers.
///
/// Both sides of a stream must agree on the profile; a framed reader never
/// accepts unframed data or the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framing {
    /// Magic markers precede values, properties, paths, instances, classes and objects.
    #[default]
    Framed,
    /// No markers are written or read.
    Unframed,
}

impl Framing {
    /// Returns `true` if markers are written and checked.
    #[must_use]
    pub const fn is_framed(self) -> bool {
        matches!(self, Self::Framed)
    }

    /// Writes `marker` as a `u32` slot when framed.
    pub fn put_marker(self, writer: &mut SlotWriter, marker: Marker) -> WireResult<()> {
        if self.is_framed() {
            writer.put_u32(marker.raw())?;
        }
        Ok(())
    }

    /// Reads and checks `marker` when framed.
    ///
    /// On mismatch the reader is left after the marker slot; the enclosing
    /// decode is expected to abort.
    pub fn check_marker(self, reader: &mut SlotReader<'_>, marker: Marker) -> WireResult<()> {
        if !self.is_framed() {
            return Ok(());
        }
        let found = reader.get_u32()?;
        if found != marker.raw() {
            return Err(WireError::InvalidMarker {
                expected: marker,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_distinct() {
        let all = [
            Marker::ObjectPath,
            Marker::Property,
            Marker::Value,
            Marker::Instance,
            Marker::Class,
            Marker::Object,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.raw(), b.raw(), "{a} and {b} share a constant");
            }
            assert_ne!(a.raw(), PRESENT_MAGIC);
            assert_ne!(a.raw(), ABSENT_MAGIC);
        }
    }

    #[test]
    fn framed_marker_roundtrip() {
        let mut writer = SlotWriter::new();
        Framing::Framed
            .put_marker(&mut writer, Marker::Value)
            .unwrap();
        assert_eq!(writer.size(), 8);
        let bytes = writer.into_bytes();

        let mut reader = SlotReader::new(&bytes);
        Framing::Framed
            .check_marker(&mut reader, Marker::Value)
            .unwrap();
        assert!(!reader.more());
    }

    #[test]
    fn framed_marker_mismatch() {
        let mut writer = SlotWriter::new();
        Framing::Framed
            .put_marker(&mut writer, Marker::Class)
            .unwrap();
        let bytes = writer.into_bytes();

        let mut reader = SlotReader::new(&bytes);
        let err = Framing::Framed
            .check_marker(&mut reader, Marker::Instance)
            .unwrap_err();
        assert_eq!(
            err,
            WireError::InvalidMarker {
                expected: Marker::Instance,
                found: CLASS_MAGIC,
            }
        );
    }

    #[test]
    fn unframed_writes_nothing() {
        let mut writer = SlotWriter::new();
        Framing::Unframed
            .put_marker(&mut writer, Marker::Object)
            .unwrap();
        assert!(writer.is_empty());

        let mut reader = SlotReader::new(&[]);
        Framing::Unframed
            .check_marker(&mut reader, Marker::Object)
            .unwrap();
    }

    #[test]
    fn truncated_marker_is_slot_error() {
        let mut reader = SlotReader::new(&[0u8; 4]);
        let err = Framing::Framed
            .check_marker(&mut reader, Marker::Property)
            .unwrap_err();
        assert!(matches!(err, WireError::Slot(_)));
    }

    #[test]
    fn default_is_framed() {
        assert!(Framing::default().is_framed());
    }
}
