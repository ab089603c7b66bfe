//! UTF-16 strings as carried on the wire.

use std::fmt;

/// A CIM string: a sequence of UTF-16 code units.
///
/// The units are kept verbatim so that a decoder running without validation
/// can pass through sequences (such as unpaired surrogates) that Rust's
/// `String` cannot hold.
#[derive(Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CimString(Vec<u16>);

impl CimString {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps raw code units.
    #[must_use]
    pub const fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// Returns the code units.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.0
    }

    /// Consumes the string and returns its code units.
    #[must_use]
    pub fn into_units(self) -> Vec<u16> {
        self.0
    }

    /// Returns the number of code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts to a Rust string, replacing invalid sequences with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }

    /// Converts to a Rust string if the units are well-formed UTF-16.
    #[must_use]
    pub fn to_string_checked(&self) -> Option<String> {
        String::from_utf16(&self.0).ok()
    }

    /// Compares two strings, folding ASCII letters.
    #[must_use]
    pub fn eq_ignore_ascii_case(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(&a, &b)| fold_ascii(a) == fold_ascii(b))
    }
}

/// Upper-cases an ASCII letter code unit; other units are unchanged.
#[must_use]
pub(crate) const fn fold_ascii(unit: u16) -> u16 {
    if unit >= b'a' as u16 && unit <= b'z' as u16 {
        unit - 0x20
    } else {
        unit
    }
}

impl From<&str> for CimString {
    fn from(value: &str) -> Self {
        Self(value.encode_utf16().collect())
    }
}

impl From<String> for CimString {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<u16>> for CimString {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl PartialEq<str> for CimString {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for CimString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for CimString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for CimString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_string_checked() {
            Some(s) => write!(f, "{s:?}"),
            None => write!(f, "CimString({:04X?})", self.0),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CimString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_roundtrip() {
        let s = CimString::from("root/cimv2");
        assert_eq!(s.len(), 10);
        assert_eq!(s.to_string_checked().as_deref(), Some("root/cimv2"));
        assert_eq!(s, "root/cimv2");
    }

    #[test]
    fn unpaired_surrogate_is_kept() {
        let s = CimString::from_units(vec![0x41, 0xD800]);
        assert_eq!(s.units(), &[0x41, 0xD800]);
        assert!(s.to_string_checked().is_none());
        assert_eq!(s.to_string_lossy(), "A\u{FFFD}");
        assert!(format!("{s:?}").contains("D800"));
    }

    #[test]
    fn ascii_case_folding() {
        let a = CimString::from("CIM_Foo");
        let b = CimString::from("cim_FOO");
        assert!(a.eq_ignore_ascii_case(&b));
        assert_ne!(a, b);
        assert!(!a.eq_ignore_ascii_case(&CimString::from("CIM_Fo")));
    }

    #[test]
    fn empty_default() {
        assert!(CimString::default().is_empty());
        assert_eq!(CimString::new(), CimString::from(""));
    }
}
