//! CIM names, namespace names and their legality rules.

use std::fmt;

use crate::error::{ModelError, ModelResult};
use crate::hash::name_tag;
use crate::string::CimString;

const SLASH: u16 = b'/' as u16;
const UNDERSCORE: u16 = b'_' as u16;

/// A CIM element name (class, property, qualifier, method, parameter).
///
/// The empty name is the null name and stands for an absent optional name.
#[derive(Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Name(CimString);

impl Name {
    /// Creates the null (empty) name.
    #[must_use]
    pub const fn null() -> Self {
        Self(CimString::new())
    }

    /// Creates a name without checking legality.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(CimString::from(name))
    }

    /// Creates a name, rejecting illegal non-empty names.
    pub fn try_new(name: &str) -> ModelResult<Self> {
        let candidate = Self::new(name);
        if !candidate.is_null() && !candidate.is_legal() {
            return Err(ModelError::IllegalName {
                name: name.to_owned(),
            });
        }
        Ok(candidate)
    }

    /// Wraps a decoded string without checking legality.
    #[must_use]
    pub const fn from_cim_string(value: CimString) -> Self {
        Self(value)
    }

    /// Returns `true` for the null name.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the name satisfies [`is_legal_name`].
    #[must_use]
    pub fn is_legal(&self) -> bool {
        is_legal_name(self.0.units())
    }

    /// Returns the underlying string.
    #[must_use]
    pub const fn as_cim_string(&self) -> &CimString {
        &self.0
    }

    /// Returns the code units.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        self.0.units()
    }

    /// Compares names the way CIM does, ignoring ASCII case.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Returns the case-insensitive lookup tag for this name.
    #[must_use]
    pub fn tag(&self) -> u32 {
        name_tag(self.0.units())
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A CIM namespace name such as `root/cimv2`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NamespaceName(CimString);

impl NamespaceName {
    /// Creates the null (empty) namespace.
    #[must_use]
    pub const fn null() -> Self {
        Self(CimString::new())
    }

    /// Creates a namespace name without checking legality.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(CimString::from(name))
    }

    /// Creates a namespace name, rejecting illegal non-empty names.
    pub fn try_new(name: &str) -> ModelResult<Self> {
        let candidate = Self::new(name);
        if !candidate.is_null() && !is_legal_namespace_name(candidate.units()) {
            return Err(ModelError::IllegalNamespace {
                name: name.to_owned(),
            });
        }
        Ok(candidate)
    }

    /// Wraps a decoded string without checking legality.
    #[must_use]
    pub const fn from_cim_string(value: CimString) -> Self {
        Self(value)
    }

    /// Returns `true` for the null namespace.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying string.
    #[must_use]
    pub const fn as_cim_string(&self) -> &CimString {
        &self.0
    }

    /// Returns the code units.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        self.0.units()
    }
}

impl From<&str> for NamespaceName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Returns `true` if `units` is a legal CIM name.
///
/// The first unit is an ASCII letter, `_`, or in `0x80..=0xFFEF`; the rest may
/// also be ASCII digits. The empty sequence is not a legal name.
#[must_use]
pub fn is_legal_name(units: &[u16]) -> bool {
    match units.split_first() {
        Some((&first, rest)) => is_name_start(first) && rest.iter().all(|&unit| is_name_unit(unit)),
        None => false,
    }
}

/// Returns `true` if `units` is a legal namespace name: one or more legal
/// name components separated by single `/`, with an optional leading `/`.
#[must_use]
pub fn is_legal_namespace_name(units: &[u16]) -> bool {
    let body = match units.split_first() {
        Some((&SLASH, rest)) => rest,
        _ => units,
    };
    !body.is_empty() && body.split(|&unit| unit == SLASH).all(is_legal_name)
}

fn is_name_start(unit: u16) -> bool {
    unit == UNDERSCORE
        || (0x80..=0xFFEF).contains(&unit)
        || (unit < 0x80 && (unit as u8).is_ascii_alphabetic())
}

fn is_name_unit(unit: u16) -> bool {
    is_name_start(unit) || (unit < 0x80 && (unit as u8).is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn legal_names() {
        for name in ["CIM_Foo", "_x", "a1", "Name", "Größe"] {
            assert!(is_legal_name(&units(name)), "{name} should be legal");
        }
    }

    #[test]
    fn illegal_names() {
        for name in ["", "1abc", "a b", "a-b", "a/b", "a.b"] {
            assert!(!is_legal_name(&units(name)), "{name} should be illegal");
        }
        assert!(!is_legal_name(&[0xFFF0]));
    }

    #[test]
    fn legal_namespaces() {
        for ns in ["root", "root/cimv2", "/root/cimv2", "root/PG_InterOp"] {
            assert!(is_legal_namespace_name(&units(ns)), "{ns} should be legal");
        }
    }

    #[test]
    fn illegal_namespaces() {
        for ns in ["", "/", "root//cimv2", "root/", "//root", "root/9x"] {
            assert!(
                !is_legal_namespace_name(&units(ns)),
                "{ns} should be illegal"
            );
        }
    }

    #[test]
    fn try_new_checks_legality() {
        assert!(Name::try_new("CIM_Foo").is_ok());
        assert!(Name::try_new("").unwrap().is_null());
        assert_eq!(
            Name::try_new("no way").unwrap_err(),
            ModelError::IllegalName {
                name: "no way".to_owned()
            }
        );
        assert!(NamespaceName::try_new("root/cimv2").is_ok());
        assert!(NamespaceName::try_new("root//x").is_err());
    }

    #[test]
    fn case_insensitive_compare_and_tag() {
        let a = Name::new("InstanceID");
        let b = Name::new("instanceid");
        assert!(a.eq_ignore_case(&b));
        assert_eq!(a.tag(), b.tag());
        assert_ne!(a, b);
    }

    #[test]
    fn null_name() {
        assert!(Name::null().is_null());
        assert!(Name::default().is_null());
        assert!(!Name::new("x").is_null());
        assert!(NamespaceName::null().is_null());
    }
}
