//! Qualifiers, qualifier declarations and qualifier lists.

use crate::name::Name;
use crate::value::CimValue;

/// Qualifier flavor bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Flavor(u32);

impl Flavor {
    pub const OVERRIDABLE: u32 = 1 << 0;
    pub const TOSUBCLASS: u32 = 1 << 1;
    pub const TOINSTANCE: u32 = 1 << 2;
    pub const TRANSLATABLE: u32 = 1 << 3;
    pub const DISABLEOVERRIDE: u32 = 1 << 4;
    pub const RESTRICTED: u32 = 1 << 5;

    /// Default flavor of a qualifier declaration.
    pub const DEFAULTS: Self = Self(Self::OVERRIDABLE | Self::TOSUBCLASS);

    /// Wraps raw bits. Unknown bits are kept as-is.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, bit: u32) -> bool {
        self.0 & bit == bit
    }
}

/// Qualifier declaration scope bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Scope(u32);

impl Scope {
    pub const CLASS: u32 = 1 << 0;
    pub const ASSOCIATION: u32 = 1 << 1;
    pub const INDICATION: u32 = 1 << 2;
    pub const PROPERTY: u32 = 1 << 3;
    pub const REFERENCE: u32 = 1 << 4;
    pub const METHOD: u32 = 1 << 5;
    pub const PARAMETER: u32 = 1 << 6;
    pub const ANY: u32 = 0x7F;

    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, bit: u32) -> bool {
        self.0 & bit == bit
    }
}

/// A qualifier attached to a class, property, method or parameter.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Qualifier {
    pub name: Name,
    pub value: CimValue,
    pub flavor: Flavor,
    pub propagated: bool,
}

impl Qualifier {
    #[must_use]
    pub fn new(name: impl Into<Name>, value: CimValue) -> Self {
        Self {
            name: name.into(),
            value,
            flavor: Flavor::DEFAULTS,
            propagated: false,
        }
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    #[must_use]
    pub fn with_propagated(mut self, propagated: bool) -> Self {
        self.propagated = propagated;
        self
    }
}

/// A qualifier type declaration.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QualifierDecl {
    pub name: Name,
    /// Default value; its type is the declared type.
    pub value: CimValue,
    pub scope: Scope,
    pub flavor: Flavor,
    /// Fixed array size, zero for variable-length or scalar.
    pub array_size: u32,
}

impl QualifierDecl {
    #[must_use]
    pub fn new(name: impl Into<Name>, value: CimValue, scope: Scope) -> Self {
        Self {
            name: name.into(),
            value,
            scope,
            flavor: Flavor::DEFAULTS,
            array_size: 0,
        }
    }
}

/// Ordered list of qualifiers.
///
/// Names are expected to be unique, but decoded lists are taken as they come.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct QualifierList(Vec<Qualifier>);

impl QualifierList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Qualifier> {
        self.0.iter()
    }

    /// Appends a qualifier.
    pub fn push(&mut self, qualifier: Qualifier) {
        self.0.push(qualifier);
    }

    /// Finds a qualifier by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &Name) -> Option<&Qualifier> {
        self.0.iter().find(|q| q.name.eq_ignore_case(name))
    }
}

impl From<Vec<Qualifier>> for QualifierList {
    fn from(qualifiers: Vec<Qualifier>) -> Self {
        Self(qualifiers)
    }
}

impl FromIterator<Qualifier> for QualifierList {
    fn from_iter<I: IntoIterator<Item = Qualifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QualifierList {
    type Item = &'a Qualifier;
    type IntoIter = std::slice::Iter<'a, Qualifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        let list: QualifierList = vec![
            Qualifier::new("Key", CimValue::Boolean(true)),
            Qualifier::new("Description", CimValue::from("text")),
        ]
        .into();
        assert_eq!(list.len(), 2);
        let key = list.find(&Name::new("KEY")).unwrap();
        assert_eq!(key.value, CimValue::Boolean(true));
        assert!(list.find(&Name::new("Missing")).is_none());
    }

    #[test]
    fn flavor_bits() {
        let flavor = Flavor::from_raw(Flavor::TOSUBCLASS | Flavor::TRANSLATABLE);
        assert!(flavor.contains(Flavor::TOSUBCLASS));
        assert!(!flavor.contains(Flavor::OVERRIDABLE));
        assert!(Flavor::DEFAULTS.contains(Flavor::OVERRIDABLE));
    }

    #[test]
    fn scope_any_covers_all() {
        let any = Scope::from_raw(Scope::ANY);
        for bit in [
            Scope::CLASS,
            Scope::ASSOCIATION,
            Scope::INDICATION,
            Scope::PROPERTY,
            Scope::REFERENCE,
            Scope::METHOD,
            Scope::PARAMETER,
        ] {
            assert!(any.contains(bit));
        }
    }
}
