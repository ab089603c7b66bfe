//! Objects (instance-or-class) and method parameter values.

use crate::class::Class;
use crate::instance::Instance;
use crate::name::Name;
use crate::path::ObjectPath;
use crate::string::CimString;
use crate::value::CimValue;

/// Either an instance or a class.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CimObject {
    #[default]
    Uninitialized,
    Instance(Instance),
    Class(Class),
}

impl CimObject {
    /// Returns `true` when there is no payload, including an uninitialized
    /// inner instance or class.
    #[must_use]
    pub const fn is_uninitialized(&self) -> bool {
        match self {
            Self::Uninitialized => true,
            Self::Instance(instance) => instance.is_uninitialized(),
            Self::Class(class) => class.is_uninitialized(),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&ObjectPath> {
        match self {
            Self::Uninitialized => None,
            Self::Instance(instance) => instance.path(),
            Self::Class(class) => class.path(),
        }
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&Name> {
        self.path().map(ObjectPath::class_name)
    }
}

impl From<Instance> for CimObject {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl From<Class> for CimObject {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

/// A named method argument or output value.
///
/// The name is carried as a raw string; it is not checked as a CIM name.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamValue {
    pub name: CimString,
    pub value: CimValue,
    /// `false` when the value's type was inferred rather than declared.
    pub is_typed: bool,
}

impl ParamValue {
    #[must_use]
    pub fn new(name: impl Into<CimString>, value: CimValue) -> Self {
        Self {
            name: name.into(),
            value,
            is_typed: true,
        }
    }
}
