//! Properties of instances and classes.

use crate::name::Name;
use crate::qualifier::{Qualifier, QualifierList};
use crate::value::CimValue;

/// A named value with optional class-schema metadata.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Property {
    pub name: Name,
    pub value: CimValue,
    /// Fixed array size; zero when unspecified.
    pub array_size: u32,
    /// Class of a reference-typed property; null otherwise.
    pub reference_class_name: Name,
    /// Class that introduced the property; null when unknown.
    pub class_origin: Name,
    pub propagated: bool,
    pub qualifiers: QualifierList,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<Name>, value: CimValue) -> Self {
        Self {
            name: name.into(),
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_array_size(mut self, array_size: u32) -> Self {
        self.array_size = array_size;
        self
    }

    #[must_use]
    pub fn with_reference_class(mut self, class_name: impl Into<Name>) -> Self {
        self.reference_class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_class_origin(mut self, class_name: impl Into<Name>) -> Self {
        self.class_origin = class_name.into();
        self
    }

    #[must_use]
    pub fn with_propagated(mut self, propagated: bool) -> Self {
        self.propagated = propagated;
        self
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }
}
