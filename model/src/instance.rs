//! CIM instances.

use crate::error::{ModelError, ModelResult};
use crate::name::Name;
use crate::path::ObjectPath;
use crate::property::Property;
use crate::qualifier::{Qualifier, QualifierList};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct InstanceRep {
    path: ObjectPath,
    qualifiers: QualifierList,
    properties: Vec<Property>,
}

/// A CIM instance, or the uninitialized placeholder.
///
/// An uninitialized instance has no path, qualifiers or properties. It encodes
/// as an "absent" slot and, as a scalar value, as null.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Instance {
    rep: Option<Box<InstanceRep>>,
}

impl Instance {
    /// Creates an empty instance of `class_name`.
    #[must_use]
    pub fn new(class_name: impl Into<Name>) -> Self {
        Self::from_parts(
            ObjectPath::new(class_name),
            QualifierList::new(),
            Vec::new(),
        )
    }

    /// Creates the uninitialized placeholder.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self { rep: None }
    }

    /// Assembles an initialized instance.
    #[must_use]
    pub fn from_parts(
        path: ObjectPath,
        qualifiers: QualifierList,
        properties: Vec<Property>,
    ) -> Self {
        Self {
            rep: Some(Box::new(InstanceRep {
                path,
                qualifiers,
                properties,
            })),
        }
    }

    #[must_use]
    pub const fn is_uninitialized(&self) -> bool {
        self.rep.is_none()
    }

    #[must_use]
    pub fn path(&self) -> Option<&ObjectPath> {
        self.rep.as_ref().map(|rep| &rep.path)
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&Name> {
        self.path().map(ObjectPath::class_name)
    }

    #[must_use]
    pub fn qualifiers(&self) -> Option<&QualifierList> {
        self.rep.as_ref().map(|rep| &rep.qualifiers)
    }

    /// Returns the properties; empty when uninitialized.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        self.rep.as_ref().map_or(&[], |rep| rep.properties.as_slice())
    }

    /// Finds a property by name, ignoring case.
    #[must_use]
    pub fn property(&self, name: &Name) -> Option<&Property> {
        self.properties().iter().find(|p| p.name.eq_ignore_case(name))
    }

    pub fn set_path(&mut self, path: ObjectPath) -> ModelResult<()> {
        self.rep_mut()?.path = path;
        Ok(())
    }

    pub fn add_qualifier(&mut self, qualifier: Qualifier) -> ModelResult<()> {
        self.rep_mut()?.qualifiers.push(qualifier);
        Ok(())
    }

    pub fn add_property(&mut self, property: Property) -> ModelResult<()> {
        self.rep_mut()?.properties.push(property);
        Ok(())
    }

    fn rep_mut(&mut self) -> ModelResult<&mut InstanceRep> {
        self.rep
            .as_deref_mut()
            .ok_or(ModelError::Uninitialized { what: "instance" })
    }
}
