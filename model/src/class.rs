//! CIM classes.

use crate::error::{ModelError, ModelResult};
use crate::method::Method;
use crate::name::Name;
use crate::path::ObjectPath;
use crate::property::Property;
use crate::qualifier::{Qualifier, QualifierList};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct ClassRep {
    path: ObjectPath,
    super_class: Name,
    qualifiers: QualifierList,
    properties: Vec<Property>,
    methods: Vec<Method>,
}

/// A CIM class definition, or the uninitialized placeholder.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Class {
    rep: Option<Box<ClassRep>>,
}

/// Parts of an initialized class, in wire order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassParts {
    pub path: ObjectPath,
    pub super_class: Name,
    pub qualifiers: QualifierList,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
}

impl Class {
    /// Creates an empty class named `class_name`.
    #[must_use]
    pub fn new(class_name: impl Into<Name>) -> Self {
        Self::from_parts(ClassParts {
            path: ObjectPath::new(class_name),
            ..ClassParts::default()
        })
    }

    #[must_use]
    pub const fn uninitialized() -> Self {
        Self { rep: None }
    }

    #[must_use]
    pub fn from_parts(parts: ClassParts) -> Self {
        let ClassParts {
            path,
            super_class,
            qualifiers,
            properties,
            methods,
        } = parts;
        Self {
            rep: Some(Box::new(ClassRep {
                path,
                super_class,
                qualifiers,
                properties,
                methods,
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
    pub fn super_class(&self) -> Option<&Name> {
        self.rep.as_ref().map(|rep| &rep.super_class)
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

    /// Returns the methods; empty when uninitialized.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        self.rep.as_ref().map_or(&[], |rep| rep.methods.as_slice())
    }

    #[must_use]
    pub fn property(&self, name: &Name) -> Option<&Property> {
        self.properties().iter().find(|p| p.name.eq_ignore_case(name))
    }

    #[must_use]
    pub fn method(&self, name: &Name) -> Option<&Method> {
        self.methods().iter().find(|m| m.name.eq_ignore_case(name))
    }

    pub fn set_super_class(&mut self, super_class: impl Into<Name>) -> ModelResult<()> {
        self.rep_mut()?.super_class = super_class.into();
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

    pub fn add_method(&mut self, method: Method) -> ModelResult<()> {
        self.rep_mut()?.methods.push(method);
        Ok(())
    }

    fn rep_mut(&mut self) -> ModelResult<&mut ClassRep> {
        self.rep
            .as_deref_mut()
            .ok_or(ModelError::Uninitialized { what: "class" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CimType;
    use crate::value::CimValue;

    #[test]
    fn build_class() {
        let mut class = Class::new("CIM_Foo");
        class.set_super_class("CIM_Base").unwrap();
        class
            .add_property(Property::new("Name", CimValue::null(CimType::String, false)))
            .unwrap();
        class.add_method(Method::new("Stop", CimType::Uint32)).unwrap();

        assert_eq!(class.class_name(), Some(&Name::new("CIM_Foo")));
        assert_eq!(class.super_class(), Some(&Name::new("CIM_Base")));
        assert!(class.property(&Name::new("name")).is_some());
        assert!(class.method(&Name::new("STOP")).is_some());
    }

    #[test]
    fn uninitialized_class() {
        let mut class = Class::uninitialized();
        assert!(class.is_uninitialized());
        assert!(class.methods().is_empty());
        assert_eq!(
            class.set_super_class("X").unwrap_err(),
            ModelError::Uninitialized { what: "class" }
        );
    }
}
