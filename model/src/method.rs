//! Class methods and their parameters.

use crate::name::Name;
use crate::qualifier::QualifierList;
use crate::types::CimType;

/// A method parameter declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    pub name: Name,
    pub cim_type: CimType,
    pub is_array: bool,
    pub array_size: u32,
    pub reference_class_name: Name,
    pub qualifiers: QualifierList,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<Name>, cim_type: CimType) -> Self {
        Self {
            name: name.into(),
            cim_type,
            is_array: false,
            array_size: 0,
            reference_class_name: Name::null(),
            qualifiers: QualifierList::new(),
        }
    }

    #[must_use]
    pub fn array(mut self, array_size: u32) -> Self {
        self.is_array = true;
        self.array_size = array_size;
        self
    }

    #[must_use]
    pub fn with_reference_class(mut self, class_name: impl Into<Name>) -> Self {
        self.reference_class_name = class_name.into();
        self
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Method {
    pub name: Name,
    /// Return type.
    pub cim_type: CimType,
    pub class_origin: Name,
    pub propagated: bool,
    pub qualifiers: QualifierList,
    pub parameters: Vec<Parameter>,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<Name>, cim_type: CimType) -> Self {
        Self {
            name: name.into(),
            cim_type,
            class_origin: Name::null(),
            propagated: false,
            qualifiers: QualifierList::new(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Finds a parameter by name, ignoring case.
    #[must_use]
    pub fn parameter(&self, name: &Name) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name.eq_ignore_case(name))
    }
}
