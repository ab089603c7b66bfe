//! Property codec.
//!
//! Layout: Property marker, flags word, name, value, then array size,
//! reference class name, class origin and qualifier list, each only when its
//! flag bit is set.

use model::{Name, Property, QualifierList};
use wire::{Marker, PropertyFlags};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::CodecResult;

impl CimEncoder {
    pub fn put_property(&mut self, property: &Property) -> CodecResult<()> {
        let flags = PropertyFlags::empty()
            .with(PropertyFlags::HAS_ARRAY_SIZE, property.array_size != 0)
            .with(
                PropertyFlags::HAS_REFERENCE_CLASS,
                !property.reference_class_name.is_null(),
            )
            .with(
                PropertyFlags::HAS_CLASS_ORIGIN,
                !property.class_origin.is_null(),
            )
            .with(PropertyFlags::IS_PROPAGATED, property.propagated)
            .with(PropertyFlags::HAS_QUALIFIERS, !property.qualifiers.is_empty());

        self.put_marker(Marker::Property)?;
        self.put_u32(flags.raw())?;
        self.put_name(&property.name)?;
        self.put_value(&property.value)?;

        if flags.has_array_size() {
            self.put_u32(property.array_size)?;
        }
        if flags.has_reference_class() {
            self.put_name(&property.reference_class_name)?;
        }
        if flags.has_class_origin() {
            self.put_name(&property.class_origin)?;
        }
        if flags.has_qualifiers() {
            self.put_qualifier_list(&property.qualifiers)?;
        }
        Ok(())
    }

    pub(crate) fn put_properties(&mut self, properties: &[Property]) -> CodecResult<()> {
        self.put_seq(properties, Self::put_property)
    }
}

impl CimDecoder<'_> {
    pub fn get_property(&mut self) -> CodecResult<Property> {
        self.check_marker(Marker::Property)?;
        let flags = PropertyFlags::from_raw(self.get_u32()?)?;
        let name = self.get_name()?;
        let value = self.get_value()?;

        let array_size = if flags.has_array_size() {
            self.get_u32()?
        } else {
            0
        };
        let reference_class_name = if flags.has_reference_class() {
            self.get_name()?
        } else {
            Name::null()
        };
        let class_origin = if flags.has_class_origin() {
            self.get_name()?
        } else {
            Name::null()
        };
        let qualifiers = if flags.has_qualifiers() {
            self.get_qualifier_list()?
        } else {
            QualifierList::new()
        };

        Ok(Property {
            name,
            value,
            array_size,
            reference_class_name,
            class_origin,
            propagated: flags.is_propagated(),
            qualifiers,
        })
    }

    pub(crate) fn get_properties(&mut self) -> CodecResult<Vec<Property>> {
        self.get_seq(Self::get_property)
    }
}
