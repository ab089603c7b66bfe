//! Instance, class and object codec.
//!
//! Each starts with its marker and a presence slot; an absent (uninitialized)
//! entity stops there.

use model::{CimObject, Class, ClassParts, Instance};
use wire::{Marker, ObjectKind};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::CodecResult;
use crate::path::PathOptions;

impl CimEncoder {
    pub fn put_instance(&mut self, instance: &Instance) -> CodecResult<()> {
        self.put_marker(Marker::Instance)?;
        let (Some(path), Some(qualifiers)) = (instance.path(), instance.qualifiers()) else {
            return self.put_bool(false);
        };
        self.put_bool(true)?;
        self.put_object_path(path, PathOptions::FULL)?;
        self.put_qualifier_list(qualifiers)?;
        self.put_properties(instance.properties())
    }

    pub fn put_class(&mut self, class: &Class) -> CodecResult<()> {
        self.put_marker(Marker::Class)?;
        let (Some(path), Some(super_class), Some(qualifiers)) =
            (class.path(), class.super_class(), class.qualifiers())
        else {
            return self.put_bool(false);
        };
        self.put_bool(true)?;
        self.put_object_path(path, PathOptions::LOCAL)?;
        self.put_name(super_class)?;
        self.put_qualifier_list(qualifiers)?;
        self.put_properties(class.properties())?;
        self.put_seq(class.methods(), Self::put_method)
    }

    pub fn put_object(&mut self, object: &CimObject) -> CodecResult<()> {
        self.put_marker(Marker::Object)?;
        if object.is_uninitialized() {
            return self.put_bool(false);
        }
        self.put_bool(true)?;
        match object {
            CimObject::Uninitialized => Ok(()),
            CimObject::Instance(instance) => {
                self.writer.put_u8(ObjectKind::Instance.raw())?;
                self.put_instance(instance)
            }
            CimObject::Class(class) => {
                self.writer.put_u8(ObjectKind::Class.raw())?;
                self.put_class(class)
            }
        }
    }

    /// Encodes a count followed by instances; uninitialized entries keep
    /// their position.
    pub fn put_instances(&mut self, instances: &[Instance]) -> CodecResult<()> {
        self.put_seq(instances, Self::put_instance)
    }

    pub fn put_objects(&mut self, objects: &[CimObject]) -> CodecResult<()> {
        self.put_seq(objects, Self::put_object)
    }
}

impl CimDecoder<'_> {
    pub fn get_instance(&mut self) -> CodecResult<Instance> {
        self.check_marker(Marker::Instance)?;
        if !self.get_bool()? {
            return Ok(Instance::uninitialized());
        }
        let path = self.get_object_path()?;
        let qualifiers = self.get_qualifier_list()?;
        let properties = self.get_properties()?;
        Ok(Instance::from_parts(path, qualifiers, properties))
    }

    pub fn get_class(&mut self) -> CodecResult<Class> {
        self.check_marker(Marker::Class)?;
        if !self.get_bool()? {
            return Ok(Class::uninitialized());
        }
        Ok(Class::from_parts(ClassParts {
            path: self.get_object_path()?,
            super_class: self.get_name()?,
            qualifiers: self.get_qualifier_list()?,
            properties: self.get_properties()?,
            methods: self.get_seq(Self::get_method)?,
        }))
    }

    pub fn get_object(&mut self) -> CodecResult<CimObject> {
        self.check_marker(Marker::Object)?;
        if !self.get_bool()? {
            return Ok(CimObject::Uninitialized);
        }
        match ObjectKind::parse(self.reader.get_u8()?)? {
            ObjectKind::Instance => Ok(CimObject::Instance(self.get_instance()?)),
            ObjectKind::Class => Ok(CimObject::Class(self.get_class()?)),
        }
    }

    pub fn get_instances(&mut self) -> CodecResult<Vec<Instance>> {
        self.get_seq(Self::get_instance)
    }

    pub fn get_objects(&mut self) -> CodecResult<Vec<CimObject>> {
        self.get_seq(Self::get_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::options::CodecOptions;
    use model::{CimType, CimValue, KeyBinding, KeyBindingType, Method, ObjectPath, Property};

    fn sample_instance() -> Instance {
        let path = ObjectPath::new("CIM_Foo")
            .with_namespace("root/cimv2")
            .with_key_binding(KeyBinding::new("Name", "abc", KeyBindingType::String));
        Instance::from_parts(
            path,
            Default::default(),
            vec![
                Property::new("Name", CimValue::from("abc")),
                Property::new("Count", CimValue::Uint32(3)),
            ],
        )
    }

    fn sample_class() -> Class {
        let mut class = Class::new("CIM_Foo");
        class.set_super_class("CIM_Base").unwrap();
        class
            .add_property(Property::new("Name", CimValue::null(CimType::String, false)))
            .unwrap();
        class.add_method(Method::new("Stop", CimType::Uint32)).unwrap();
        class
    }

    fn decoder(bytes: &[u8]) -> CimDecoder<'_> {
        CimDecoder::new(bytes, &CodecOptions::strict())
    }

    #[test]
    fn instance_roundtrip() {
        let instance = sample_instance();
        let mut encoder = CimEncoder::new();
        encoder.put_instance(&instance).unwrap();
        let bytes = encoder.into_bytes();
        let mut d = decoder(&bytes);
        assert_eq!(d.get_instance().unwrap(), instance);
        assert!(!d.more());
    }

    #[test]
    fn uninitialized_instance_is_two_slots() {
        let mut encoder = CimEncoder::new();
        encoder.put_instance(&Instance::uninitialized()).unwrap();
        let bytes = encoder.into_bytes();
        assert_eq!(bytes.len(), 16);
        assert!(decoder(&bytes).get_instance().unwrap().is_uninitialized());
    }

    #[test]
    fn class_path_is_local() {
        let template = sample_class();
        let class = Class::from_parts(ClassParts {
            path: ObjectPath::new("CIM_Foo")
                .with_host("h")
                .unwrap()
                .with_namespace("root"),
            super_class: model::Name::new("CIM_Base"),
            qualifiers: Default::default(),
            properties: template.properties().to_vec(),
            methods: template.methods().to_vec(),
        });
        let mut encoder = CimEncoder::new();
        encoder.put_class(&class).unwrap();
        let bytes = encoder.into_bytes();
        let decoded = decoder(&bytes).get_class().unwrap();
        let path = decoded.path().unwrap();
        assert!(path.host().is_empty());
        assert!(path.namespace().is_null());
        assert_eq!(decoded.methods().len(), 1);
        assert_eq!(decoded.properties(), class.properties());
    }

    #[test]
    fn object_roundtrip_both_kinds() {
        let objects = vec![
            CimObject::Instance(sample_instance()),
            CimObject::Class(sample_class()),
            CimObject::Uninitialized,
        ];
        let mut encoder = CimEncoder::new();
        encoder.put_objects(&objects).unwrap();
        let bytes = encoder.into_bytes();
        assert_eq!(decoder(&bytes).get_objects().unwrap(), objects);
    }

    #[test]
    fn unknown_object_kind() {
        let mut encoder = CimEncoder::new();
        encoder.put_marker(Marker::Object).unwrap();
        encoder.put_bool(true).unwrap();
        encoder.writer_mut().put_u8(b'X').unwrap();
        let bytes = encoder.into_bytes();
        assert_eq!(
            decoder(&bytes).get_object().unwrap_err(),
            CodecError::Wire(wire::WireError::UnknownObjectKind { tag: b'X' })
        );
    }

    #[test]
    fn instance_array_keeps_uninitialized_position() {
        let instances = vec![
            sample_instance(),
            Instance::uninitialized(),
            sample_instance(),
        ];
        let mut encoder = CimEncoder::new();
        encoder.put_instances(&instances).unwrap();
        let bytes = encoder.into_bytes();
        let decoded = decoder(&bytes).get_instances().unwrap();
        assert_eq!(decoded.len(), 3);
        assert!(decoded[1].is_uninitialized());
        assert_eq!(decoded, instances);
    }
}
