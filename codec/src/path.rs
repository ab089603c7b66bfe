//! Object path and key binding codec.

use model::{CimString, KeyBinding, KeyBindingType, NamespaceName, ObjectPath};
use wire::Marker;

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::{CodecError, CodecResult};

/// Which optional parts of an object path are written.
///
/// Omitted host and namespace are written as empty strings and omitted key
/// bindings as a zero count, so the decoder never needs to know the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathOptions {
    pub include_host_and_namespace: bool,
    pub include_key_bindings: bool,
}

impl PathOptions {
    /// Everything: host, namespace and key bindings.
    pub const FULL: Self = Self {
        include_host_and_namespace: true,
        include_key_bindings: true,
    };

    /// Class name and key bindings only, as used inside class encodings.
    pub const LOCAL: Self = Self {
        include_host_and_namespace: false,
        include_key_bindings: true,
    };
}

impl Default for PathOptions {
    fn default() -> Self {
        Self::FULL
    }
}

impl CimEncoder {
    /// Encodes an object path.
    ///
    /// A path with an empty class name is written as a single `false` slot.
    pub fn put_object_path(&mut self, path: &ObjectPath, options: PathOptions) -> CodecResult<()> {
        self.put_marker(Marker::ObjectPath)?;
        if path.is_empty() {
            return self.put_bool(false);
        }
        self.put_bool(true)?;

        if options.include_host_and_namespace {
            self.put_string(path.host())?;
            self.put_namespace(path.namespace())?;
        } else {
            self.put_string(&CimString::new())?;
            self.put_namespace(&NamespaceName::null())?;
        }
        self.put_name(path.class_name())?;

        if options.include_key_bindings {
            self.put_seq(path.key_bindings(), Self::put_key_binding)
        } else {
            self.put_count(0)
        }
    }

    pub fn put_key_binding(&mut self, binding: &KeyBinding) -> CodecResult<()> {
        self.put_name(&binding.name)?;
        self.put_string(&binding.value)?;
        self.put_u32(binding.kind.tag())
    }

    /// Encodes a count followed by fully-qualified paths.
    pub fn put_object_paths(&mut self, paths: &[ObjectPath]) -> CodecResult<()> {
        self.put_seq(paths, |e, path| e.put_object_path(path, PathOptions::FULL))
    }
}

impl CimDecoder<'_> {
    /// Decodes an object path. An absent path decodes as the empty path.
    pub fn get_object_path(&mut self) -> CodecResult<ObjectPath> {
        self.check_marker(Marker::ObjectPath)?;
        if !self.get_bool()? {
            return Ok(ObjectPath::default());
        }

        let host = self.get_host()?;
        let namespace = self.get_namespace()?;
        let class_name = self.get_name()?;
        let key_bindings = self.get_seq(Self::get_key_binding)?;
        Ok(ObjectPath::from_parts(
            host,
            namespace,
            class_name,
            key_bindings,
        ))
    }

    pub fn get_key_binding(&mut self) -> CodecResult<KeyBinding> {
        let name = self.get_name()?;
        let value = self.get_string()?;
        let tag = self.get_u32()?;
        let kind = KeyBindingType::from_tag(tag).ok_or(CodecError::UnknownKeyBindingType { tag })?;
        Ok(KeyBinding { name, value, kind })
    }

    pub fn get_object_paths(&mut self) -> CodecResult<Vec<ObjectPath>> {
        self.get_seq(Self::get_object_path)
    }
}
