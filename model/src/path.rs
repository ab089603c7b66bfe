//! Object paths and key bindings.

use std::fmt;
use std::sync::Arc;

use crate::error::{ModelError, ModelResult};
use crate::host::is_valid_host;
use crate::name::{Name, NamespaceName};
use crate::string::CimString;

/// How the value of a key binding is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum KeyBindingType {
    Boolean = 0,
    #[default]
    String = 1,
    Numeric = 2,
    Reference = 3,
}

impl KeyBindingType {
    /// Maps a wire tag to a key binding type; `None` for unknown tags.
    #[must_use]
    pub const fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Boolean),
            1 => Some(Self::String),
            2 => Some(Self::Numeric),
            3 => Some(Self::Reference),
            _ => None,
        }
    }

    /// Returns the wire tag.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }
}

/// A key property name and its textual value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyBinding {
    pub name: Name,
    pub value: CimString,
    pub kind: KeyBindingType,
}

impl KeyBinding {
    #[must_use]
    pub fn new(name: impl Into<Name>, value: impl Into<CimString>, kind: KeyBindingType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct ObjectPathRep {
    host: CimString,
    namespace: NamespaceName,
    class_name: Name,
    key_bindings: Vec<KeyBinding>,
}

/// Reference to a class or instance: optional host and namespace, a class
/// name, and the key bindings that identify an instance.
///
/// Paths are cheap to clone; the representation is shared and copied on the
/// first mutation.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ObjectPath {
    rep: Arc<ObjectPathRep>,
}

impl ObjectPath {
    /// Creates a local path to `class_name` with no keys.
    #[must_use]
    pub fn new(class_name: impl Into<Name>) -> Self {
        Self {
            rep: Arc::new(ObjectPathRep {
                class_name: class_name.into(),
                ..ObjectPathRep::default()
            }),
        }
    }

    /// Assembles a path from decoded parts without validation.
    #[must_use]
    pub fn from_parts(
        host: CimString,
        namespace: NamespaceName,
        class_name: Name,
        key_bindings: Vec<KeyBinding>,
    ) -> Self {
        Self {
            rep: Arc::new(ObjectPathRep {
                host,
                namespace,
                class_name,
                key_bindings,
            }),
        }
    }

    #[must_use]
    pub fn host(&self) -> &CimString {
        &self.rep.host
    }

    #[must_use]
    pub fn namespace(&self) -> &NamespaceName {
        &self.rep.namespace
    }

    #[must_use]
    pub fn class_name(&self) -> &Name {
        &self.rep.class_name
    }

    #[must_use]
    pub fn key_bindings(&self) -> &[KeyBinding] {
        &self.rep.key_bindings
    }

    /// Returns `true` if the class name is empty.
    ///
    /// An empty path encodes as a single "absent" slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rep.class_name.is_null()
    }

    /// Returns the path with its host replaced, validating `host[:port]`.
    pub fn with_host(mut self, host: &str) -> ModelResult<Self> {
        self.set_host(host)?;
        Ok(self)
    }

    /// Returns the path with its namespace replaced.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<NamespaceName>) -> Self {
        Arc::make_mut(&mut self.rep).namespace = namespace.into();
        self
    }

    /// Returns the path with a key binding appended.
    #[must_use]
    pub fn with_key_binding(mut self, binding: KeyBinding) -> Self {
        self.add_key_binding(binding);
        self
    }

    /// Replaces the host, validating `host[:port]`.
    pub fn set_host(&mut self, host: &str) -> ModelResult<()> {
        if !is_valid_host(host) {
            return Err(ModelError::InvalidHost {
                host: host.to_owned(),
            });
        }
        Arc::make_mut(&mut self.rep).host = CimString::from(host);
        Ok(())
    }

    /// Replaces the class name.
    pub fn set_class_name(&mut self, class_name: impl Into<Name>) {
        Arc::make_mut(&mut self.rep).class_name = class_name.into();
    }

    /// Appends a key binding.
    pub fn add_key_binding(&mut self, binding: KeyBinding) {
        Arc::make_mut(&mut self.rep).key_bindings.push(binding);
    }

    /// Returns a copy without host and namespace.
    #[must_use]
    pub fn local(&self) -> Self {
        Self::from_parts(
            CimString::new(),
            NamespaceName::null(),
            self.rep.class_name.clone(),
            self.rep.key_bindings.clone(),
        )
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rep = &self.rep;
        if !rep.host.is_empty() {
            write!(f, "//{}/", rep.host)?;
        }
        if !rep.namespace.is_null() {
            write!(f, "{}:", rep.namespace)?;
        }
        write!(f, "{}", rep.class_name)?;
        for (index, binding) in rep.key_bindings.iter().enumerate() {
            f.write_str(if index == 0 { "." } else { "," })?;
            write!(f, "{}=", binding.name)?;
            match binding.kind {
                KeyBindingType::String | KeyBindingType::Reference => {
                    f.write_str("\"")?;
                    for ch in binding.value.to_string_lossy().chars() {
                        if ch == '"' || ch == '\\' {
                            f.write_str("\\")?;
                        }
                        write!(f, "{ch}")?;
                    }
                    f.write_str("\"")?;
                }
                KeyBindingType::Boolean | KeyBindingType::Numeric => {
                    write!(f, "{}", binding.value)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectPath({self})")
    }
}
