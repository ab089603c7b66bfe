//! Owned CIM value model for the cimbin codec.
//!
//! The types here are what the codec encodes and decodes: typed values,
//! object paths, qualifiers, properties, methods, instances, classes and
//! property lists. They are plain owned data; nothing in this crate touches
//! bytes.
//!
//! # Features
//!
//! - `serde` - `Serialize` for every model type (used by tooling for JSON output).
//!
//! # Design Principles
//!
//! - **Owned values** - Decoders build fresh values; nothing borrows the input.
//! - **Cheap clones where shared** - Object paths and property lists share their
//!   representation and copy on first mutation.
//! - **Lossless strings** - [`CimString`] keeps raw UTF-16 units so unvalidated
//!   input survives a round trip unchanged.

mod class;
mod datetime;
mod error;
mod hash;
mod host;
mod instance;
mod method;
mod name;
mod object;
mod path;
mod property;
mod property_list;
mod qualifier;
mod string;
mod types;
mod value;

pub use class::{Class, ClassParts};
pub use datetime::DateTime;
pub use error::{ModelError, ModelResult};
pub use hash::name_tag;
pub use host::is_valid_host;
pub use instance::Instance;
pub use method::{Method, Parameter};
pub use name::{is_legal_name, is_legal_namespace_name, Name, NamespaceName};
pub use object::{CimObject, ParamValue};
pub use path::{KeyBinding, KeyBindingType, ObjectPath};
pub use property::Property;
pub use property_list::PropertyList;
pub use qualifier::{Flavor, Qualifier, QualifierDecl, QualifierList, Scope};
pub use string::CimString;
pub use types::CimType;
pub use value::CimValue;
