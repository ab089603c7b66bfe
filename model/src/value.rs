//! Typed CIM values.

use crate::datetime::DateTime;
use crate::instance::Instance;
use crate::object::CimObject;
use crate::path::ObjectPath;
use crate::string::CimString;
use crate::types::CimType;

/// A CIM value: one of the seventeen types, scalar or array, or a typed null.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CimValue {
    /// Null value; the type and array-ness are still known.
    Null { cim_type: CimType, is_array: bool },

    Boolean(bool),
    Uint8(u8),
    Sint8(i8),
    Uint16(u16),
    Sint16(i16),
    Uint32(u32),
    Sint32(i32),
    Uint64(u64),
    Sint64(i64),
    Real32(f32),
    Real64(f64),
    Char16(u16),
    String(CimString),
    DateTime(DateTime),
    Reference(ObjectPath),
    Object(CimObject),
    Instance(Instance),

    BooleanArray(Vec<bool>),
    Uint8Array(Vec<u8>),
    Sint8Array(Vec<i8>),
    Uint16Array(Vec<u16>),
    Sint16Array(Vec<i16>),
    Uint32Array(Vec<u32>),
    Sint32Array(Vec<i32>),
    Uint64Array(Vec<u64>),
    Sint64Array(Vec<i64>),
    Real32Array(Vec<f32>),
    Real64Array(Vec<f64>),
    Char16Array(Vec<u16>),
    StringArray(Vec<CimString>),
    DateTimeArray(Vec<DateTime>),
    ReferenceArray(Vec<ObjectPath>),
    ObjectArray(Vec<CimObject>),
    InstanceArray(Vec<Instance>),
}

impl CimValue {
    /// Creates a typed null.
    #[must_use]
    pub const fn null(cim_type: CimType, is_array: bool) -> Self {
        Self::Null { cim_type, is_array }
    }

    /// Returns the CIM type of the value.
    #[must_use]
    pub const fn cim_type(&self) -> CimType {
        match self {
            Self::Null { cim_type, .. } => *cim_type,
            Self::Boolean(_) | Self::BooleanArray(_) => CimType::Boolean,
            Self::Uint8(_) | Self::Uint8Array(_) => CimType::Uint8,
            Self::Sint8(_) | Self::Sint8Array(_) => CimType::Sint8,
            Self::Uint16(_) | Self::Uint16Array(_) => CimType::Uint16,
            Self::Sint16(_) | Self::Sint16Array(_) => CimType::Sint16,
            Self::Uint32(_) | Self::Uint32Array(_) => CimType::Uint32,
            Self::Sint32(_) | Self::Sint32Array(_) => CimType::Sint32,
            Self::Uint64(_) | Self::Uint64Array(_) => CimType::Uint64,
            Self::Sint64(_) | Self::Sint64Array(_) => CimType::Sint64,
            Self::Real32(_) | Self::Real32Array(_) => CimType::Real32,
            Self::Real64(_) | Self::Real64Array(_) => CimType::Real64,
            Self::Char16(_) | Self::Char16Array(_) => CimType::Char16,
            Self::String(_) | Self::StringArray(_) => CimType::String,
            Self::DateTime(_) | Self::DateTimeArray(_) => CimType::DateTime,
            Self::Reference(_) | Self::ReferenceArray(_) => CimType::Reference,
            Self::Object(_) | Self::ObjectArray(_) => CimType::Object,
            Self::Instance(_) | Self::InstanceArray(_) => CimType::Instance,
        }
    }

    /// Returns `true` for array values, including array-typed nulls.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        match self {
            Self::Null { is_array, .. } => *is_array,
            Self::BooleanArray(_)
            | Self::Uint8Array(_)
            | Self::Sint8Array(_)
            | Self::Uint16Array(_)
            | Self::Sint16Array(_)
            | Self::Uint32Array(_)
            | Self::Sint32Array(_)
            | Self::Uint64Array(_)
            | Self::Sint64Array(_)
            | Self::Real32Array(_)
            | Self::Real64Array(_)
            | Self::Char16Array(_)
            | Self::StringArray(_)
            | Self::DateTimeArray(_)
            | Self::ReferenceArray(_)
            | Self::ObjectArray(_)
            | Self::InstanceArray(_) => true,
            _ => false,
        }
    }

    /// Returns `true` only for the explicit null variant.
    ///
    /// Encoders additionally treat a scalar uninitialized instance as null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }

    /// Returns the element count of an array value, `None` for scalars and
    /// nulls.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        let len = match self {
            Self::BooleanArray(v) => v.len(),
            Self::Uint8Array(v) => v.len(),
            Self::Sint8Array(v) => v.len(),
            Self::Uint16Array(v) | Self::Char16Array(v) => v.len(),
            Self::Sint16Array(v) => v.len(),
            Self::Uint32Array(v) => v.len(),
            Self::Sint32Array(v) => v.len(),
            Self::Uint64Array(v) => v.len(),
            Self::Sint64Array(v) => v.len(),
            Self::Real32Array(v) => v.len(),
            Self::Real64Array(v) => v.len(),
            Self::StringArray(v) => v.len(),
            Self::DateTimeArray(v) => v.len(),
            Self::ReferenceArray(v) => v.len(),
            Self::ObjectArray(v) => v.len(),
            Self::InstanceArray(v) => v.len(),
            _ => return None,
        };
        Some(len)
    }
}

impl Default for CimValue {
    fn default() -> Self {
        Self::null(CimType::Boolean, false)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $scalar:ident, $array:ident;)*) => {
        $(
            impl From<$ty> for CimValue {
                fn from(value: $ty) -> Self {
                    Self::$scalar(value)
                }
            }

            impl From<Vec<$ty>> for CimValue {
                fn from(values: Vec<$ty>) -> Self {
                    Self::$array(values)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean, BooleanArray;
    u8 => Uint8, Uint8Array;
    i8 => Sint8, Sint8Array;
    u16 => Uint16, Uint16Array;
    i16 => Sint16, Sint16Array;
    u32 => Uint32, Uint32Array;
    i32 => Sint32, Sint32Array;
    u64 => Uint64, Uint64Array;
    i64 => Sint64, Sint64Array;
    f32 => Real32, Real32Array;
    f64 => Real64, Real64Array;
    CimString => String, StringArray;
    DateTime => DateTime, DateTimeArray;
    ObjectPath => Reference, ReferenceArray;
    CimObject => Object, ObjectArray;
    Instance => Instance, InstanceArray;
}

impl From<&str> for CimValue {
    fn from(value: &str) -> Self {
        Self::String(CimString::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_and_arrayness() {
        assert_eq!(CimValue::from(true).cim_type(), CimType::Boolean);
        assert!(!CimValue::from(true).is_array());
        assert_eq!(CimValue::from(vec![1u64]).cim_type(), CimType::Uint64);
        assert!(CimValue::from(vec![1u64]).is_array());
        assert_eq!(CimValue::Char16(0x41).cim_type(), CimType::Char16);
        assert_eq!(CimValue::from("x").cim_type(), CimType::String);
    }

    #[test]
    fn typed_null() {
        let null = CimValue::null(CimType::DateTime, true);
        assert!(null.is_null());
        assert!(null.is_array());
        assert_eq!(null.cim_type(), CimType::DateTime);
        assert_eq!(null.array_len(), None);
    }

    #[test]
    fn array_len() {
        assert_eq!(CimValue::from(vec![1i16, 2, 3]).array_len(), Some(3));
        assert_eq!(CimValue::StringArray(Vec::new()).array_len(), Some(0));
        assert_eq!(CimValue::from(7u8).array_len(), None);
    }

    #[test]
    fn uninitialized_instance_is_not_explicit_null() {
        let value = CimValue::Instance(Instance::uninitialized());
        assert!(!value.is_null());
        assert_eq!(value.cim_type(), CimType::Instance);
    }
}
