//! Typed value codec.
//!
//! A value is: Value marker, flags word, type tag, then (unless null) the
//! payload. Fixed-width scalars take one slot, arrays of fixed-width types
//! are packed, and everything else is a count followed by each element.

use model::{CimType, CimValue, DateTime};
use wire::{Marker, ValueFlags};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::{CodecError, CodecResult};
use crate::path::PathOptions;

impl CimEncoder {
    /// Encodes a typed value.
    ///
    /// A scalar uninitialized instance is written as a null instance.
    pub fn put_value(&mut self, value: &CimValue) -> CodecResult<()> {
        let is_null = match value {
            CimValue::Null { .. } => true,
            CimValue::Instance(instance) => instance.is_uninitialized(),
            _ => false,
        };

        self.put_marker(Marker::Value)?;
        self.put_u32(ValueFlags::new(is_null, value.is_array()).raw())?;
        self.put_u32(value.cim_type().tag())?;
        if is_null {
            return Ok(());
        }

        let w = &mut self.writer;
        match value {
            CimValue::Null { .. } => {}
            CimValue::Boolean(v) => w.put_bool(*v)?,
            CimValue::Uint8(v) => w.put_u8(*v)?,
            CimValue::Sint8(v) => w.put_i8(*v)?,
            CimValue::Uint16(v) | CimValue::Char16(v) => w.put_u16(*v)?,
            CimValue::Sint16(v) => w.put_i16(*v)?,
            CimValue::Uint32(v) => w.put_u32(*v)?,
            CimValue::Sint32(v) => w.put_i32(*v)?,
            CimValue::Uint64(v) => w.put_u64(*v)?,
            CimValue::Sint64(v) => w.put_i64(*v)?,
            CimValue::Real32(v) => w.put_f32(*v)?,
            CimValue::Real64(v) => w.put_f64(*v)?,
            CimValue::String(v) => self.put_string(v)?,
            CimValue::DateTime(v) => self.put_datetime(v)?,
            CimValue::Reference(v) => self.put_object_path(v, PathOptions::FULL)?,
            CimValue::Object(v) => self.put_object(v)?,
            CimValue::Instance(v) => self.put_instance(v)?,

            CimValue::BooleanArray(v) => w.put_array(v)?,
            CimValue::Uint8Array(v) => w.put_array(v)?,
            CimValue::Sint8Array(v) => w.put_array(v)?,
            CimValue::Uint16Array(v) | CimValue::Char16Array(v) => w.put_array(v)?,
            CimValue::Sint16Array(v) => w.put_array(v)?,
            CimValue::Uint32Array(v) => w.put_array(v)?,
            CimValue::Sint32Array(v) => w.put_array(v)?,
            CimValue::Uint64Array(v) => w.put_array(v)?,
            CimValue::Sint64Array(v) => w.put_array(v)?,
            CimValue::Real32Array(v) => w.put_array(v)?,
            CimValue::Real64Array(v) => w.put_array(v)?,
            CimValue::StringArray(v) => self.put_seq(v, Self::put_string)?,
            CimValue::DateTimeArray(v) => self.put_seq(v, Self::put_datetime)?,
            CimValue::ReferenceArray(v) => self.put_object_paths(v)?,
            CimValue::ObjectArray(v) => self.put_objects(v)?,
            CimValue::InstanceArray(v) => self.put_instances(v)?,
        }
        Ok(())
    }

    /// Encodes a date-time as four slots.
    pub fn put_datetime(&mut self, value: &DateTime) -> CodecResult<()> {
        self.writer.put_u64(value.usec)?;
        self.writer.put_u32(value.utc_offset)?;
        self.writer.put_u16(value.sign)?;
        self.writer.put_u16(value.wildcards)?;
        Ok(())
    }
}

impl CimDecoder<'_> {
    /// Decodes a typed value.
    pub fn get_value(&mut self) -> CodecResult<CimValue> {
        self.check_marker(Marker::Value)?;
        let flags = ValueFlags::from_raw(self.get_u32()?)?;
        let tag = self.get_u32()?;
        let cim_type = CimType::from_tag(tag).ok_or(CodecError::UnknownType { tag })?;

        if flags.is_null() {
            return Ok(CimValue::null(cim_type, flags.is_array()));
        }
        self.nested(|d| {
            if flags.is_array() {
                d.get_array_value(cim_type)
            } else {
                d.get_scalar_value(cim_type)
            }
        })
    }

    /// Decodes a date-time written by [`CimEncoder::put_datetime`].
    pub fn get_datetime(&mut self) -> CodecResult<DateTime> {
        Ok(DateTime {
            usec: self.reader.get_u64()?,
            utc_offset: self.reader.get_u32()?,
            sign: self.reader.get_u16()?,
            wildcards: self.reader.get_u16()?,
        })
    }

    fn get_scalar_value(&mut self, cim_type: CimType) -> CodecResult<CimValue> {
        let r = &mut self.reader;
        let value = match cim_type {
            CimType::Boolean => CimValue::Boolean(r.get_bool()?),
            CimType::Uint8 => CimValue::Uint8(r.get_u8()?),
            CimType::Sint8 => CimValue::Sint8(r.get_i8()?),
            CimType::Uint16 => CimValue::Uint16(r.get_u16()?),
            CimType::Sint16 => CimValue::Sint16(r.get_i16()?),
            CimType::Uint32 => CimValue::Uint32(r.get_u32()?),
            CimType::Sint32 => CimValue::Sint32(r.get_i32()?),
            CimType::Uint64 => CimValue::Uint64(r.get_u64()?),
            CimType::Sint64 => CimValue::Sint64(r.get_i64()?),
            CimType::Real32 => CimValue::Real32(r.get_f32()?),
            CimType::Real64 => CimValue::Real64(r.get_f64()?),
            CimType::Char16 => CimValue::Char16(r.get_u16()?),
            CimType::String => CimValue::String(self.get_string()?),
            CimType::DateTime => CimValue::DateTime(self.get_datetime()?),
            CimType::Reference => CimValue::Reference(self.get_object_path()?),
            CimType::Object => CimValue::Object(self.get_object()?),
            CimType::Instance => CimValue::Instance(self.get_instance()?),
        };
        Ok(value)
    }

    fn get_array_value(&mut self, cim_type: CimType) -> CodecResult<CimValue> {
        let value = match cim_type {
            CimType::Boolean => CimValue::BooleanArray(self.get_packed()?),
            CimType::Uint8 => CimValue::Uint8Array(self.get_packed()?),
            CimType::Sint8 => CimValue::Sint8Array(self.get_packed()?),
            CimType::Uint16 => CimValue::Uint16Array(self.get_packed()?),
            CimType::Sint16 => CimValue::Sint16Array(self.get_packed()?),
            CimType::Uint32 => CimValue::Uint32Array(self.get_packed()?),
            CimType::Sint32 => CimValue::Sint32Array(self.get_packed()?),
            CimType::Uint64 => CimValue::Uint64Array(self.get_packed()?),
            CimType::Sint64 => CimValue::Sint64Array(self.get_packed()?),
            CimType::Real32 => CimValue::Real32Array(self.get_packed()?),
            CimType::Real64 => CimValue::Real64Array(self.get_packed()?),
            CimType::Char16 => CimValue::Char16Array(self.get_packed()?),
            CimType::String => CimValue::StringArray(self.get_seq(Self::get_string)?),
            CimType::DateTime => CimValue::DateTimeArray(self.get_seq(Self::get_datetime)?),
            CimType::Reference => CimValue::ReferenceArray(self.get_object_paths()?),
            CimType::Object => CimValue::ObjectArray(self.get_objects()?),
            CimType::Instance => CimValue::InstanceArray(self.get_instances()?),
        };
        Ok(value)
    }
}
