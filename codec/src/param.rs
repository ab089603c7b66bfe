//! Parameter values, property lists and name arrays.

use model::{Name, ParamValue, PropertyList};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::CodecResult;

impl CimEncoder {
    pub fn put_param_value(&mut self, param: &ParamValue) -> CodecResult<()> {
        self.put_string(&param.name)?;
        self.put_value(&param.value)?;
        self.put_bool(param.is_typed)
    }

    pub fn put_param_values(&mut self, params: &[ParamValue]) -> CodecResult<()> {
        self.put_seq(params, Self::put_param_value)
    }

    /// Encodes a property list: null flag, then names and their tags.
    pub fn put_property_list(&mut self, list: &PropertyList) -> CodecResult<()> {
        if list.is_null() {
            return self.put_bool(true);
        }
        self.put_bool(false)?;
        self.put_names(list.names())?;
        self.put_seq(list.tags(), |e, tag| e.put_u32(*tag))
    }

    pub fn put_names(&mut self, names: &[Name]) -> CodecResult<()> {
        self.put_seq(names, Self::put_name)
    }
}

impl CimDecoder<'_> {
    /// Decodes a parameter value. The name is not checked as a CIM name.
    pub fn get_param_value(&mut self) -> CodecResult<ParamValue> {
        Ok(ParamValue {
            name: self.get_string()?,
            value: self.get_value()?,
            is_typed: self.get_bool()?,
        })
    }

    pub fn get_param_values(&mut self) -> CodecResult<Vec<ParamValue>> {
        self.get_seq(Self::get_param_value)
    }

    /// Decodes a property list. The tag count is read on its own and may
    /// differ from the name count.
    pub fn get_property_list(&mut self) -> CodecResult<PropertyList> {
        if self.get_bool()? {
            return Ok(PropertyList::null());
        }
        let names = self.get_names()?;
        let tags = self.get_seq(Self::get_u32)?;
        Ok(PropertyList::from_parts(names, tags))
    }

    pub fn get_names(&mut self) -> CodecResult<Vec<Name>> {
        self.get_seq(Self::get_name)
    }
}
