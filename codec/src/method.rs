//! Method and parameter codec. No markers.

use model::{CimType, Method, Parameter};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::{CodecError, CodecResult};

impl CimEncoder {
    pub fn put_parameter(&mut self, parameter: &Parameter) -> CodecResult<()> {
        self.put_name(&parameter.name)?;
        self.put_u32(parameter.cim_type.tag())?;
        self.put_bool(parameter.is_array)?;
        self.put_u32(parameter.array_size)?;
        self.put_name(&parameter.reference_class_name)?;
        self.put_qualifier_list(&parameter.qualifiers)
    }

    pub fn put_method(&mut self, method: &Method) -> CodecResult<()> {
        self.put_name(&method.name)?;
        self.put_u32(method.cim_type.tag())?;
        self.put_name(&method.class_origin)?;
        self.put_bool(method.propagated)?;
        self.put_qualifier_list(&method.qualifiers)?;
        self.put_seq(&method.parameters, Self::put_parameter)
    }
}

impl CimDecoder<'_> {
    pub fn get_parameter(&mut self) -> CodecResult<Parameter> {
        Ok(Parameter {
            name: self.get_name()?,
            cim_type: self.get_type()?,
            is_array: self.get_bool()?,
            array_size: self.get_u32()?,
            reference_class_name: self.get_name()?,
            qualifiers: self.get_qualifier_list()?,
        })
    }

    pub fn get_method(&mut self) -> CodecResult<Method> {
        Ok(Method {
            name: self.get_name()?,
            cim_type: self.get_type()?,
            class_origin: self.get_name()?,
            propagated: self.get_bool()?,
            qualifiers: self.get_qualifier_list()?,
            parameters: self.get_seq(Self::get_parameter)?,
        })
    }

    fn get_type(&mut self) -> CodecResult<CimType> {
        let tag = self.get_u32()?;
        CimType::from_tag(tag).ok_or(CodecError::UnknownType { tag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CodecOptions;
    use model::{CimValue, Qualifier};

    fn sample() -> Method {
        let mut method = Method::new("RequestStateChange", CimType::Uint32)
            .with_parameter(Parameter::new("RequestedState", CimType::Uint16))
            .with_parameter(Parameter::new("Job", CimType::Reference).with_reference_class("CIM_Job"))
            .with_parameter(Parameter::new("Codes", CimType::Uint8).array(4));
        method.class_origin = model::Name::new("CIM_EnabledLogicalElement");
        method.propagated = true;
        method
            .qualifiers
            .push(Qualifier::new("Description", CimValue::from("change state")));
        method
    }

    #[test]
    fn method_roundtrip() {
        let method = sample();
        let mut encoder = CimEncoder::new();
        encoder.put_method(&method).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = CimDecoder::new(&bytes, &CodecOptions::strict());
        assert_eq!(decoder.get_method().unwrap(), method);
        assert!(!decoder.more());
    }

    #[test]
    fn parameter_with_unknown_type_fails() {
        let mut encoder = CimEncoder::new();
        encoder.put_name(&model::Name::new("P")).unwrap();
        encoder.put_u32(42).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = CimDecoder::new(&bytes, &CodecOptions::default());
        assert_eq!(
            decoder.get_parameter().unwrap_err(),
            CodecError::UnknownType { tag: 42 }
        );
    }
}
