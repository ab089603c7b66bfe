use codec::{
    decode_instance, decode_object, encode_instance, encode_object, CimDecoder, CodecError,
    CodecLimits, CodecOptions, LimitKind, MAX_DEPTH,
};
use cursor::SlotWriter;
use model::{
    CimObject, CimType, CimValue, Class, DateTime, Instance, KeyBinding, KeyBindingType, Method,
    ObjectPath, Parameter, Property, Qualifier,
};
use wire::Framing;

fn rich_instance() -> Instance {
    let path = ObjectPath::new("CIM_Foo")
        .with_host("host1:5988")
        .unwrap()
        .with_namespace("root/cimv2")
        .with_key_binding(KeyBinding::new("Name", "abc", KeyBindingType::String))
        .with_key_binding(KeyBinding::new("Id", "42", KeyBindingType::Numeric));

    let mut nested = Instance::new("CIM_Nested");
    nested
        .add_property(Property::new("When", CimValue::DateTime(DateTime::interval(9))))
        .unwrap();

    let properties = vec![
        Property::new("Name", CimValue::from("abc")).with_qualifier(Qualifier::new(
            "Key",
            CimValue::Boolean(true),
        )),
        Property::new("Values", CimValue::Uint16Array(vec![1, 2, 3])),
        Property::new("Child", CimValue::Instance(nested)).with_class_origin("CIM_Foo"),
        Property::new("Ref", CimValue::Reference(ObjectPath::new("CIM_Bar")))
            .with_reference_class("CIM_Bar"),
        Property::new("Missing", CimValue::null(CimType::Sint64, true)),
    ];
    Instance::from_parts(path, Default::default(), properties)
}

fn rich_class() -> Class {
    let mut class = Class::new("CIM_Foo");
    class.set_super_class("CIM_Base").unwrap();
    class
        .add_qualifier(Qualifier::new("Abstract", CimValue::Boolean(true)))
        .unwrap();
    class
        .add_property(Property::new("Name", CimValue::null(CimType::String, false)))
        .unwrap();
    class
        .add_method(
            Method::new("Stop", CimType::Uint32)
                .with_parameter(Parameter::new("Force", CimType::Boolean)),
        )
        .unwrap();
    class
}

#[test]
fn instance_truncated_at_every_offset_fails() {
    let options = CodecOptions::strict();
    let instance = rich_instance();
    let bytes = encode_instance(&instance, &options).unwrap();
    assert_eq!(decode_instance(&bytes, &options).unwrap(), instance);

    for cut in 0..bytes.len() {
        let result = decode_instance(&bytes[..cut], &options);
        assert!(result.is_err(), "decode succeeded with {cut} of {} bytes", bytes.len());
    }
}

#[test]
fn class_object_truncated_at_every_offset_fails() {
    let options = CodecOptions::default().with_limits(CodecLimits::for_testing());
    let object = CimObject::Class(rich_class());
    let bytes = encode_object(&object, &options).unwrap();
    assert_eq!(decode_object(&bytes, &options).unwrap(), object);

    for cut in 0..bytes.len() {
        assert!(decode_object(&bytes[..cut], &options).is_err(), "cut {cut}");
    }
}

#[test]
fn corrupted_marker_fails() {
    let options = CodecOptions::default();
    let mut bytes = encode_instance(&rich_instance(), &options).unwrap();
    bytes[0] ^= 0xFF;
    assert!(decode_instance(&bytes, &options).is_err());
}

/// Unframed value holding an instance whose only property holds the next
/// level, `levels` deep, ending in a `uint32`.
fn nested_instance_values(levels: usize) -> Vec<u8> {
    let mut writer = SlotWriter::new();
    for _ in 0..levels {
        writer.put_u32(0).unwrap();
        writer.put_u32(CimType::Instance.tag()).unwrap();
        writer.put_bool(true).unwrap();
        writer.put_bool(false).unwrap();
        writer.put_count(0).unwrap();
        writer.put_count(1).unwrap();
        writer.put_u32(0).unwrap();
        writer.put_string(&[u16::from(b'P')]).unwrap();
    }
    writer.put_u32(0).unwrap();
    writer.put_u32(CimType::Uint32.tag()).unwrap();
    writer.put_u32(7).unwrap();
    writer.into_bytes()
}

#[test]
fn deep_nesting_fails_under_unlimited_limits() {
    let bytes = nested_instance_values(10_000);
    let options = CodecOptions::default()
        .with_framing(Framing::Unframed)
        .with_limits(CodecLimits::unlimited());
    let err = CimDecoder::new(&bytes, &options).get_value().unwrap_err();
    assert_eq!(
        err,
        CodecError::LimitsExceeded {
            kind: LimitKind::Depth,
            limit: MAX_DEPTH,
            actual: MAX_DEPTH + 1,
        }
    );
}

#[test]
fn nesting_at_the_ceiling_decodes() {
    let bytes = nested_instance_values(MAX_DEPTH - 1);
    let options = CodecOptions::default()
        .with_framing(Framing::Unframed)
        .with_limits(CodecLimits::unlimited());
    let mut decoder = CimDecoder::new(&bytes, &options);
    let mut value = decoder.get_value().unwrap();
    assert!(!decoder.more());
    for _ in 0..MAX_DEPTH - 1 {
        let CimValue::Instance(instance) = value else {
            panic!("expected an embedded instance");
        };
        value = instance.properties()[0].value.clone();
    }
    assert_eq!(value, CimValue::Uint32(7));
}
