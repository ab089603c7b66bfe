use codec::{decode_value, encode_value, CodecOptions};
use model::{
    CimObject, CimString, CimType, CimValue, Class, DateTime, Instance, KeyBinding,
    KeyBindingType, ObjectPath, Property,
};
use wire::Framing;

fn sample_path() -> ObjectPath {
    ObjectPath::new("CIM_Foo")
        .with_host("host1:5988")
        .unwrap()
        .with_namespace("root/cimv2")
        .with_key_binding(KeyBinding::new("Name", "abc", KeyBindingType::String))
}

fn sample_instance() -> Instance {
    let mut instance = Instance::new("CIM_Foo");
    instance
        .add_property(Property::new("Name", CimValue::from("abc")))
        .unwrap();
    instance
        .add_property(Property::new("Size", CimValue::Uint64(1 << 40)))
        .unwrap();
    instance
}

/// A non-null scalar, a non-empty array and an empty array for every type.
fn samples(cim_type: CimType) -> Vec<CimValue> {
    match cim_type {
        CimType::Boolean => vec![
            CimValue::Boolean(true),
            CimValue::BooleanArray(vec![true, false, true]),
            CimValue::BooleanArray(Vec::new()),
        ],
        CimType::Uint8 => vec![
            CimValue::Uint8(0xAB),
            CimValue::Uint8Array(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
            CimValue::Uint8Array(Vec::new()),
        ],
        CimType::Sint8 => vec![
            CimValue::Sint8(-7),
            CimValue::Sint8Array(vec![-128, 0, 127]),
            CimValue::Sint8Array(Vec::new()),
        ],
        CimType::Uint16 => vec![
            CimValue::Uint16(0xBEEF),
            CimValue::Uint16Array(vec![1, 0xFFFF, 3]),
            CimValue::Uint16Array(Vec::new()),
        ],
        CimType::Sint16 => vec![
            CimValue::Sint16(-12345),
            CimValue::Sint16Array(vec![i16::MIN, i16::MAX]),
            CimValue::Sint16Array(Vec::new()),
        ],
        CimType::Uint32 => vec![
            CimValue::Uint32(0xDEAD_BEEF),
            CimValue::Uint32Array(vec![1, 2, 3]),
            CimValue::Uint32Array(Vec::new()),
        ],
        CimType::Sint32 => vec![
            CimValue::Sint32(-1),
            CimValue::Sint32Array(vec![i32::MIN, 0, i32::MAX]),
            CimValue::Sint32Array(Vec::new()),
        ],
        CimType::Uint64 => vec![
            CimValue::Uint64(u64::MAX),
            CimValue::Uint64Array(vec![0, u64::MAX]),
            CimValue::Uint64Array(Vec::new()),
        ],
        CimType::Sint64 => vec![
            CimValue::Sint64(i64::MIN),
            CimValue::Sint64Array(vec![-1, 1]),
            CimValue::Sint64Array(Vec::new()),
        ],
        CimType::Real32 => vec![
            CimValue::Real32(1.5),
            CimValue::Real32Array(vec![0.25, -3.0, f32::MAX]),
            CimValue::Real32Array(Vec::new()),
        ],
        CimType::Real64 => vec![
            CimValue::Real64(-2.75),
            CimValue::Real64Array(vec![f64::MIN_POSITIVE, 1e300]),
            CimValue::Real64Array(Vec::new()),
        ],
        CimType::Char16 => vec![
            CimValue::Char16(u16::from(b'x')),
            CimValue::Char16Array(vec![0x41, 0x263A]),
            CimValue::Char16Array(Vec::new()),
        ],
        CimType::String => vec![
            CimValue::from("hello, world"),
            CimValue::StringArray(vec![
                CimString::from("a"),
                CimString::new(),
                CimString::from("\u{1F600} astral"),
            ]),
            CimValue::StringArray(Vec::new()),
        ],
        CimType::DateTime => vec![
            CimValue::DateTime(DateTime::timestamp(63_000_000_000_000_000, 120)),
            CimValue::DateTimeArray(vec![
                DateTime::interval(5),
                DateTime::timestamp(1, -60).with_wildcards(6),
            ]),
            CimValue::DateTimeArray(Vec::new()),
        ],
        CimType::Reference => vec![
            CimValue::Reference(sample_path()),
            CimValue::ReferenceArray(vec![sample_path(), ObjectPath::new("CIM_Bar")]),
            CimValue::ReferenceArray(Vec::new()),
        ],
        CimType::Object => vec![
            CimValue::Object(CimObject::Instance(sample_instance())),
            CimValue::ObjectArray(vec![
                CimObject::Class(Class::new("CIM_Foo")),
                CimObject::Instance(sample_instance()),
            ]),
            CimValue::ObjectArray(Vec::new()),
        ],
        CimType::Instance => vec![
            CimValue::Instance(sample_instance()),
            CimValue::InstanceArray(vec![sample_instance(), sample_instance()]),
            CimValue::InstanceArray(Vec::new()),
        ],
    }
}

fn roundtrip(value: &CimValue, options: &CodecOptions) -> CimValue {
    let bytes = encode_value(value, options).unwrap();
    assert_eq!(bytes.len() % 8, 0, "unaligned encoding of {value:?}");
    decode_value(&bytes, options).unwrap()
}

#[test]
fn every_type_roundtrips() {
    for framing in [Framing::Framed, Framing::Unframed] {
        let options = CodecOptions::strict().with_framing(framing);
        for cim_type in CimType::ALL {
            for value in samples(cim_type) {
                assert_eq!(value.cim_type(), cim_type);
                assert_eq!(roundtrip(&value, &options), value);
            }
        }
    }
}

#[test]
fn every_type_null_roundtrips() {
    let options = CodecOptions::default();
    for cim_type in CimType::ALL {
        for is_array in [false, true] {
            let value = CimValue::null(cim_type, is_array);
            let decoded = roundtrip(&value, &options);
            assert_eq!(decoded, value);
            assert_eq!(decoded.cim_type(), cim_type);
            assert_eq!(decoded.is_array(), is_array);
        }
    }
}

#[test]
fn empty_arrays_are_not_null() {
    let options = CodecOptions::default();
    let decoded = roundtrip(&CimValue::Uint32Array(Vec::new()), &options);
    assert!(!decoded.is_null());
    assert_eq!(decoded.array_len(), Some(0));
}

#[test]
fn nan_payload_is_preserved() {
    let options = CodecOptions::default();
    let bits = 0x7FC0_0001u32;
    let decoded = roundtrip(&CimValue::Real32(f32::from_bits(bits)), &options);
    match decoded {
        CimValue::Real32(v) => assert_eq!(v.to_bits(), bits),
        other => panic!("unexpected {other:?}"),
    }
}
