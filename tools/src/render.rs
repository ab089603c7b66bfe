//! Decoding streams into serializable output and a readable tree.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use codec::{decode_object_stream, CodecLimits};
use model::{CimObject, CimValue, Class, Instance, Method, Property, QualifierList};
use serde::Serialize;
use wire::{ByteOrder, StreamHeader};

/// Stream header in printable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub version: u16,
    pub byte_order: &'static str,
    pub framing: &'static str,
}

impl From<StreamHeader> for HeaderInfo {
    fn from(header: StreamHeader) -> Self {
        Self {
            version: header.version,
            byte_order: match header.byte_order {
                ByteOrder::Little => "little",
                ByteOrder::Big => "big",
            },
            framing: if header.framing.is_framed() {
                "framed"
            } else {
                "unframed"
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodedObject {
    pub offset: usize,
    pub size: usize,
    pub object: CimObject,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeOutput {
    pub header: HeaderInfo,
    pub objects: Vec<DecodedObject>,
}

/// Decodes every object in a stream.
pub fn decode_stream(bytes: &[u8], validate: bool, limits: CodecLimits) -> Result<DecodeOutput> {
    let stream = decode_object_stream(bytes, validate, limits).context("decode object stream")?;
    let objects = stream
        .entries
        .into_iter()
        .map(|entry| DecodedObject {
            offset: entry.offset,
            size: entry.size,
            object: entry.object,
        })
        .collect();
    Ok(DecodeOutput {
        header: stream.header.into(),
        objects,
    })
}

/// Renders decoded objects as an indented, MOF-flavoured tree.
#[must_use]
pub fn format_decode_pretty(output: &DecodeOutput) -> String {
    let mut out = String::new();
    let header = &output.header;
    let _ = writeln!(
        out,
        "stream v{} ({}-endian, {}): {} objects",
        header.version,
        header.byte_order,
        header.framing,
        output.objects.len()
    );
    for (index, decoded) in output.objects.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{index}] offset {} ({} bytes)",
            decoded.offset, decoded.size
        );
        write_object(&mut out, &decoded.object, 1);
    }
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_object(out: &mut String, object: &CimObject, depth: usize) {
    match object {
        CimObject::Instance(instance) if !instance.is_uninitialized() => {
            write_instance(out, instance, depth);
        }
        CimObject::Class(class) if !class.is_uninitialized() => write_class(out, class, depth),
        _ => {
            indent(out, depth);
            out.push_str("<uninitialized>\n");
        }
    }
}

fn write_qualifiers(out: &mut String, qualifiers: Option<&QualifierList>, depth: usize) {
    let Some(qualifiers) = qualifiers.filter(|q| !q.is_empty()) else {
        return;
    };
    let rendered: Vec<String> = qualifiers
        .iter()
        .map(|q| format!("{}({})", q.name, format_value(&q.value)))
        .collect();
    indent(out, depth);
    let _ = writeln!(out, "[{}]", rendered.join(", "));
}

fn write_instance(out: &mut String, instance: &Instance, depth: usize) {
    write_qualifiers(out, instance.qualifiers(), depth);
    indent(out, depth);
    match instance.path() {
        Some(path) if !path.key_bindings().is_empty() || !path.host().is_empty() => {
            let _ = writeln!(out, "instance of {path} {{");
        }
        _ => {
            let class_name = instance
                .class_name()
                .map(ToString::to_string)
                .unwrap_or_default();
            let _ = writeln!(out, "instance of {class_name} {{");
        }
    }
    for property in instance.properties() {
        write_property(out, property, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

fn write_class(out: &mut String, class: &Class, depth: usize) {
    write_qualifiers(out, class.qualifiers(), depth);
    indent(out, depth);
    let class_name = class
        .class_name()
        .map(ToString::to_string)
        .unwrap_or_default();
    match class.super_class().filter(|name| !name.is_null()) {
        Some(super_class) => {
            let _ = writeln!(out, "class {class_name} : {super_class} {{");
        }
        None => {
            let _ = writeln!(out, "class {class_name} {{");
        }
    }
    for property in class.properties() {
        write_property(out, property, depth + 1);
    }
    for method in class.methods() {
        write_method(out, method, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

fn write_property(out: &mut String, property: &Property, depth: usize) {
    write_qualifiers(out, Some(&property.qualifiers), depth);
    indent(out, depth);
    let value = &property.value;
    let array = if value.is_array() { "[]" } else { "" };
    let _ = write!(out, "{} {}{array}", value.cim_type(), property.name);
    if !property.class_origin.is_null() {
        let _ = write!(out, " (from {})", property.class_origin);
    }
    match value {
        CimValue::Object(CimObject::Instance(instance))
        | CimValue::Instance(instance)
            if !instance.is_uninitialized() =>
        {
            out.push_str(" =\n");
            write_instance(out, instance, depth + 1);
        }
        _ => {
            let _ = writeln!(out, " = {};", format_value(value));
        }
    }
}

fn write_method(out: &mut String, method: &Method, depth: usize) {
    write_qualifiers(out, Some(&method.qualifiers), depth);
    indent(out, depth);
    let params: Vec<String> = method
        .parameters
        .iter()
        .map(|p| {
            let array = if p.is_array { "[]" } else { "" };
            format!("{} {}{array}", p.cim_type, p.name)
        })
        .collect();
    let _ = writeln!(
        out,
        "{} {}({});",
        method.cim_type,
        method.name,
        params.join(", ")
    );
}

fn join<T>(items: &[T], f: impl Fn(&T) -> String) -> String {
    let rendered: Vec<String> = items.iter().map(f).collect();
    format!("{{{}}}", rendered.join(", "))
}

fn quote(text: &str) -> String {
    format!("{text:?}")
}

/// Formats a value the way it would appear on the right of `=` in MOF.
#[must_use]
pub fn format_value(value: &CimValue) -> String {
    match value {
        CimValue::Null { .. } => "NULL".to_string(),
        CimValue::Boolean(v) => v.to_string(),
        CimValue::Uint8(v) => v.to_string(),
        CimValue::Sint8(v) => v.to_string(),
        CimValue::Uint16(v) => v.to_string(),
        CimValue::Sint16(v) => v.to_string(),
        CimValue::Uint32(v) => v.to_string(),
        CimValue::Sint32(v) => v.to_string(),
        CimValue::Uint64(v) => v.to_string(),
        CimValue::Sint64(v) => v.to_string(),
        CimValue::Real32(v) => v.to_string(),
        CimValue::Real64(v) => v.to_string(),
        CimValue::Char16(v) => format_char16(*v),
        CimValue::String(v) => quote(&v.to_string_lossy()),
        CimValue::DateTime(v) => quote(&v.to_string()),
        CimValue::Reference(v) => quote(&v.to_string()),
        CimValue::Object(v) => format_object(v),
        CimValue::Instance(v) => format_instance(v),
        CimValue::BooleanArray(v) => join(v, ToString::to_string),
        CimValue::Uint8Array(v) => join(v, ToString::to_string),
        CimValue::Sint8Array(v) => join(v, ToString::to_string),
        CimValue::Uint16Array(v) => join(v, ToString::to_string),
        CimValue::Sint16Array(v) => join(v, ToString::to_string),
        CimValue::Uint32Array(v) => join(v, ToString::to_string),
        CimValue::Sint32Array(v) => join(v, ToString::to_string),
        CimValue::Uint64Array(v) => join(v, ToString::to_string),
        CimValue::Sint64Array(v) => join(v, ToString::to_string),
        CimValue::Real32Array(v) => join(v, ToString::to_string),
        CimValue::Real64Array(v) => join(v, ToString::to_string),
        CimValue::Char16Array(v) => join(v, |c| format_char16(*c)),
        CimValue::StringArray(v) => join(v, |s| quote(&s.to_string_lossy())),
        CimValue::DateTimeArray(v) => join(v, |d| quote(&d.to_string())),
        CimValue::ReferenceArray(v) => join(v, |p| quote(&p.to_string())),
        CimValue::ObjectArray(v) => join(v, format_object),
        CimValue::InstanceArray(v) => join(v, format_instance),
    }
}

fn format_char16(unit: u16) -> String {
    char::from_u32(u32::from(unit)).map_or_else(|| format!("'\\x{unit:04X}'"), |c| format!("{c:?}"))
}

fn format_instance(instance: &Instance) -> String {
    instance.class_name().map_or_else(
        || "<uninitialized>".to_string(),
        |name| format!("instance of {name}"),
    )
}

fn format_object(object: &CimObject) -> String {
    match object {
        CimObject::Instance(instance) => format_instance(instance),
        CimObject::Class(class) => class.class_name().map_or_else(
            || "<uninitialized>".to_string(),
            |name| format!("class {name}"),
        ),
        CimObject::Uninitialized => "<uninitialized>".to_string(),
    }
}
