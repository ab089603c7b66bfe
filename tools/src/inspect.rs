//! Per-object size and shape summaries of an object stream.

use anyhow::{Context, Result};
use codec::{decode_object_stream, CodecLimits};
use model::CimObject;
use wire::StreamHeader;

/// Summary of one top-level object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub index: usize,
    pub offset: usize,
    pub size: usize,
    pub kind: &'static str,
    pub class_name: String,
    pub properties: usize,
    pub methods: usize,
}

/// Result of [`inspect_stream`].
#[derive(Debug, Clone)]
pub struct InspectReport {
    pub header: StreamHeader,
    pub total_len: usize,
    pub objects: Vec<ObjectSummary>,
}

impl InspectReport {
    /// Bytes spent on objects, excluding the header and sentinels.
    #[must_use]
    pub fn object_bytes(&self) -> usize {
        self.objects.iter().map(|object| object.size).sum()
    }
}

/// Decodes a stream without validation and summarizes every object.
pub fn inspect_stream(bytes: &[u8], limits: CodecLimits) -> Result<InspectReport> {
    let stream = decode_object_stream(bytes, false, limits).context("decode object stream")?;
    let objects = stream
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| summarize(index, entry.offset, entry.size, &entry.object))
        .collect();
    Ok(InspectReport {
        header: stream.header,
        total_len: bytes.len(),
        objects,
    })
}

fn summarize(index: usize, offset: usize, size: usize, object: &CimObject) -> ObjectSummary {
    let (kind, class_name, properties, methods) = match object {
        CimObject::Instance(instance) if !instance.is_uninitialized() => (
            "instance",
            instance.class_name().map(ToString::to_string),
            instance.properties().len(),
            0,
        ),
        CimObject::Class(class) if !class.is_uninitialized() => (
            "class",
            class.class_name().map(ToString::to_string),
            class.properties().len(),
            class.methods().len(),
        ),
        _ => ("uninitialized", None, 0, 0),
    };
    ObjectSummary {
        index,
        offset,
        size,
        kind,
        class_name: class_name.unwrap_or_default(),
        properties,
        methods,
    }
}
