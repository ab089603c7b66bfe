//! Self-describing object streams.
//!
//! A stream is a [`StreamHeader`] followed by objects, each preceded by a
//! PRESENT sentinel, and terminated by an ABSENT sentinel. The header tells
//! the reader the producer's byte order and framing, so no options need to
//! be agreed out of band.

use cursor::{SlotReader, SlotWriter};
use model::CimObject;
use wire::{decode_stream_header, encode_stream_header, get_presence, put_presence, StreamHeader};

use crate::decoder::CimDecoder;
use crate::encoder::CimEncoder;
use crate::error::CodecResult;
use crate::limits::CodecLimits;
use crate::options::CodecOptions;

/// One decoded object and where it sat in the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEntry {
    pub object: CimObject,
    /// Byte offset of the object's encoding (after its sentinel).
    pub offset: usize,
    /// Encoded size in bytes.
    pub size: usize,
}

/// A decoded stream.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedStream {
    pub header: StreamHeader,
    pub entries: Vec<StreamEntry>,
}

/// Encodes `objects` as a native-order stream with the given framing.
pub fn encode_object_stream(objects: &[CimObject], options: &CodecOptions) -> CodecResult<Vec<u8>> {
    let mut writer = SlotWriter::new();
    encode_stream_header(&StreamHeader::native(options.framing), &mut writer)?;

    let mut encoder = CimEncoder::from_writer(writer, options.framing);
    for object in objects {
        put_presence(encoder.writer_mut(), true)?;
        encoder.put_object(object)?;
    }
    put_presence(encoder.writer_mut(), false)?;
    Ok(encoder.into_bytes())
}

/// Decodes a stream written by [`encode_object_stream`].
///
/// Byte order and framing come from the header; `validate` and `limits` are
/// the caller's choice.
pub fn decode_object_stream(
    bytes: &[u8],
    validate: bool,
    limits: CodecLimits,
) -> CodecResult<DecodedStream> {
    let mut reader = SlotReader::new(bytes);
    let header = decode_stream_header(&mut reader)?;
    let options = CodecOptions {
        framing: header.framing,
        validate,
        byte_order: header.byte_order,
        limits,
    };
    let reader = reader
        .with_swap(header.byte_order.needs_swap())
        .with_validation(validate);
    let mut decoder = CimDecoder::from_reader(reader, &options);

    let mut entries = Vec::new();
    while get_presence(decoder.reader_mut())? {
        let offset = decoder.position();
        let object = decoder.get_object()?;
        entries.push(StreamEntry {
            object,
            offset,
            size: decoder.position() - offset,
        });
    }
    Ok(DecodedStream { header, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use model::{CimValue, Class, Instance, Property};
    use wire::{ByteOrder, Framing, WireError};

    fn objects() -> Vec<CimObject> {
        let mut instance = Instance::new("CIM_Foo");
        instance
            .add_property(Property::new("Name", CimValue::from("abc")))
            .unwrap();
        vec![
            CimObject::Instance(instance),
            CimObject::Class(Class::new("CIM_Foo")),
        ]
    }

    #[test]
    fn stream_roundtrip() {
        for framing in [Framing::Framed, Framing::Unframed] {
            let options = CodecOptions::default().with_framing(framing);
            let bytes = encode_object_stream(&objects(), &options).unwrap();
            let stream = decode_object_stream(&bytes, true, CodecLimits::default()).unwrap();
            assert_eq!(stream.header.framing, framing);
            assert_eq!(stream.header.byte_order, ByteOrder::native());
            let decoded: Vec<_> = stream.entries.iter().map(|e| e.object.clone()).collect();
            assert_eq!(decoded, objects());
            assert_eq!(stream.entries[0].offset, 16);
        }
    }

    #[test]
    fn empty_stream() {
        let bytes = encode_object_stream(&[], &CodecOptions::default()).unwrap();
        assert_eq!(bytes.len(), 16);
        let stream = decode_object_stream(&bytes, false, CodecLimits::default()).unwrap();
        assert!(stream.entries.is_empty());
    }

    #[test]
    fn missing_terminator_is_truncation() {
        let bytes = encode_object_stream(&objects(), &CodecOptions::default()).unwrap();
        let cut = &bytes[..bytes.len() - 8];
        let err = decode_object_stream(cut, false, CodecLimits::default()).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn bad_signature() {
        let mut bytes = encode_object_stream(&[], &CodecOptions::default()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            decode_object_stream(&bytes, false, CodecLimits::default()).unwrap_err(),
            CodecError::Wire(WireError::InvalidHeader { .. })
        ));
    }
}
