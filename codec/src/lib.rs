//! Typed value and composite object codec for the cimbin format.
//!
//! This is the main codec crate. It ties together the slot cursor, the wire
//! framing constants and the CIM model to encode values, object paths,
//! qualifiers, properties, methods, instances, classes and property lists.
//!
//! # Features
//!
//! - Every CIM type, scalar and array, including typed nulls
//! - Framed (magic markers) or unframed profiles, chosen at runtime
//! - Swap-on-read for data produced with the other byte order
//! - Optional validation of strings, names, namespaces and hosts
//! - Self-describing object streams with an envelope header
//!
//! # Design Principles
//!
//! - **Correctness first** - Every decode either returns a complete value or an error.
//! - **Bounded decoding** - Counts and nesting are checked against [`CodecLimits`].
//! - **Deterministic** - Same inputs produce same outputs.
//!
//! # Example
//!
//! ```
//! use codec::{decode_instance, encode_instance, CodecOptions};
//! use model::{CimValue, Instance, Property};
//!
//! let mut instance = Instance::new("CIM_Foo");
//! instance.add_property(Property::new("Name", CimValue::from("abc"))).unwrap();
//!
//! let options = CodecOptions::default();
//! let bytes = encode_instance(&instance, &options).unwrap();
//! assert_eq!(decode_instance(&bytes, &options).unwrap(), instance);
//! ```

mod decoder;
mod encoder;
mod error;
mod instance;
mod limits;
mod method;
mod options;
mod param;
mod path;
mod property;
mod qualifier;
mod stream;
mod value;

use model::{CimObject, CimValue, Instance};

pub use decoder::CimDecoder;
pub use encoder::CimEncoder;
pub use error::{CodecError, CodecResult, LimitKind, NameKind};
pub use limits::{CodecLimits, MAX_DEPTH};
pub use options::CodecOptions;
pub use path::PathOptions;
pub use stream::{decode_object_stream, encode_object_stream, DecodedStream, StreamEntry};

/// Encodes a single value.
pub fn encode_value(value: &CimValue, options: &CodecOptions) -> CodecResult<Vec<u8>> {
    let mut encoder = CimEncoder::with_options(options);
    encoder.put_value(value)?;
    Ok(encoder.into_bytes())
}

/// Decodes a single value from the start of `bytes`.
pub fn decode_value(bytes: &[u8], options: &CodecOptions) -> CodecResult<CimValue> {
    CimDecoder::new(bytes, options).get_value()
}

/// Encodes a single instance.
pub fn encode_instance(instance: &Instance, options: &CodecOptions) -> CodecResult<Vec<u8>> {
    let mut encoder = CimEncoder::with_options(options);
    encoder.put_instance(instance)?;
    Ok(encoder.into_bytes())
}

/// Decodes a single instance from the start of `bytes`.
pub fn decode_instance(bytes: &[u8], options: &CodecOptions) -> CodecResult<Instance> {
    CimDecoder::new(bytes, options).get_instance()
}

/// Encodes a single object.
pub fn encode_object(object: &CimObject, options: &CodecOptions) -> CodecResult<Vec<u8>> {
    let mut encoder = CimEncoder::with_options(options);
    encoder.put_object(object)?;
    Ok(encoder.into_bytes())
}

/// Decodes a single object from the start of `bytes`.
pub fn decode_object(bytes: &[u8], options: &CodecOptions) -> CodecResult<CimObject> {
    CimDecoder::new(bytes, options).get_object()
}
