//! Introspection and debugging tools for the cimbin format.
//!
//! This crate provides utilities for looking inside encoded object streams:
//!
//! - Summarize each object's kind, class and encoded size
//! - Decode objects to JSON or a readable MOF-like tree
//! - Hex dump slots with marker annotations
//! - Produce a sample stream to experiment with
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

mod dump;
mod inspect;
mod render;
mod sample;

pub use dump::hex_dump;
pub use inspect::{inspect_stream, InspectReport, ObjectSummary};
pub use render::{
    decode_stream, format_decode_pretty, format_value, DecodeOutput, DecodedObject, HeaderInfo,
};
pub use sample::sample_objects;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let objects = sample_objects();
        let bytes =
            codec::encode_object_stream(&objects, &codec::CodecOptions::default()).unwrap();
        let _: InspectReport = inspect_stream(&bytes, codec::CodecLimits::default()).unwrap();
        let _: DecodeOutput = decode_stream(&bytes, false, codec::CodecLimits::default()).unwrap();
        let _ = hex_dump(&bytes, 16);
    }
}
