//! Wire framing constants and stream envelope for the cimbin codec.
//!
//! This crate owns the parts of the binary format that are not CIM values
//! themselves: magic markers and the framing profile, flags words, the object
//! discriminator, producer byte order, and the stream envelope. It does not
//! know about instances or classes, only how their encodings are framed.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Marker constants and flag bits never change meaning.
//! - **Strict framing** - A framed reader rejects any marker mismatch; there is no resync.
//! - **No domain knowledge** - Value layouts live in the codec crate.

mod envelope;
mod error;
mod flags;
mod kind;
mod marker;

pub use envelope::{
    decode_stream_header, encode_stream_header, get_presence, put_presence, StreamHeader,
    SIGNATURE, STREAM_HEADER_SIZE, STREAM_VERSION,
};
pub use error::{FlagsKind, WireError, WireResult};
pub use flags::{PropertyFlags, ValueFlags};
pub use kind::{ByteOrder, ObjectKind};
pub use marker::{
    Framing, Marker, ABSENT_MAGIC, CLASS_MAGIC, INSTANCE_MAGIC, OBJECT_MAGIC, OBJECT_PATH_MAGIC,
    PRESENT_MAGIC, PROPERTY_MAGIC, VALUE_MAGIC,
};
