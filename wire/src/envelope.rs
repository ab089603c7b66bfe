//! Stream envelope: a one-slot header announcing byte order and framing,
//! plus the PRESENT/ABSENT sentinels for optional top-level values.

use cursor::{SlotReader, SlotWriter, SLOT_SIZE};

use crate::error::{WireError, WireResult};
use crate::kind::ByteOrder;
use crate::marker::{Framing, ABSENT_MAGIC, PRESENT_MAGIC};

/// Signature at the start of every stream.
pub const SIGNATURE: [u8; 4] = *b"CIMB";

/// Current stream envelope version.
pub const STREAM_VERSION: u16 = 1;

/// Stream header size in bytes (one slot).
pub const STREAM_HEADER_SIZE: usize = SLOT_SIZE;

const ORDER_LITTLE: u8 = b'L';
const ORDER_BIG: u8 = b'B';
const FRAMING_UNFRAMED: u8 = 0;
const FRAMING_FRAMED: u8 = 1;

/// Header describing how the rest of a stream was produced.
///
/// The header is byte-order independent: it is a fixed byte sequence that a
/// consumer reads before it knows whether to swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHeader {
    /// Envelope version.
    pub version: u16,
    /// Byte order of every slot that follows.
    pub byte_order: ByteOrder,
    /// Whether composites carry magic markers.
    pub framing: Framing,
}

impl StreamHeader {
    /// Creates a header for data produced on this host.
    #[must_use]
    pub const fn native(framing: Framing) -> Self {
        Self {
            version: STREAM_VERSION,
            byte_order: ByteOrder::native(),
            framing,
        }
    }
}

impl Default for StreamHeader {
    fn default() -> Self {
        Self::native(Framing::Framed)
    }
}

/// Encodes a stream header into `out`.
pub fn encode_stream_header(header: &StreamHeader, out: &mut SlotWriter) -> WireResult<()> {
    let mut slot = [0u8; STREAM_HEADER_SIZE];
    slot[0..4].copy_from_slice(&SIGNATURE);
    slot[4] = match header.byte_order {
        ByteOrder::Little => ORDER_LITTLE,
        ByteOrder::Big => ORDER_BIG,
    };
    slot[5] = match header.framing {
        Framing::Unframed => FRAMING_UNFRAMED,
        Framing::Framed => FRAMING_FRAMED,
    };
    slot[6..8].copy_from_slice(&header.version.to_le_bytes());
    out.put_bytes(&slot)?;
    Ok(())
}

/// Decodes a stream header from the start of `reader`.
///
/// On failure the reader does not move.
pub fn decode_stream_header(reader: &mut SlotReader<'_>) -> WireResult<StreamHeader> {
    let mut probe = reader.clone();
    let header = decode_header_slot(&mut probe)?;
    *reader = probe;
    Ok(header)
}

fn decode_header_slot(reader: &mut SlotReader<'_>) -> WireResult<StreamHeader> {
    let slot = reader.get_bytes(STREAM_HEADER_SIZE)?;

    let mut signature = [0u8; 4];
    signature.copy_from_slice(&slot[0..4]);
    if signature != SIGNATURE {
        return Err(WireError::InvalidHeader { found: signature });
    }

    let byte_order = match slot[4] {
        ORDER_LITTLE => ByteOrder::Little,
        ORDER_BIG => ByteOrder::Big,
        found => return Err(WireError::InvalidByteOrder { found }),
    };
    let framing = match slot[5] {
        FRAMING_UNFRAMED => Framing::Unframed,
        FRAMING_FRAMED => Framing::Framed,
        found => return Err(WireError::InvalidFraming { found }),
    };
    let version = u16::from_le_bytes([slot[6], slot[7]]);
    if version != STREAM_VERSION {
        return Err(WireError::UnsupportedVersion { found: version });
    }

    Ok(StreamHeader {
        version,
        byte_order,
        framing,
    })
}

/// Writes the PRESENT or ABSENT sentinel.
pub fn put_presence(writer: &mut SlotWriter, present: bool) -> WireResult<()> {
    writer.put_u32(if present { PRESENT_MAGIC } else { ABSENT_MAGIC })?;
    Ok(())
}

/// Reads a PRESENT or ABSENT sentinel.
pub fn get_presence(reader: &mut SlotReader<'_>) -> WireResult<bool> {
    match reader.get_u32()? {
        PRESENT_MAGIC => Ok(true),
        ABSENT_MAGIC => Ok(false),
        found => Err(WireError::InvalidPresence { found }),
    }
}
