//! Encoder state shared by the per-type `put_*` families.

use cursor::SlotWriter;
use model::{CimString, Name, NamespaceName};
use wire::{Framing, Marker};

use crate::error::CodecResult;
use crate::options::CodecOptions;

/// Writes CIM values into a growing slot buffer.
///
/// The encoder always writes native byte order. The only failures are
/// resource exhaustion in the underlying writer.
#[derive(Debug, Default)]
pub struct CimEncoder {
    pub(crate) writer: SlotWriter,
    framing: Framing,
}

impl CimEncoder {
    /// Creates a framed encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder using the framing from `options`.
    #[must_use]
    pub fn with_options(options: &CodecOptions) -> Self {
        Self {
            writer: SlotWriter::new(),
            framing: options.framing,
        }
    }

    /// Creates an encoder that appends to an existing writer.
    #[must_use]
    pub fn from_writer(writer: SlotWriter, framing: Framing) -> Self {
        Self { writer, framing }
    }

    #[must_use]
    pub const fn framing(&self) -> Framing {
        self.framing
    }

    /// Bytes written so far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.writer.size()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.writer.capacity()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.writer.as_bytes()
    }

    /// Direct access to the slot writer, for interleaving raw slots.
    pub fn writer_mut(&mut self) -> &mut SlotWriter {
        &mut self.writer
    }

    /// Releases the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    /// Releases the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> SlotWriter {
        self.writer
    }

    pub fn put_bool(&mut self, value: bool) -> CodecResult<()> {
        self.writer.put_bool(value)?;
        Ok(())
    }

    pub fn put_u32(&mut self, value: u32) -> CodecResult<()> {
        self.writer.put_u32(value)?;
        Ok(())
    }

    pub fn put_string(&mut self, value: &CimString) -> CodecResult<()> {
        self.writer.put_string(value.units())?;
        Ok(())
    }

    pub fn put_name(&mut self, name: &Name) -> CodecResult<()> {
        self.writer.put_string(name.units())?;
        Ok(())
    }

    pub fn put_namespace(&mut self, namespace: &NamespaceName) -> CodecResult<()> {
        self.writer.put_string(namespace.units())?;
        Ok(())
    }

    pub(crate) fn put_marker(&mut self, marker: Marker) -> CodecResult<()> {
        self.framing.put_marker(&mut self.writer, marker)?;
        Ok(())
    }

    pub(crate) fn put_count(&mut self, count: usize) -> CodecResult<()> {
        self.writer.put_count(count)?;
        Ok(())
    }

    /// Writes a count slot followed by each element.
    pub(crate) fn put_seq<T>(
        &mut self,
        items: &[T],
        mut put: impl FnMut(&mut Self, &T) -> CodecResult<()>,
    ) -> CodecResult<()> {
        self.put_count(items.len())?;
        for item in items {
            put(self, item)?;
        }
        Ok(())
    }
}
