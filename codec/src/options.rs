//! Encoder and decoder configuration.

use wire::{ByteOrder, Framing};

use crate::limits::CodecLimits;

/// Runtime options shared by encoder and decoder.
///
/// Encoders only look at `framing`; the other fields configure decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    /// Whether composites carry magic markers.
    pub framing: Framing,
    /// Validate strings, names, namespaces and hosts on decode.
    pub validate: bool,
    /// Byte order of the producer; decoding swaps when it is not native.
    pub byte_order: ByteOrder,
    /// Decode limits.
    pub limits: CodecLimits,
}

impl CodecOptions {
    /// Framed, validating, native order, default limits.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_validation(true)
    }

    #[must_use]
    pub const fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    #[must_use]
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: CodecLimits) -> Self {
        self.limits = limits;
        self
    }
}
