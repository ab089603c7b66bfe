//! Error types for codec operations.

use std::fmt;

use cursor::SlotError;
use wire::WireError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding CIM values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Cursor or framing error (truncation, marker mismatch, bad flags,
    /// capacity exhaustion).
    Wire(WireError),

    /// A type tag outside the seventeen CIM types.
    UnknownType { tag: u32 },

    /// A key binding type tag outside `0..=3`.
    UnknownKeyBindingType { tag: u32 },

    /// A decoded name, namespace or host failed validation.
    InvalidName { kind: NameKind, name: String },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Which kind of name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Name,
    Namespace,
    Host,
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Nested composites (values inside instances inside values).
    Depth,
    /// Elements announced by a single count slot.
    Elements,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(err) => write!(f, "wire error: {err}"),
            Self::UnknownType { tag } => write!(f, "unknown CIM type tag {tag}"),
            Self::UnknownKeyBindingType { tag } => {
                write!(f, "unknown key binding type tag {tag}")
            }
            Self::InvalidName { kind, name } => write!(f, "invalid {kind}: {name:?}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Namespace => "namespace",
            Self::Host => "host",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Depth => "nesting depth",
            Self::Elements => "element count",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WireError> for CodecError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<SlotError> for CodecError {
    fn from(err: SlotError) -> Self {
        Self::Wire(WireError::Slot(err))
    }
}

impl CodecError {
    /// Returns `true` if the input ended before the value did.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(
            self,
            Self::Wire(WireError::Slot(SlotError::UnexpectedEof { .. }))
        )
    }
}
