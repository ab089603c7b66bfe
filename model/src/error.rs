//! Model construction errors.

use std::fmt;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when building or mutating model values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Mutation attempted on an uninitialized instance or class.
    Uninitialized { what: &'static str },

    /// Host component of an object path is not a valid `host[:port]`.
    InvalidHost { host: String },

    /// Name is not a legal CIM name.
    IllegalName { name: String },

    /// Namespace is not a legal CIM namespace name.
    IllegalNamespace { name: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized { what } => write!(f, "{what} is uninitialized"),
            Self::InvalidHost { host } => write!(f, "invalid host: {host:?}"),
            Self::IllegalName { name } => write!(f, "illegal CIM name: {name:?}"),
            Self::IllegalNamespace { name } => write!(f, "illegal namespace name: {name:?}"),
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_subject() {
        let err = ModelError::Uninitialized { what: "instance" };
        assert_eq!(err.to_string(), "instance is uninitialized");

        let err = ModelError::InvalidHost {
            host: "bad host".to_owned(),
        };
        assert!(err.to_string().contains("bad host"));

        let err = ModelError::IllegalName {
            name: "9lives".to_owned(),
        };
        assert!(err.to_string().contains("9lives"));
    }
}
