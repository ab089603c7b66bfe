//! Decode limits.

/// Hard ceiling on value nesting.
///
/// Decoding recurses once per nested value, so depth is bounded by the stack
/// rather than the input. The decoder clamps any configured `max_depth` to
/// this value.
pub const MAX_DEPTH: usize = 64;

/// Bounds applied while decoding untrusted input.
///
/// Every count read from the wire is checked against `max_elements` before
/// anything is allocated, and each non-null value nests one level deeper
/// towards `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum nesting of values (an embedded instance inside a property
    /// value inside an instance counts twice). Values above [`MAX_DEPTH`]
    /// behave as [`MAX_DEPTH`].
    pub max_depth: usize,
    /// Maximum number of elements behind one count slot.
    pub max_elements: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_elements: 1 << 20,
        }
    }
}

impl CodecLimits {
    /// Tight limits for tests and fuzzing.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_depth: 8,
            max_elements: 1024,
        }
    }

    /// No element bound beyond the input length; nesting stays at
    /// [`MAX_DEPTH`].
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_elements: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_deep_class_hierarchies() {
        let limits = CodecLimits::default();
        assert_eq!(limits.max_depth, 64);
        assert_eq!(limits.max_elements, 1 << 20);
    }

    #[test]
    fn testing_is_tighter_than_default() {
        let tight = CodecLimits::for_testing();
        let default = CodecLimits::default();
        assert!(tight.max_depth < default.max_depth);
        assert!(tight.max_elements < default.max_elements);
    }

    #[test]
    fn unlimited_keeps_depth_ceiling() {
        assert_eq!(
            CodecLimits::unlimited(),
            CodecLimits {
                max_depth: MAX_DEPTH,
                max_elements: usize::MAX,
            }
        );
    }
}
