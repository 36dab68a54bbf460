//! Decode-side resource limits.
//!
//! These limits are enforced while deserializing untrusted bytes.
//! Violations surface as codec errors carrying the actual and maximum
//! values; they are never silently clamped.

/// Resource limits applied while decoding array values.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum array length in elements (default: 1M)
    pub max_array_len: usize,

    /// Maximum string length in bytes (default: 16MB)
    pub max_string_bytes: usize,

    /// Maximum nesting depth of arrays within arrays (default: 128)
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_array_len: 1_000_000,
            max_string_bytes: 16 * 1024 * 1024, // 16MB
            max_nesting_depth: 128,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing.
    ///
    /// Useful for unit tests that exercise limit enforcement without
    /// building extremely large values.
    pub fn with_small_limits() -> Self {
        Limits {
            max_array_len: 100,
            max_string_bytes: 1000,
            max_nesting_depth: 10,
        }
    }
}
