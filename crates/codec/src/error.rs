//! Error types for the value codecs.
//!
//! Every decode failure carries enough context (type name, attempted
//! length, limit) for the enclosing storage layer to log or surface a
//! deserialization failure. Nothing is swallowed or substituted with a
//! default value.

use std::io;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec-level errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Input ended before the value was fully decoded.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A length-prefixed string was not valid UTF-8.
    #[error("invalid UTF-8 in length-prefixed string")]
    InvalidString,

    /// A variable-length integer did not fit in 32 bits.
    #[error("varint exceeds 32 bits")]
    VarIntOverflow,

    /// Unknown value tag byte.
    #[error("unknown value tag: {0:#04x}")]
    UnknownTag(u8),

    /// Registry id not present in the type registry.
    #[error("unknown registry id: {0:#04x}")]
    UnknownRegistryId(u8),

    /// The fallback type name read from the stream is not a permitted
    /// external descriptor. Treated as stream corruption or a missing
    /// capability at the call site.
    #[error("unresolvable component type: {name}")]
    UnresolvableType {
        /// The offending fully-qualified descriptor name.
        name: String,
    },

    /// An array of the resolved type and decoded length cannot be
    /// constructed.
    #[error("cannot allocate {type_name} array of length {length}: {reason}")]
    AllocationFailure {
        /// Component type of the attempted allocation.
        type_name: String,
        /// Decoded element count.
        length: u64,
        /// Why the allocation was refused.
        reason: String,
    },

    /// A decoded string exceeds the configured limit.
    #[error("string too long: {actual} bytes exceeds maximum {max}")]
    StringTooLong {
        /// Decoded byte length.
        actual: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Nested arrays exceed the configured depth limit.
    #[error("nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Depth reached while decoding.
        actual: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A value's declared kind does not match its backing storage.
    /// This is a programming-contract violation by the caller.
    #[error("malformed value: {0}")]
    MalformedValue(String),

    /// An entry point outside this codec's contract was invoked.
    /// Programming-contract violation, fatal to the calling operation.
    #[error("operation not supported: {0}")]
    UnsupportedOperation(&'static str),
}

// Reads only ever come from in-memory slices, so the sole reachable
// I/O failure is a short read.
impl From<io::Error> for CodecError {
    fn from(_: io::Error) -> Self {
        CodecError::UnexpectedEof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_context() {
        let err = CodecError::AllocationFailure {
            type_name: "i32".to_string(),
            length: 9_999_999,
            reason: "length exceeds limit 1000000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("i32"));
        assert!(msg.contains("9999999"));
        assert!(msg.contains("1000000"));
    }

    #[test]
    fn test_error_display_unresolvable() {
        let err = CodecError::UnresolvableType {
            name: "com.example.Widget".to_string(),
        };
        assert!(err.to_string().contains("com.example.Widget"));
    }

    #[test]
    fn test_io_error_maps_to_eof() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        assert_eq!(CodecError::from(io_err), CodecError::UnexpectedEof);
    }
}
