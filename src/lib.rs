//! Burrow — sorted key/value engine building blocks.
//!
//! This facade re-exports the value model and the value codecs:
//! - `burrow-core`: Value, ArrayValue, ElementType, Limits
//! - `burrow-codec`: buffer contract, type registry, element codec,
//!   array codec, key ordering, memory estimation
//!
//! The engine's page store consumes these through the
//! `StorageDataType` dispatch seam; library users can use the codecs
//! directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use burrow_core::{ArrayValue, ElementType, Limits, Value};

pub use burrow_codec::{
    compare_arrays, default_registry, estimate, ArrayType, ByteReader, CodecError, DataBuffer,
    ElementCodec, Result, ScalarCodec, StorageDataType, TypeRegistry, REGISTRY_SENTINEL,
    TAG_BYTE_ARRAY_0_15, TYPE_ARRAY,
};
