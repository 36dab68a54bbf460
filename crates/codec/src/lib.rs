//! Value codecs for Burrow
//!
//! This crate implements the value-storage layer's binary codecs and
//! key ordering:
//! - DataBuffer / ByteReader: the shared buffer contract (big-endian
//!   primitives, LEB128 varints, length-prefixed strings)
//! - TypeRegistry: id ⇄ component-type table with an explicit
//!   allow-list for external descriptors
//! - ScalarCodec: per-element codec (ElementCodec implementation)
//! - ArrayType: tagged codec for array values, with a compact form
//!   for short byte arrays
//! - compare / memory: total key order and cache-accounting estimates
//!
//! Encode, decode, and compare are kept in lock-step; divergence
//! between them silently corrupts the engine's sort order, so the
//! wire-format tests in this crate pin exact byte layouts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod buffer;
pub mod compare;
pub mod element;
pub mod error;
pub mod memory;
pub mod registry;
pub mod traits;

pub use array::{ArrayType, TAG_BYTE_ARRAY_0_15, TYPE_ARRAY};
pub use buffer::{ByteReader, DataBuffer};
pub use compare::compare_arrays;
pub use element::{ElementCodec, ScalarCodec};
pub use error::{CodecError, Result};
pub use memory::estimate;
pub use registry::{default_registry, TypeRegistry, REGISTRY_SENTINEL};
pub use traits::StorageDataType;
