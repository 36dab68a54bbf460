//! Storage data-type trait definitions.

use crate::buffer::{ByteReader, DataBuffer};
use crate::error::{CodecError, Result};
use burrow_core::value::Value;
use std::cmp::Ordering;

/// A value codec as seen by the storage engine's dispatch table.
///
/// Every value kind the engine stores is handled by one implementation
/// of this trait, keyed by `type_id`. Implementations must be
/// reentrant and side-effect-free: all operations are pure functions
/// of their explicit arguments, and codecs are shared freely across
/// threads.
///
/// Encode, decode, and compare are three independently written
/// algorithms over the same format; keeping them in lock-step is the
/// implementation's responsibility, and the reason the codec and its
/// comparator live side by side.
pub trait StorageDataType: Send + Sync {
    /// The in-memory value this codec handles.
    type Value;

    /// Fixed discriminant identifying this codec to the engine's
    /// value dispatch table.
    fn type_id(&self) -> u8;

    /// Encode one value, including its leading tag.
    fn write(&self, buf: &mut DataBuffer, value: &Self::Value) -> Result<()>;

    /// Decode one value, consuming its leading tag.
    fn read(&self, r: &mut ByteReader<'_>) -> Result<Self::Value>;

    /// Total order over values; used directly as key order.
    fn compare(&self, a: &Self::Value, b: &Self::Value) -> Ordering;

    /// Approximate in-memory footprint for cache accounting.
    fn memory(&self, value: &Self::Value) -> usize;

    /// Write one scalar value directly, outside any aggregate.
    ///
    /// Aggregate-only codecs reject this: scalars are the element
    /// codec's responsibility. Invoking it on such a codec is a
    /// programming error, not a data error.
    fn write_scalar(&self, _buf: &mut DataBuffer, _value: &Value) -> Result<()> {
        Err(CodecError::UnsupportedOperation(
            "single-value write on an aggregate-only codec",
        ))
    }
}
