//! Scalar element codec.
//!
//! Handles one boxed value of any supported kind. Every value is
//! framed with its own tag byte, which is what lets object arrays hold
//! heterogeneous elements: each slot declares itself on the wire.
//!
//! Arrays appearing as elements are not framed here; they delegate to
//! the array codec's own tag scheme (general tag or compact byte-array
//! tag), so a nested array reads back identically whether it was a top
//! level value or an element.
//!
//! ```text
//! Scalar Layout:
//! ┌────────────────┬──────────────────────────────────────────┐
//! │ Tag (1 byte)   │ Payload (fixed width or length-prefixed) │
//! └────────────────┴──────────────────────────────────────────┘
//! ```

use crate::array;
use crate::buffer::{ByteReader, DataBuffer};
use crate::error::{CodecError, Result};
use crate::registry::{default_registry, TypeRegistry};
use burrow_core::limits::Limits;
use burrow_core::value::Value;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::warn;

/// Scalar tag bytes. Arrays use the array codec's tag space.
const TAG_NULL: u8 = 0;
const TAG_FALSE: u8 = 1;
const TAG_TRUE: u8 = 2;
const TAG_I8: u8 = 3;
const TAG_I16: u8 = 4;
const TAG_CHAR: u8 = 5;
const TAG_I32: u8 = 6;
const TAG_I64: u8 = 7;
const TAG_F32: u8 = 8;
const TAG_F64: u8 = 9;
const TAG_STR: u8 = 10;

/// Per-element codec contract consumed by the array codec.
///
/// Implementations must be reentrant and side-effect-free: all four
/// operations are pure functions of their arguments.
pub trait ElementCodec: Send + Sync {
    /// Write one value, framed with its own tag.
    fn write(&self, buf: &mut DataBuffer, value: &Value) -> Result<()>;

    /// Read one value.
    fn read(&self, r: &mut ByteReader<'_>) -> Result<Value>;

    /// Total order over element values.
    fn compare(&self, a: &Value, b: &Value) -> Ordering;

    /// Approximate in-memory footprint of one value, in bytes.
    fn memory(&self, value: &Value) -> usize;
}

/// The concrete element codec used by the storage engine.
///
/// Stateless beyond an immutable shared registry reference and the
/// decode limits, so one instance may serve any number of threads.
#[derive(Debug, Clone)]
pub struct ScalarCodec {
    registry: Arc<TypeRegistry>,
    limits: Limits,
}

impl Default for ScalarCodec {
    fn default() -> Self {
        ScalarCodec {
            registry: default_registry(),
            limits: Limits::default(),
        }
    }
}

impl ScalarCodec {
    /// Create a codec over the given registry and limits.
    pub fn new(registry: Arc<TypeRegistry>, limits: Limits) -> Self {
        ScalarCodec { registry, limits }
    }

    /// The type registry this codec resolves component types against.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The decode limits this codec enforces.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Read one value at a known nesting depth.
    pub(crate) fn read_at_depth(&self, r: &mut ByteReader<'_>, depth: usize) -> Result<Value> {
        let tag = r.get_u8()?;
        self.read_tagged(r, tag, depth)
    }

    /// Read one value whose tag byte was already consumed.
    pub(crate) fn read_tagged(
        &self,
        r: &mut ByteReader<'_>,
        tag: u8,
        depth: usize,
    ) -> Result<Value> {
        match tag {
            TAG_NULL => Ok(Value::Null),
            TAG_FALSE => Ok(Value::Bool(false)),
            TAG_TRUE => Ok(Value::Bool(true)),
            TAG_I8 => Ok(Value::I8(r.get_i8()?)),
            TAG_I16 => Ok(Value::I16(r.get_i16()?)),
            TAG_CHAR => Ok(Value::Char(r.get_u16()?)),
            TAG_I32 => Ok(Value::I32(r.get_i32()?)),
            TAG_I64 => Ok(Value::I64(r.get_i64()?)),
            TAG_F32 => Ok(Value::F32(r.get_f32()?)),
            TAG_F64 => Ok(Value::F64(r.get_f64()?)),
            TAG_STR => {
                let s = r.read_str()?;
                if s.len() > self.limits.max_string_bytes {
                    return Err(CodecError::StringTooLong {
                        actual: s.len(),
                        max: self.limits.max_string_bytes,
                    });
                }
                Ok(Value::Str(s))
            }
            t if array::is_array_tag(t) => {
                Ok(Value::Array(array::read_tagged(self, r, t, depth)?))
            }
            t => {
                warn!(tag = t, "unknown value tag");
                Err(CodecError::UnknownTag(t))
            }
        }
    }
}

impl ElementCodec for ScalarCodec {
    fn write(&self, buf: &mut DataBuffer, value: &Value) -> Result<()> {
        match value {
            Value::Null => buf.put_u8(TAG_NULL),
            Value::Bool(false) => buf.put_u8(TAG_FALSE),
            Value::Bool(true) => buf.put_u8(TAG_TRUE),
            Value::I8(v) => {
                buf.put_u8(TAG_I8);
                buf.put_i8(*v);
            }
            Value::I16(v) => {
                buf.put_u8(TAG_I16);
                buf.put_i16(*v);
            }
            Value::Char(v) => {
                buf.put_u8(TAG_CHAR);
                buf.put_u16(*v);
            }
            Value::I32(v) => {
                buf.put_u8(TAG_I32);
                buf.put_i32(*v);
            }
            Value::I64(v) => {
                buf.put_u8(TAG_I64);
                buf.put_i64(*v);
            }
            Value::F32(v) => {
                buf.put_u8(TAG_F32);
                buf.put_f32(*v);
            }
            Value::F64(v) => {
                buf.put_u8(TAG_F64);
                buf.put_f64(*v);
            }
            Value::Str(s) => {
                buf.put_u8(TAG_STR);
                buf.put_str(s);
            }
            // Arrays carry their own leading tag.
            Value::Array(a) => array::write(self, buf, a)?,
        }
        Ok(())
    }

    fn read(&self, r: &mut ByteReader<'_>) -> Result<Value> {
        self.read_at_depth(r, 0)
    }

    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match (a, b) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::I8(x), Value::I8(y)) => x.cmp(y),
            (Value::I16(x), Value::I16(y)) => x.cmp(y),
            (Value::Char(x), Value::Char(y)) => x.cmp(y),
            (Value::I32(x), Value::I32(y)) => x.cmp(y),
            (Value::I64(x), Value::I64(y)) => x.cmp(y),
            // total_cmp: well-defined for NaN and signed zero.
            (Value::F32(x), Value::F32(y)) => x.total_cmp(y),
            (Value::F64(x), Value::F64(y)) => x.total_cmp(y),
            (Value::Str(x), Value::Str(y)) => x.cmp(y),
            (Value::Array(x), Value::Array(y)) => crate::compare::compare_arrays(self, x, y),
            _ => kind_rank(a).cmp(&kind_rank(b)),
        }
    }

    fn memory(&self, value: &Value) -> usize {
        match value {
            Value::Null => 0,
            Value::Bool(_)
            | Value::I8(_)
            | Value::I16(_)
            | Value::Char(_)
            | Value::I32(_)
            | Value::F32(_) => 16,
            Value::I64(_) | Value::F64(_) => 24,
            Value::Str(s) => 24 + s.len(),
            Value::Array(a) => crate::memory::estimate(self, a),
        }
    }
}

/// Cross-kind rank for the total order: null sorts first, arrays last.
fn kind_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::I8(_) => 2,
        Value::I16(_) => 3,
        Value::Char(_) => 4,
        Value::I32(_) => 5,
        Value::I64(_) => 6,
        Value::F32(_) => 7,
        Value::F64(_) => 8,
        Value::Str(_) => 9,
        Value::Array(_) => 10,
    }
}
