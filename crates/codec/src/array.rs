//! Array codec: tagged binary encoding for array-typed values.
//!
//! # Format
//!
//! ```text
//! Compact form (byte arrays of length 0–15):
//! ┌────────────────────────────┬──────────────────────┐
//! │ Tag = 104 + len (1 byte)   │ Raw bytes (len)      │
//! └────────────────────────────┴──────────────────────┘
//!
//! General form:
//! ┌──────────────┬────────────────────┬────────────────┬───────────────┐
//! │ 14 (1 byte)  │ Class selector     │ Length varint  │ Elements      │
//! └──────────────┴────────────────────┴────────────────┴───────────────┘
//!
//! Class selector: a registry id (1 byte), or 0xFF followed by a
//! length-prefixed descriptor name.
//!
//! Elements: packed at natural width for primitive components
//! (big-endian, no padding); framed individually by the element codec
//! for boxed components.
//! ```
//!
//! Encode, decode and the comparator must stay in lock-step: the
//! comparator never depends on which form produced an operand, and
//! decode reads every byte encode wrote.

use crate::buffer::{ByteReader, DataBuffer};
use crate::compare;
use crate::element::{ElementCodec, ScalarCodec};
use crate::error::{CodecError, Result};
use crate::memory;
use crate::registry::REGISTRY_SENTINEL;
use crate::traits::StorageDataType;
use burrow_core::value::{ArrayValue, ElementType};
use std::cmp::Ordering;
use tracing::warn;

/// General-form discriminant for array values.
pub const TYPE_ARRAY: u8 = 14;

/// Base tag of the compact byte-array form; the encoded length is
/// `tag - TAG_BYTE_ARRAY_0_15`.
pub const TAG_BYTE_ARRAY_0_15: u8 = 104;

/// Longest byte array the compact form can carry.
const COMPACT_MAX_LEN: usize = 15;

/// Whether `tag` opens an array value (either form).
pub(crate) fn is_array_tag(tag: u8) -> bool {
    tag == TYPE_ARRAY
        || (TAG_BYTE_ARRAY_0_15..=TAG_BYTE_ARRAY_0_15 + COMPACT_MAX_LEN as u8).contains(&tag)
}

/// Write one array value, including its leading tag.
pub(crate) fn write(codec: &ScalarCodec, buf: &mut DataBuffer, v: &ArrayValue) -> Result<()> {
    if let ArrayValue::I8(data) = v {
        if data.len() <= COMPACT_MAX_LEN {
            buf.put_u8(TAG_BYTE_ARRAY_0_15 + data.len() as u8);
            for b in data {
                buf.put_i8(*b);
            }
            return Ok(());
        }
    }

    let component = v.component_type();
    if matches!(v, ArrayValue::Object { .. }) && !component.is_boxed() {
        return Err(CodecError::MalformedValue(format!(
            "object array declares primitive component type {component}"
        )));
    }

    buf.put_u8(TYPE_ARRAY);
    match codec.registry().id_of(&component) {
        Some(id) => buf.put_u8(id),
        None => {
            let ElementType::Named(name) = &component else {
                // id_of covers every non-Named descriptor.
                return Err(CodecError::MalformedValue(format!(
                    "component type {component} has no registry id"
                )));
            };
            buf.put_u8(REGISTRY_SENTINEL);
            buf.put_str(name);
        }
    }

    let len = u32::try_from(v.len()).map_err(|_| CodecError::AllocationFailure {
        type_name: component.to_string(),
        length: v.len() as u64,
        reason: "length exceeds encodable range".to_string(),
    })?;
    buf.put_var_u32(len);

    match v {
        ArrayValue::Bool(data) => {
            for b in data {
                buf.put_u8(u8::from(*b));
            }
        }
        ArrayValue::I8(data) => {
            for b in data {
                buf.put_i8(*b);
            }
        }
        ArrayValue::I16(data) => {
            for x in data {
                buf.put_i16(*x);
            }
        }
        ArrayValue::Char(data) => {
            for x in data {
                buf.put_u16(*x);
            }
        }
        ArrayValue::I32(data) => {
            for x in data {
                buf.put_i32(*x);
            }
        }
        ArrayValue::I64(data) => {
            for x in data {
                buf.put_i64(*x);
            }
        }
        ArrayValue::F32(data) => {
            for x in data {
                buf.put_f32(*x);
            }
        }
        ArrayValue::F64(data) => {
            for x in data {
                buf.put_f64(*x);
            }
        }
        ArrayValue::Object { elements, .. } => {
            for element in elements {
                codec.write(buf, element)?;
            }
        }
    }
    Ok(())
}

/// Read one array value, consuming the leading tag.
pub(crate) fn read(codec: &ScalarCodec, r: &mut ByteReader<'_>) -> Result<ArrayValue> {
    let tag = r.get_u8()?;
    read_tagged(codec, r, tag, 0)
}

/// Read one array value whose tag byte was already consumed.
pub(crate) fn read_tagged(
    codec: &ScalarCodec,
    r: &mut ByteReader<'_>,
    tag: u8,
    depth: usize,
) -> Result<ArrayValue> {
    let limits = codec.limits();
    if depth > limits.max_nesting_depth {
        warn!(depth, "array nesting exceeds configured limit");
        return Err(CodecError::NestingTooDeep {
            actual: depth,
            max: limits.max_nesting_depth,
        });
    }

    if tag != TYPE_ARRAY {
        let len = tag
            .checked_sub(TAG_BYTE_ARRAY_0_15)
            .filter(|len| *len as usize <= COMPACT_MAX_LEN)
            .ok_or(CodecError::UnknownTag(tag))? as usize;
        let raw = r.get_slice(len)?;
        return Ok(ArrayValue::I8(raw.iter().map(|b| *b as i8).collect()));
    }

    let selector = r.get_u8()?;
    let component = if selector == REGISTRY_SENTINEL {
        let name = r.read_str()?;
        codec.registry().resolve_named(&name)?
    } else {
        codec
            .registry()
            .type_of(selector)
            .ok_or(CodecError::UnknownRegistryId(selector))?
    };

    let len = r.read_var_u32()? as usize;
    check_length(codec, &component, len, r.remaining())?;

    let value = match component {
        ElementType::Bool => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_u8()? == 1);
            }
            ArrayValue::Bool(data)
        }
        ElementType::I8 => {
            let raw = r.get_slice(len)?;
            ArrayValue::I8(raw.iter().map(|b| *b as i8).collect())
        }
        ElementType::I16 => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_i16()?);
            }
            ArrayValue::I16(data)
        }
        ElementType::Char => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_u16()?);
            }
            ArrayValue::Char(data)
        }
        ElementType::I32 => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_i32()?);
            }
            ArrayValue::I32(data)
        }
        ElementType::I64 => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_i64()?);
            }
            ArrayValue::I64(data)
        }
        ElementType::F32 => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_f32()?);
            }
            ArrayValue::F32(data)
        }
        ElementType::F64 => {
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(r.get_f64()?);
            }
            ArrayValue::F64(data)
        }
        component @ (ElementType::Any
        | ElementType::Str
        | ElementType::Array
        | ElementType::Named(_)) => {
            let mut elements = Vec::with_capacity(len);
            for _ in 0..len {
                elements.push(codec.read_at_depth(r, depth + 1)?);
            }
            ArrayValue::Object {
                component,
                elements,
            }
        }
    };
    Ok(value)
}

/// Validate a decoded length before allocating for it.
///
/// Rejects lengths over the configured limit and lengths the remaining
/// input cannot possibly satisfy (each boxed element occupies at least
/// its one tag byte).
fn check_length(
    codec: &ScalarCodec,
    component: &ElementType,
    len: usize,
    remaining: usize,
) -> Result<()> {
    let limits = codec.limits();
    if len > limits.max_array_len {
        warn!(
            component = %component,
            len,
            "decoded array length exceeds configured limit"
        );
        return Err(CodecError::AllocationFailure {
            type_name: component.to_string(),
            length: len as u64,
            reason: format!("length exceeds limit {}", limits.max_array_len),
        });
    }
    let min_bytes = match component.fixed_width() {
        Some(width) => len.saturating_mul(width),
        None => len,
    };
    if min_bytes > remaining {
        return Err(CodecError::UnexpectedEof);
    }
    Ok(())
}

/// The array value codec: the storage engine's `StorageDataType` for
/// array-shaped values.
///
/// Holds one immutable element codec; both are stateless, so a single
/// `ArrayType` may be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ArrayType {
    elements: ScalarCodec,
}

impl ArrayType {
    /// Create an array codec over the given element codec.
    pub fn new(elements: ScalarCodec) -> Self {
        ArrayType { elements }
    }

    /// The element codec this array codec delegates boxed elements to.
    pub fn element_codec(&self) -> &ScalarCodec {
        &self.elements
    }

    /// Read an array value whose leading tag was already consumed by
    /// the engine's outer value dispatch.
    pub fn read_tagged(&self, r: &mut ByteReader<'_>, tag: u8) -> Result<ArrayValue> {
        read_tagged(&self.elements, r, tag, 0)
    }
}

impl StorageDataType for ArrayType {
    type Value = ArrayValue;

    fn type_id(&self) -> u8 {
        TYPE_ARRAY
    }

    fn write(&self, buf: &mut DataBuffer, value: &ArrayValue) -> Result<()> {
        write(&self.elements, buf, value)
    }

    fn read(&self, r: &mut ByteReader<'_>) -> Result<ArrayValue> {
        read(&self.elements, r)
    }

    fn compare(&self, a: &ArrayValue, b: &ArrayValue) -> Ordering {
        compare::compare_arrays(&self.elements, a, b)
    }

    fn memory(&self, value: &ArrayValue) -> usize {
        memory::estimate(&self.elements, value)
    }
}
