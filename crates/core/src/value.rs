//! Array value model for the value-storage layer.
//!
//! This module defines:
//! - Value: one boxed element value (possibly a nested array)
//! - ArrayValue: a typed, fixed-length, ordered sequence of elements
//! - ElementType: the closed component-type descriptor used for tagging
//!
//! ## Value Rules
//!
//! - Values are pure: constructed for the duration of one
//!   write/read/compare/size call, immutable once built, never shared
//!   mutably across calls.
//! - Equality is structural. Floats use IEEE-754 equality
//!   (`NaN != NaN`, `-0.0 == 0.0`); ordering is a separate concern and
//!   lives in the codec crate.
//! - `Char` holds a UTF-16 code unit and occupies exactly two bytes on
//!   the wire. It is not a Unicode scalar value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One boxed element value.
///
/// Element values are what object arrays hold. Each kind is framed
/// independently on the wire by the element codec, so a heterogeneous
/// array can mix any of these, including nested arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent element.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// UTF-16 code unit (2-byte storage width, unsigned order).
    Char(u16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 32-bit IEEE-754 float.
    F32(f32),
    /// 64-bit IEEE-754 float.
    F64(f64),
    /// UTF-8 string.
    Str(String),
    /// Nested array.
    Array(ArrayValue),
}

impl Value {
    /// Kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::Char(_) => "char",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
        }
    }

    /// Check if this is the null element.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// An array-typed value: the codec's unit of work.
///
/// Primitive variants store raw fixed-width elements; the `Object`
/// variant stores boxed elements and carries its declared component
/// type explicitly. The declared component type of an `Object` array
/// must be one of the boxed descriptors (`Any`, `Str`, `Array`, or
/// `Named`) — primitive component types always use the corresponding
/// primitive variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayValue {
    /// Boolean array (1 byte per element, 0 or 1).
    Bool(Vec<bool>),
    /// Signed byte array. Short instances (length 0–15) have a compact
    /// single-tag encoding.
    I8(Vec<i8>),
    /// 16-bit signed integer array.
    I16(Vec<i16>),
    /// UTF-16 code unit array.
    Char(Vec<u16>),
    /// 32-bit signed integer array.
    I32(Vec<i32>),
    /// 64-bit signed integer array.
    I64(Vec<i64>),
    /// 32-bit float array.
    F32(Vec<f32>),
    /// 64-bit float array.
    F64(Vec<f64>),
    /// Array of boxed elements sharing a declared component type.
    Object {
        /// Declared component type of every element slot.
        component: ElementType,
        /// The elements, in order. Heterogeneity beyond the declared
        /// slot type is allowed when the component is `Any`.
        elements: Vec<Value>,
    },
}

impl ArrayValue {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            ArrayValue::Bool(d) => d.len(),
            ArrayValue::I8(d) => d.len(),
            ArrayValue::I16(d) => d.len(),
            ArrayValue::Char(d) => d.len(),
            ArrayValue::I32(d) => d.len(),
            ArrayValue::I64(d) => d.len(),
            ArrayValue::F32(d) => d.len(),
            ArrayValue::F64(d) => d.len(),
            ArrayValue::Object { elements, .. } => elements.len(),
        }
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The component type this array declares.
    pub fn component_type(&self) -> ElementType {
        match self {
            ArrayValue::Bool(_) => ElementType::Bool,
            ArrayValue::I8(_) => ElementType::I8,
            ArrayValue::I16(_) => ElementType::I16,
            ArrayValue::Char(_) => ElementType::Char,
            ArrayValue::I32(_) => ElementType::I32,
            ArrayValue::I64(_) => ElementType::I64,
            ArrayValue::F32(_) => ElementType::F32,
            ArrayValue::F64(_) => ElementType::F64,
            ArrayValue::Object { component, .. } => component.clone(),
        }
    }
}

/// Component-type descriptor for array values.
///
/// The first eleven descriptors form the closed registry set; `Named`
/// identifies a component type outside the registry by its
/// fully-qualified descriptor name (written on the wire after the
/// registry sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Boolean elements.
    Bool,
    /// Signed byte elements.
    I8,
    /// 16-bit signed integer elements.
    I16,
    /// UTF-16 code unit elements.
    Char,
    /// 32-bit signed integer elements.
    I32,
    /// 64-bit signed integer elements.
    I64,
    /// 32-bit float elements.
    F32,
    /// 64-bit float elements.
    F64,
    /// Heterogeneous boxed elements.
    Any,
    /// String elements.
    Str,
    /// Nested-array elements.
    Array,
    /// Unregistered component type, identified by name.
    Named(String),
}

impl ElementType {
    /// Wire width in bytes of one element, for fixed-width kinds.
    ///
    /// Boxed kinds (`Any`, `Str`, `Array`, `Named`) have no fixed
    /// width; their elements are framed individually.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            ElementType::Bool | ElementType::I8 => Some(1),
            ElementType::I16 | ElementType::Char => Some(2),
            ElementType::I32 | ElementType::F32 => Some(4),
            ElementType::I64 | ElementType::F64 => Some(8),
            ElementType::Any | ElementType::Str | ElementType::Array | ElementType::Named(_) => {
                None
            }
        }
    }

    /// Whether elements of this type are boxed (individually framed).
    pub fn is_boxed(&self) -> bool {
        self.fixed_width().is_none()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Bool => f.write_str("bool"),
            ElementType::I8 => f.write_str("i8"),
            ElementType::I16 => f.write_str("i16"),
            ElementType::Char => f.write_str("char"),
            ElementType::I32 => f.write_str("i32"),
            ElementType::I64 => f.write_str("i64"),
            ElementType::F32 => f.write_str("f32"),
            ElementType::F64 => f.write_str("f64"),
            ElementType::Any => f.write_str("any"),
            ElementType::Str => f.write_str("str"),
            ElementType::Array => f.write_str("array"),
            ElementType::Named(name) => f.write_str(name),
        }
    }
}
