//! Core value model for Burrow
//!
//! This crate defines the foundational types consumed by the value
//! codecs and the enclosing storage engine:
//! - Value: one boxed element value
//! - ArrayValue: typed, fixed-length, ordered element sequence
//! - ElementType: closed component-type descriptor
//! - Limits: decode-side resource guards
//!
//! No I/O and no codec logic live here; this crate is pure data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod limits;
pub mod value;

pub use limits::Limits;
pub use value::{ArrayValue, ElementType, Value};
