//! Bidirectional type registry for array component types.
//!
//! A closed set of well-known component types maps to small integer
//! ids, enabling the one-byte class selector in the array wire format.
//! Component types outside the set are written as the sentinel byte
//! followed by a length-prefixed descriptor name.
//!
//! Decoding a named descriptor resolves it against an explicit
//! allow-list of permitted external descriptors. Names not on the list
//! fail with `UnresolvableType` — there is no dynamic loading and no
//! silent substitution.

use crate::error::{CodecError, Result};
use burrow_core::value::ElementType;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::warn;

/// Class selector value meaning "unregistered type, name follows".
pub const REGISTRY_SENTINEL: u8 = 0xFF;

/// The registered component types, indexed by registry id.
const REGISTERED: [ElementType; 11] = [
    ElementType::Bool,  // 0
    ElementType::I8,    // 1
    ElementType::I16,   // 2
    ElementType::Char,  // 3
    ElementType::I32,   // 4
    ElementType::I64,   // 5
    ElementType::F32,   // 6
    ElementType::F64,   // 7
    ElementType::Any,   // 8
    ElementType::Str,   // 9
    ElementType::Array, // 10
];

/// Bidirectional id ⇄ component-type table plus the external
/// descriptor allow-list.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    external: FxHashSet<String>,
}

impl TypeRegistry {
    /// Create a registry with an empty external allow-list.
    pub fn new() -> Self {
        TypeRegistry {
            external: FxHashSet::default(),
        }
    }

    /// Permit `name` as an external component descriptor.
    ///
    /// Arrays whose component type is `Named(name)` can then be
    /// decoded; encoding never requires registration.
    pub fn register_external(&mut self, name: impl Into<String>) {
        self.external.insert(name.into());
    }

    /// Check whether `name` is a permitted external descriptor.
    pub fn is_external_allowed(&self, name: &str) -> bool {
        self.external.contains(name)
    }

    /// Registry id of a component type, if it is registered.
    ///
    /// `Named` descriptors are never registered.
    pub fn id_of(&self, ty: &ElementType) -> Option<u8> {
        REGISTERED.iter().position(|t| t == ty).map(|i| i as u8)
    }

    /// Component type for a registry id, if the id is known.
    pub fn type_of(&self, id: u8) -> Option<ElementType> {
        REGISTERED.get(id as usize).cloned()
    }

    /// Resolve a descriptor name read from the stream.
    ///
    /// Succeeds only for names on the external allow-list.
    pub fn resolve_named(&self, name: &str) -> Result<ElementType> {
        if self.is_external_allowed(name) {
            Ok(ElementType::Named(name.to_string()))
        } else {
            warn!(name, "component type name not on the external allow-list");
            Err(CodecError::UnresolvableType {
                name: name.to_string(),
            })
        }
    }
}

/// Shared registry with the default (empty) allow-list.
pub fn default_registry() -> Arc<TypeRegistry> {
    static DEFAULT: Lazy<Arc<TypeRegistry>> = Lazy::new(|| Arc::new(TypeRegistry::new()));
    DEFAULT.clone()
}
