//! Emitter registry keyed by exact runtime type.
//!
//! Lookup matches the full name of a value's runtime type exactly: an emitter
//! registered for a base type is never used for a derived type. Keys are
//! kept in registration order so diagnostics and listings are stable.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = EmitterRegistry::with_builtins();
//!
//! registry.register_emitter(Arc::new(MyWidgetEmitter))?;
//! assert!(registry.contains(&TypeKey::new("App.MyWidget")));
//! ```

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use uigen_core::TypeKey;

use super::{
    ValueEmitter,
    error::{EmitError, Result},
};
use crate::values;

/// Emitters by the type they handle.
#[derive(Clone, Default)]
pub struct EmitterRegistry {
    emitters: IndexMap<TypeKey, Arc<dyn ValueEmitter>>,
}

impl EmitterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with every built-in emitter.
    ///
    /// # Panics
    ///
    /// Panics if two built-in emitters claim the same type, which would be a
    /// defect of the built-in table itself.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for emitter in values::builtins() {
            if let Err(err) = registry.register_emitter(emitter) {
                panic!("built-in emitter table is inconsistent: {err}");
            }
        }
        registry
    }

    /// Register an emitter under an explicit key.
    pub fn register(&mut self, key: TypeKey, emitter: Arc<dyn ValueEmitter>) -> Result<()> {
        if self.emitters.contains_key(&key) {
            return Err(EmitError::DuplicateRegistration {
                type_name: key.full_name().to_string(),
            });
        }
        self.emitters.insert(key, emitter);
        Ok(())
    }

    /// Register an emitter under the type it reports handling.
    pub fn register_emitter(&mut self, emitter: Arc<dyn ValueEmitter>) -> Result<()> {
        self.register(emitter.value_type(), emitter)
    }

    /// Find the emitter for an exact type.
    pub fn lookup(&self, key: &TypeKey) -> Option<&Arc<dyn ValueEmitter>> {
        self.emitters.get(key)
    }

    /// Check whether a type has an emitter.
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.emitters.contains_key(key)
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.emitters.keys()
    }

    /// Number of registered emitters.
    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    /// Check if no emitter is registered.
    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }
}

impl fmt::Debug for EmitterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.emitters.keys().map(TypeKey::full_name))
            .finish()
    }
}
