//! Named resources shared across emission calls.

use indexmap::IndexMap;

use crate::builder::Expr;

/// Expressions of resources that have already been emitted, by key.
///
/// The dictionary parser records each named resource after emitting it.
/// Emitters that meet a reference to a known key reuse the recorded
/// expression instead of emitting the resource again.
#[derive(Debug, Clone, Default)]
pub struct ResourceDictionary {
    entries: IndexMap<String, Expr>,
}

impl ResourceDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the expression of a named resource.
    ///
    /// Returns the previously recorded expression, if the key was known.
    pub fn insert(&mut self, key: impl Into<String>, expr: Expr) -> Option<Expr> {
        self.entries.insert(key.into(), expr)
    }

    /// Look up a recorded expression.
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.entries.get(key)
    }

    /// Check whether a key has been recorded.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Recorded keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of recorded resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
