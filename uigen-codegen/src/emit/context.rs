//! Emission context passed to every value emitter.

use super::resources::ResourceDictionary;
use crate::builder::{ClassSpec, MethodSpec, Statement};

/// The class and method emitters append generated code to.
///
/// A context is scoped to one call into the generator. Emitters may add
/// methods to the class and statements to the current method; they never
/// swap either for another. A nested method scope is opened with
/// [`EmitContext::nested`].
#[derive(Debug)]
pub struct EmitContext<'a> {
    /// The class under construction.
    pub class: &'a mut ClassSpec,
    /// The method currently being populated.
    pub method: &'a mut MethodSpec,
    /// Resources emitted so far, shared across the whole run.
    pub resources: Option<&'a mut ResourceDictionary>,
    nested: bool,
}

impl<'a> EmitContext<'a> {
    /// Create a context without a shared resource dictionary.
    pub fn new(class: &'a mut ClassSpec, method: &'a mut MethodSpec) -> Self {
        Self {
            class,
            method,
            resources: None,
            nested: false,
        }
    }

    /// Attach a shared resource dictionary.
    pub fn with_resources(mut self, resources: &'a mut ResourceDictionary) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Append a statement to the current method.
    pub fn push(&mut self, stmt: Statement) {
        self.method.push(stmt);
    }

    /// The shared resource dictionary, if any.
    pub fn resources(&self) -> Option<&ResourceDictionary> {
        self.resources.as_deref()
    }

    /// Open a nested scope that appends to `method` within the same class.
    ///
    /// The nested method is not part of the class until the caller adds it.
    pub fn nested<'b>(&'b mut self, method: &'b mut MethodSpec) -> EmitContext<'b> {
        EmitContext {
            class: &mut *self.class,
            method,
            resources: self.resources.as_deref_mut(),
            nested: true,
        }
    }

    /// Check whether this scope is a method other than the one the run
    /// started in. Locals of the outer method are not visible here.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Pick a method name not yet used by the class, starting from `base`.
    pub fn unique_method_name(&self, base: &str) -> String {
        if !self.class.has_method(base) && self.method.name != base {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{base}{n}"))
            .find(|name| !self.class.has_method(name) && self.method.name != *name)
            .unwrap_or_else(|| base.to_string())
    }
}
