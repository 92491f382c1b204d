//! The generated class that emitted methods are collected into.

use super::{function::MethodSpec, types::Visibility};

/// A class under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Class name.
    pub name: String,
    /// Namespace the class is declared in.
    pub namespace: Option<String>,
    /// Namespaces imported by the generated file.
    pub usings: Vec<String>,
    /// Base class name.
    pub base: Option<String>,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the class is declared `partial`.
    pub is_partial: bool,
    methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create a new public class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            usings: Vec::new(),
            base: None,
            visibility: Visibility::Public,
            is_partial: false,
            methods: Vec::new(),
        }
    }

    /// Set the namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Import a namespace.
    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        self.usings.push(namespace.into());
        self
    }

    /// Set the base class.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Mark the class as partial.
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Add a finished method.
    pub fn add_method(&mut self, method: MethodSpec) {
        self.methods.push(method);
    }

    /// Methods in the order they were added.
    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Check whether a method with this name exists.
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_methods() {
        let mut class = ClassSpec::new("Dictionary1")
            .namespace("App.Generated")
            .using("System")
            .base("ResourceDictionary")
            .partial();

        class.add_method(MethodSpec::new("InitializeResources"));
        class.add_method(MethodSpec::new("Template_Factory").private().static_());

        assert_eq!(class.methods().len(), 2);
        assert!(class.has_method("Template_Factory"));
        assert!(!class.has_method("Missing"));
        assert!(class.is_partial);
    }
}
