//! Language-agnostic type references for generated code.

use uigen_core::{PrimitiveKind, TypeKey};

/// A reference to a type in the generated program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type.
    Primitive(PrimitiveKind),
    /// A named type (class, struct, enum).
    Named(String),
    /// A generic type with type arguments.
    Generic {
        /// Base type name (e.g., "List").
        base: String,
        /// Type arguments.
        args: Vec<TypeRef>,
    },
    /// An array type.
    Array(Box<TypeRef>),
    /// The `object` type.
    Object,
    /// No value (`void`).
    Void,
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a generic type reference.
    pub fn generic(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Generic {
            base: base.into(),
            args,
        }
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Reference a runtime type by its short name.
    ///
    /// Generated code imports the namespaces it needs, so only the short
    /// name is emitted.
    pub fn from_key(key: &TypeKey) -> Self {
        Self::Named(key.name().to_string())
    }
}

/// Visibility/access level for members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Trait for mapping types to language-specific representations.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveKind) -> String;

    /// Map an array type (e.g., `T[]`).
    fn map_array(&self, inner: &str) -> String;

    /// Map the universal object type.
    fn map_object(&self) -> String;

    /// Map the void type.
    fn map_void(&self) -> String;

    /// Map a generic type with arguments.
    fn map_generic(&self, base: &str, args: &[String]) -> String {
        if args.is_empty() {
            base.to_string()
        } else {
            format!("{}<{}>", base, args.join(", "))
        }
    }

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Generic { base, args } => {
                let arg_strs: Vec<_> = args.iter().map(|a| self.render_type(a)).collect();
                self.map_generic(base, &arg_strs)
            }
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str)
            }
            TypeRef::Object => self.map_object(),
            TypeRef::Void => self.map_void(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_constructors() {
        assert_eq!(
            TypeRef::primitive(PrimitiveKind::Int32),
            TypeRef::Primitive(PrimitiveKind::Int32)
        );
        assert_eq!(TypeRef::named("Style"), TypeRef::Named("Style".into()));
        assert!(matches!(
            TypeRef::array(TypeRef::Object),
            TypeRef::Array(inner) if *inner == TypeRef::Object
        ));
    }

    #[test]
    fn test_from_key_uses_short_name() {
        let key = TypeKey::new("System.Windows.Media.SolidColorBrush");
        assert_eq!(TypeRef::from_key(&key), TypeRef::named("SolidColorBrush"));
    }

    #[test]
    fn test_visibility() {
        assert!(Visibility::Public.is_public());
        assert!(!Visibility::Public.is_private());
        assert!(Visibility::Private.is_private());
        assert_eq!(Visibility::default(), Visibility::Public);
    }

    #[test]
    fn test_generic_type() {
        let list = TypeRef::generic("List", vec![TypeRef::Object]);
        assert!(matches!(list, TypeRef::Generic { base, args } if base == "List" && args.len() == 1));
    }
}
