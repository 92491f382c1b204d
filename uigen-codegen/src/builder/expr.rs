//! Target expressions.
//!
//! An [`Expr`] is an immutable node describing a value the generated program
//! can compute: a literal, a variable, a member of an object or type, an
//! object construction, a method call. Emitters build expressions; a
//! language [`Renderer`](super::Renderer) turns them into source text.
//!
//! # Example
//!
//! ```
//! use uigen_codegen::builder::{Expr, TypeRef};
//!
//! // new ColorW(255, 0, 0, 255)
//! let color = Expr::new_object(
//!     TypeRef::named("ColorW"),
//!     [Expr::int(255), Expr::int(0), Expr::int(0), Expr::int(255)],
//! );
//! assert_eq!(color.constructed_type(), Some(&TypeRef::named("ColorW")));
//! ```

use std::fmt;

use uigen_core::Value;

use super::types::TypeRef;

/// A literal value in generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Byte(u8),
    SByte(i8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Char(char),
    Single(f32),
    Double(f64),
    String(String),
}

impl Literal {
    /// The literal for a primitive runtime value, or `None` for anything else.
    pub fn from_value(value: &Value) -> Option<Self> {
        let lit = match value {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::Bool(*v),
            Value::Byte(v) => Self::Byte(*v),
            Value::SByte(v) => Self::SByte(*v),
            Value::Int16(v) => Self::Int16(*v),
            Value::UInt16(v) => Self::UInt16(*v),
            Value::Int32(v) => Self::Int32(*v),
            Value::UInt32(v) => Self::UInt32(*v),
            Value::Int64(v) => Self::Int64(*v),
            Value::UInt64(v) => Self::UInt64(*v),
            Value::Char(v) => Self::Char(*v),
            Value::Single(v) => Self::Single(*v),
            Value::Double(v) => Self::Double(*v),
            Value::String(v) => Self::String(v.clone()),
            Value::Enum(_) | Value::List(_) | Value::Object(_) => return None,
        };
        Some(lit)
    }
}

/// An expression in generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A reference to a local variable or parameter.
    Variable(String),
    /// The current instance (`this`).
    This,
    /// A type used as an expression target (static members, enum members).
    Type(TypeRef),
    /// A member of the target: `target.name`.
    Field {
        /// The expression the member is read from.
        target: Box<Expr>,
        /// Member name.
        name: String,
    },
    /// Object construction: `new Type(args)`.
    New {
        /// The constructed type.
        ty: TypeRef,
        /// Constructor arguments.
        args: Vec<Expr>,
    },
    /// A method call: `target.method(args)` or `method(args)`.
    Call {
        /// The receiver, or `None` for a call in the current scope.
        target: Option<Box<Expr>>,
        /// Method name.
        method: String,
        /// Call arguments.
        args: Vec<Expr>,
    },
    /// A type object: `typeof(Type)`.
    TypeOf(TypeRef),
    /// A method group used as a delegate.
    MethodRef(String),
}

impl Expr {
    /// The null literal.
    pub fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// A literal expression.
    pub fn literal(lit: Literal) -> Self {
        Self::Literal(lit)
    }

    /// A boolean literal.
    pub fn bool(v: bool) -> Self {
        Self::Literal(Literal::Bool(v))
    }

    /// A 32-bit integer literal.
    pub fn int(v: i32) -> Self {
        Self::Literal(Literal::Int32(v))
    }

    /// A single-precision literal.
    pub fn single(v: f32) -> Self {
        Self::Literal(Literal::Single(v))
    }

    /// A double-precision literal.
    pub fn double(v: f64) -> Self {
        Self::Literal(Literal::Double(v))
    }

    /// A string literal.
    pub fn string(v: impl Into<String>) -> Self {
        Self::Literal(Literal::String(v.into()))
    }

    /// A variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// The current instance.
    pub fn this() -> Self {
        Self::This
    }

    /// A type as expression target.
    pub fn ty(ty: TypeRef) -> Self {
        Self::Type(ty)
    }

    /// A member of this expression: `self.name`.
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::Field {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// A member of a type: `Type.member`.
    ///
    /// Used for enum members and static fields.
    pub fn type_member(ty: TypeRef, member: impl Into<String>) -> Self {
        Self::Type(ty).field(member)
    }

    /// Object construction.
    pub fn new_object(ty: TypeRef, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::New {
            ty,
            args: args.into_iter().collect(),
        }
    }

    /// A method call on this expression.
    pub fn call(self, method: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::Call {
            target: Some(Box::new(self)),
            method: method.into(),
            args: args.into_iter().collect(),
        }
    }

    /// A static method call: `Type.method(args)`.
    pub fn static_call(
        ty: TypeRef,
        method: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self::Type(ty).call(method, args)
    }

    /// A `typeof(Type)` expression.
    pub fn type_of(ty: TypeRef) -> Self {
        Self::TypeOf(ty)
    }

    /// A method group reference.
    pub fn method_ref(name: impl Into<String>) -> Self {
        Self::MethodRef(name.into())
    }

    /// Check if this is the null literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Literal(Literal::Null))
    }

    /// The variable name, if this is a variable reference.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Check whether the expression reads a local or `this`.
    ///
    /// Such an expression only evaluates inside the method it was built for.
    pub fn is_method_bound(&self) -> bool {
        match self {
            Self::Variable(_) | Self::This => true,
            Self::Literal(_) | Self::Type(_) | Self::TypeOf(_) | Self::MethodRef(_) => false,
            Self::Field { target, .. } => target.is_method_bound(),
            Self::New { args, .. } => args.iter().any(Self::is_method_bound),
            Self::Call { target, args, .. } => {
                target.as_deref().is_some_and(Self::is_method_bound)
                    || args.iter().any(Self::is_method_bound)
            }
        }
    }

    /// The constructed type, if this is an object construction.
    pub fn constructed_type(&self) -> Option<&TypeRef> {
        match self {
            Self::New { ty, .. } => Some(ty),
            _ => None,
        }
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug representation for display
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::Byte(v) => write!(f, "{}", v),
            Literal::SByte(v) => write!(f, "{}", v),
            Literal::Int16(v) => write!(f, "{}", v),
            Literal::UInt16(v) => write!(f, "{}", v),
            Literal::Int32(v) => write!(f, "{}", v),
            Literal::UInt32(v) => write!(f, "{}", v),
            Literal::Int64(v) => write!(f, "{}", v),
            Literal::UInt64(v) => write!(f, "{}", v),
            Literal::Char(v) => write!(f, "'{}'", v),
            Literal::Single(v) => write!(f, "{}", v),
            Literal::Double(v) => write!(f, "{}", v),
            Literal::String(v) => write!(f, "\"{}\"", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_from_value() {
        assert_eq!(Literal::from_value(&Value::Null), Some(Literal::Null));
        assert_eq!(
            Literal::from_value(&Value::Int32(3)),
            Some(Literal::Int32(3))
        );
        assert_eq!(
            Literal::from_value(&Value::string("x")),
            Some(Literal::String("x".into()))
        );
        assert_eq!(Literal::from_value(&Value::List(vec![])), None);
    }

    #[test]
    fn test_type_member() {
        let expr = Expr::type_member(TypeRef::named("Stretch"), "Fill");
        match expr {
            Expr::Field { target, name } => {
                assert_eq!(*target, Expr::Type(TypeRef::named("Stretch")));
                assert_eq!(name, "Fill");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_call_chain() {
        let expr = Expr::var("brush")
            .field("GradientStops")
            .call("Add", [Expr::null()]);
        assert!(matches!(&expr, Expr::Call { method, args, .. } if method == "Add" && args.len() == 1));
    }

    #[test]
    fn test_queries() {
        assert!(Expr::null().is_null());
        assert!(!Expr::int(0).is_null());
        assert_eq!(Expr::var("x").as_variable(), Some("x"));
        assert_eq!(Expr::this().as_variable(), None);
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::String("a".into()).to_string(), "\"a\"");
        assert_eq!(Literal::Null.to_string(), "null");
    }

    #[test]
    fn test_method_bound() {
        let point = Expr::new_object(TypeRef::named("PointF"), [Expr::single(0.0), Expr::single(1.0)]);
        assert!(!point.is_method_bound());
        assert!(!Expr::type_member(TypeRef::named("FontWeights"), "Bold").is_method_bound());

        assert!(Expr::var("brush").field("Color").is_method_bound());
        assert!(Expr::new_object(TypeRef::named("GradientStop"), [Expr::var("c")]).is_method_bound());
        assert!(Expr::this().call("Get", []).is_method_bound());
    }
}
