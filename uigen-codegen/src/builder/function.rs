//! Methods and the statements appended to them.

use super::{
    expr::Expr,
    types::{TypeRef, Visibility},
};

/// A statement in a method body.
///
/// The order of statements in a [`MethodSpec`] is the execution order of
/// the generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Local variable declaration: `Type name = init;`.
    Declare {
        /// Variable name.
        name: String,
        /// Declared type.
        ty: TypeRef,
        /// Initial value.
        init: Option<Expr>,
    },
    /// Assignment: `target = value;`.
    Assign {
        /// Assigned location.
        target: Expr,
        /// Assigned value.
        value: Expr,
    },
    /// Expression statement (typically a call).
    Expr(Expr),
    /// Return statement.
    Return(Option<Expr>),
}

impl Statement {
    /// Declare and initialize a local.
    pub fn declare(name: impl Into<String>, ty: TypeRef, init: Expr) -> Self {
        Self::Declare {
            name: name.into(),
            ty,
            init: Some(init),
        }
    }

    /// Assign a value.
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    /// Create an expression statement.
    pub fn expr(expr: Expr) -> Self {
        Self::Expr(expr)
    }

    /// Create a return statement.
    pub fn return_(value: Expr) -> Self {
        Self::Return(Some(value))
    }

    /// Create an empty return statement.
    pub fn return_void() -> Self {
        Self::Return(None)
    }

    /// The declared variable name, for declarations.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Declare { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The assigned member name, for assignments to `x.Member`.
    pub fn assigned_member(&self) -> Option<&str> {
        match self {
            Self::Assign {
                target: Expr::Field { name, .. },
                ..
            } => Some(name),
            _ => None,
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl ParamSpec {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A method under construction.
///
/// The body is append-only: emitters push statements in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Return type.
    pub return_type: TypeRef,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the method is static.
    pub is_static: bool,
    body: Vec<Statement>,
}

impl MethodSpec {
    /// Create a new public instance method returning `void`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: TypeRef::Void,
            visibility: Visibility::Public,
            is_static: false,
            body: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Set return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    /// Make this method private.
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Make this method static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Append a statement to the body.
    pub fn push(&mut self, stmt: Statement) {
        self.body.push(stmt);
    }

    /// The body, in execution order.
    pub fn statements(&self) -> &[Statement] {
        &self.body
    }

    /// Number of statements in the body.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
