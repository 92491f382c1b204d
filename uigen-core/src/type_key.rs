//! Stable type identifiers.

use std::{fmt, sync::Arc};

/// A stable identifier for a runtime type.
///
/// Keys are fully qualified names (e.g. `"System.Windows.Media.SolidColorBrush"`).
/// Cloning is cheap; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
    /// Create a key from a fully qualified type name.
    pub fn new(full_name: impl AsRef<str>) -> Self {
        Self(Arc::from(full_name.as_ref()))
    }

    /// The fully qualified name.
    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// The short name, without namespace (e.g. `"SolidColorBrush"`).
    pub fn name(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The namespace, if the name is qualified.
    pub fn namespace(&self) -> Option<&str> {
        self.0.rfind('.').map(|idx| &self.0[..idx])
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeKey {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

/// Primitive runtime types.
///
/// Each primitive has a well-known [`TypeKey`] so the dispatcher can treat
/// primitives and objects uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Char,
    Double,
    Single,
    String,
}

impl PrimitiveKind {
    /// All primitive kinds, in registration order.
    pub const ALL: [PrimitiveKind; 13] = [
        Self::Bool,
        Self::Byte,
        Self::SByte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Char,
        Self::Double,
        Self::Single,
        Self::String,
    ];

    /// The fully qualified runtime type name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Bool => "System.Boolean",
            Self::Byte => "System.Byte",
            Self::SByte => "System.SByte",
            Self::Int16 => "System.Int16",
            Self::UInt16 => "System.UInt16",
            Self::Int32 => "System.Int32",
            Self::UInt32 => "System.UInt32",
            Self::Int64 => "System.Int64",
            Self::UInt64 => "System.UInt64",
            Self::Char => "System.Char",
            Self::Double => "System.Double",
            Self::Single => "System.Single",
            Self::String => "System.String",
        }
    }

    /// The runtime type key.
    pub fn type_key(&self) -> TypeKey {
        TypeKey::new(self.full_name())
    }

    /// Check if this is an integral numeric type.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::SByte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
        )
    }
}
