//! Type descriptors.
//!
//! A [`TypeInfo`] is the explicit stand-in for runtime introspection: it
//! names a type, says what kind of type it is, and lists the properties
//! that can be read from and written to its instances.

use std::{fmt, sync::Arc};

use bitflags::bitflags;
use serde::Serialize;

use crate::type_key::{PrimitiveKind, TypeKey};

bitflags! {
    /// Declared markers on a type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u8 {
        /// Base type for view-model locators. Types deriving from a type with
        /// this marker are constructed without copying their properties.
        const VIEW_MODEL_LOCATOR_BASE = 1 << 0;
    }
}

/// What kind of type a descriptor describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// A primitive (bool, integers, floats, char, string).
    Primitive(PrimitiveKind),
    /// An enumeration with its symbolic members, in declaration order.
    Enum {
        /// Member names.
        members: Vec<String>,
    },
    /// A class or struct with properties.
    Class,
}

/// Why a property is not mirrored by reflective emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The property has no public getter.
    NoGetter,
    /// The getter requires arguments (an indexer).
    RequiresArguments,
    /// The property has no public setter.
    NoSetter,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoGetter => write!(f, "no public getter"),
            SkipReason::RequiresArguments => write!(f, "getter requires arguments"),
            SkipReason::NoSetter => write!(f, "no public setter"),
        }
    }
}

/// Metadata for one property of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Whether the property exposes a getter.
    pub readable: bool,
    /// Whether the property exposes a setter.
    pub writable: bool,
    /// Number of parameters the getter takes (non-zero for indexers).
    pub parameters: usize,
}

impl PropertyInfo {
    /// A property with a getter and a setter.
    pub fn read_write(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readable: true,
            writable: true,
            parameters: 0,
        }
    }

    /// A property with only a getter.
    pub fn read_only(name: impl Into<String>) -> Self {
        Self {
            writable: false,
            ..Self::read_write(name)
        }
    }

    /// A property with only a setter.
    pub fn write_only(name: impl Into<String>) -> Self {
        Self {
            readable: false,
            ..Self::read_write(name)
        }
    }

    /// An indexed property whose getter takes `parameters` arguments.
    pub fn indexer(name: impl Into<String>, parameters: usize) -> Self {
        Self {
            parameters,
            ..Self::read_write(name)
        }
    }

    /// Check whether reflective emission can copy this property.
    ///
    /// A property is mirrored when it has a getter taking no arguments and
    /// a setter.
    pub fn mirror_status(&self) -> Result<(), SkipReason> {
        if !self.readable {
            Err(SkipReason::NoGetter)
        } else if self.parameters > 0 {
            Err(SkipReason::RequiresArguments)
        } else if !self.writable {
            Err(SkipReason::NoSetter)
        } else {
            Ok(())
        }
    }
}

/// Descriptor of a runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    key: TypeKey,
    kind: TypeKind,
    base: Option<Arc<TypeInfo>>,
    flags: TypeFlags,
    properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    /// Start describing a class type.
    pub fn class(full_name: impl AsRef<str>) -> TypeInfoBuilder {
        TypeInfoBuilder::new(TypeKey::new(full_name), TypeKind::Class)
    }

    /// Describe an enum type with the given members.
    pub fn enumeration<I, S>(full_name: impl AsRef<str>, members: I) -> Arc<TypeInfo>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = members.into_iter().map(Into::into).collect();
        TypeInfoBuilder::new(TypeKey::new(full_name), TypeKind::Enum { members }).build()
    }

    /// Describe a primitive type.
    pub fn primitive(kind: PrimitiveKind) -> Arc<TypeInfo> {
        TypeInfoBuilder::new(kind.type_key(), TypeKind::Primitive(kind)).build()
    }

    /// The type key.
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// The short type name.
    pub fn name(&self) -> &str {
        self.key.name()
    }

    /// The kind of type.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// The declared base type.
    pub fn base(&self) -> Option<&Arc<TypeInfo>> {
        self.base.as_ref()
    }

    /// Declared markers.
    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check if this is an enum type.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum { .. })
    }

    /// Enum members, or an empty slice for non-enum types.
    pub fn enum_members(&self) -> &[String] {
        match &self.kind {
            TypeKind::Enum { members } => members,
            _ => &[],
        }
    }

    /// Check whether the declared base type is a view-model locator base.
    pub fn derives_from_view_model_locator(&self) -> bool {
        self.base
            .as_ref()
            .is_some_and(|b| b.flags.contains(TypeFlags::VIEW_MODEL_LOCATOR_BASE))
    }
}

/// Builder for [`TypeInfo`] descriptors.
#[derive(Debug, Clone)]
pub struct TypeInfoBuilder {
    info: TypeInfo,
}

impl TypeInfoBuilder {
    fn new(key: TypeKey, kind: TypeKind) -> Self {
        Self {
            info: TypeInfo {
                key,
                kind,
                base: None,
                flags: TypeFlags::empty(),
                properties: Vec::new(),
            },
        }
    }

    /// Set the declared base type.
    pub fn base(mut self, base: Arc<TypeInfo>) -> Self {
        self.info.base = Some(base);
        self
    }

    /// Add marker flags.
    pub fn flags(mut self, flags: TypeFlags) -> Self {
        self.info.flags |= flags;
        self
    }

    /// Add a property.
    pub fn property(mut self, property: PropertyInfo) -> Self {
        self.info.properties.push(property);
        self
    }

    /// Add several read/write properties.
    pub fn read_write<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info
            .properties
            .extend(names.into_iter().map(PropertyInfo::read_write));
        self
    }

    /// Finish the descriptor.
    pub fn build(self) -> Arc<TypeInfo> {
        Arc::new(self.info)
    }
}
