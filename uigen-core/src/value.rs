//! Runtime values encountered while walking a resource dictionary.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    type_info::TypeInfo,
    type_key::{PrimitiveKind, TypeKey},
};

/// Fully qualified name of the runtime list type.
pub const LIST_TYPE: &str = "System.Collections.Generic.List";

/// Error raised when reading a property from a runtime object fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("type '{type_name}' has no property '{property}'")]
    UnknownProperty { type_name: String, property: String },

    #[error("getter for '{property}' failed: {message}")]
    Getter { property: String, message: String },
}

/// Read access to the properties of a runtime object.
///
/// This is the capability reflective emission relies on. Host types can
/// implement it directly; [`DynamicObject`] covers the common case of a
/// property bag.
pub trait Reflect: fmt::Debug + Send + Sync {
    /// The descriptor of the object's exact runtime type.
    fn type_info(&self) -> &Arc<TypeInfo>;

    /// Read the current value of a property.
    fn get(&self, property: &str) -> Result<Value, AccessError>;
}

/// An enum value: its type and the symbolic member it is set to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    ty: Arc<TypeInfo>,
    member: String,
}

impl EnumValue {
    /// Create an enum value if `member` is declared by `ty`.
    pub fn new(ty: Arc<TypeInfo>, member: impl Into<String>) -> Option<Self> {
        let member = member.into();
        ty.enum_members()
            .iter()
            .any(|m| *m == member)
            .then_some(Self { ty, member })
    }

    /// The enum type.
    pub fn type_info(&self) -> &Arc<TypeInfo> {
        &self.ty
    }

    /// The symbolic member.
    pub fn member(&self) -> &str {
        &self.member
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.member)
    }
}

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
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
    Enum(EnumValue),
    List(Vec<Value>),
    Object(Arc<dyn Reflect>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Wrap a reflectable object.
    pub fn object(obj: impl Reflect + 'static) -> Self {
        Self::Object(Arc::new(obj))
    }

    /// Check for null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The primitive kind, if this is a primitive value.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        let kind = match self {
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Byte(_) => PrimitiveKind::Byte,
            Self::SByte(_) => PrimitiveKind::SByte,
            Self::Int16(_) => PrimitiveKind::Int16,
            Self::UInt16(_) => PrimitiveKind::UInt16,
            Self::Int32(_) => PrimitiveKind::Int32,
            Self::UInt32(_) => PrimitiveKind::UInt32,
            Self::Int64(_) => PrimitiveKind::Int64,
            Self::UInt64(_) => PrimitiveKind::UInt64,
            Self::Char(_) => PrimitiveKind::Char,
            Self::Single(_) => PrimitiveKind::Single,
            Self::Double(_) => PrimitiveKind::Double,
            Self::String(_) => PrimitiveKind::String,
            Self::Null | Self::Enum(_) | Self::List(_) | Self::Object(_) => return None,
        };
        Some(kind)
    }

    /// The key of the exact runtime type, or `None` for null.
    pub fn type_key(&self) -> Option<TypeKey> {
        match self {
            Self::Null => None,
            Self::Enum(e) => Some(e.type_info().key().clone()),
            Self::List(_) => Some(TypeKey::new(LIST_TYPE)),
            Self::Object(obj) => Some(obj.type_info().key().clone()),
            other => other.primitive_kind().map(|p| p.type_key()),
        }
    }

    /// Human-readable name of the runtime type, used in error messages.
    pub fn type_name(&self) -> String {
        self.type_key()
            .map(|k| k.full_name().to_string())
            .unwrap_or_else(|| "null".to_string())
    }

    /// The object, if this is an object value.
    pub fn as_object(&self) -> Option<&Arc<dyn Reflect>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Numeric value widened to `f64`, for integral and floating values.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Byte(v) => Some(v.into()),
            Self::SByte(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::Int64(v) => Some(v as f64),
            Self::UInt64(v) => Some(v as f64),
            Self::Single(v) => Some(v.into()),
            Self::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Integral value widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Byte(v) => Some(v.into()),
            Self::SByte(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::Int64(v) => Some(v),
            Self::UInt64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// The string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The items, if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Single(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A property bag typed by a [`TypeInfo`].
///
/// Reading a declared property that was never set yields [`Value::Null`];
/// reading an undeclared property fails.
#[derive(Debug, Clone)]
pub struct DynamicObject {
    ty: Arc<TypeInfo>,
    values: IndexMap<String, Value>,
}

impl DynamicObject {
    /// Create an object with no property set.
    pub fn new(ty: Arc<TypeInfo>) -> Self {
        Self {
            ty,
            values: IndexMap::new(),
        }
    }

    /// Set a property value.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(property.into(), value.into());
    }

    /// Finish building and wrap as a [`Value`].
    pub fn into_value(self) -> Value {
        Value::Object(Arc::new(self))
    }
}

impl Reflect for DynamicObject {
    fn type_info(&self) -> &Arc<TypeInfo> {
        &self.ty
    }

    fn get(&self, property: &str) -> Result<Value, AccessError> {
        if let Some(value) = self.values.get(property) {
            return Ok(value.clone());
        }
        if self.ty.property(property).is_some() {
            Ok(Value::Null)
        } else {
            Err(AccessError::UnknownProperty {
                type_name: self.ty.key().full_name().to_string(),
                property: property.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_info::PropertyInfo;

    fn widget() -> Arc<TypeInfo> {
        TypeInfo::class("App.Widget")
            .property(PropertyInfo::read_write("Width"))
            .property(PropertyInfo::read_only("Name"))
            .build()
    }

    #[test]
    fn test_type_keys() {
        assert_eq!(Value::Null.type_key(), None);
        assert_eq!(
            Value::Int32(1).type_key(),
            Some(TypeKey::new("System.Int32"))
        );
        assert_eq!(
            Value::List(vec![]).type_key(),
            Some(TypeKey::new(LIST_TYPE))
        );
        let obj = DynamicObject::new(widget()).into_value();
        assert_eq!(obj.type_key(), Some(TypeKey::new("App.Widget")));
    }

    #[test]
    fn test_dynamic_object_get() {
        let obj = DynamicObject::new(widget()).with("Width", 10);

        assert!(matches!(obj.get("Width"), Ok(Value::Int32(10))));
        assert!(matches!(obj.get("Name"), Ok(Value::Null)));
        assert!(matches!(
            obj.get("Height"),
            Err(AccessError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn test_enum_value_requires_declared_member() {
        let ty = TypeInfo::enumeration("App.Mode", ["Off", "On"]);
        let on = EnumValue::new(ty.clone(), "On").expect("declared member");
        assert_eq!(on.to_string(), "On");
        assert!(EnumValue::new(ty, "Maybe").is_none());
    }

    #[test]
    fn test_numeric_widening() {
        assert_eq!(Value::Byte(7).as_f64(), Some(7.0));
        assert_eq!(Value::Single(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::UInt64(u64::MAX).as_i64(), None);
        assert_eq!(Value::string("x").as_f64(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<f64>).is_null());
        assert!(matches!(Value::from(Some(2.0)), Value::Double(v) if v == 2.0));
    }
}
