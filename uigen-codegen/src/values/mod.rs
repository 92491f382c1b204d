//! Built-in emitters for well-known value shapes.
//!
//! Every emitter here is registered by [`builtins`] when a generator is
//! created. Emitters read their input through the [`Reflect`] capability and
//! hand nested values back to the generator, so a brush inside a setter
//! inside a style is dispatched like a top-level value.

mod animation;
mod brush;
mod font;
mod initializer;
mod list;
mod primitive;
mod resource;
mod structs;
mod style;
mod template;

use std::sync::Arc;

pub use animation::AnimationEmitter;
pub use brush::{LinearGradientBrushEmitter, SolidColorBrushEmitter};
pub use font::{FontFamilyEmitter, FontWeightEmitter};
pub use initializer::InitializerEmitter;
pub use list::ListEmitter;
pub use primitive::PrimitiveEmitter;
pub use resource::ResourceReferenceEmitter;
pub use structs::ConstructorEmitter;
pub use style::StyleEmitter;
pub use template::TemplateEmitter;
use uigen_core::{PrimitiveKind, Reflect, Value};

use crate::{
    builder::Expr,
    emit::{EmitContext, EmitError, Result, ValueEmitter, ValueGenerator},
};

/// One emitter per well-known value shape.
pub fn builtins() -> Vec<Arc<dyn ValueEmitter>> {
    let mut emitters: Vec<Arc<dyn ValueEmitter>> = PrimitiveKind::ALL
        .into_iter()
        .map(|kind| Arc::new(PrimitiveEmitter::new(kind)) as Arc<dyn ValueEmitter>)
        .collect();

    emitters.extend(
        ConstructorEmitter::ALL
            .into_iter()
            .map(|e| Arc::new(e) as Arc<dyn ValueEmitter>),
    );
    emitters.extend(
        InitializerEmitter::ALL
            .into_iter()
            .map(|e| Arc::new(e) as Arc<dyn ValueEmitter>),
    );
    emitters.extend(
        TemplateEmitter::ALL
            .into_iter()
            .map(|e| Arc::new(e) as Arc<dyn ValueEmitter>),
    );
    emitters.extend(
        AnimationEmitter::ALL
            .into_iter()
            .map(|e| Arc::new(e) as Arc<dyn ValueEmitter>),
    );
    emitters.push(Arc::new(SolidColorBrushEmitter));
    emitters.push(Arc::new(LinearGradientBrushEmitter));
    emitters.push(Arc::new(ResourceReferenceEmitter));
    emitters.push(Arc::new(StyleEmitter));
    emitters.push(Arc::new(FontFamilyEmitter));
    emitters.push(Arc::new(FontWeightEmitter));
    emitters.push(Arc::new(ListEmitter));
    emitters
}

/// Typed property reads on an object value.
///
/// Failed reads become [`EmitError::PropertyAccess`]; values of the wrong
/// shape become [`EmitError::UnsupportedValue`].
pub(crate) struct Props<'v> {
    obj: &'v dyn Reflect,
}

impl<'v> Props<'v> {
    /// Wrap an object value.
    pub(crate) fn of(value: &'v Value) -> Result<Self> {
        value
            .as_object()
            .map(|obj| Self { obj: obj.as_ref() })
            .ok_or_else(|| EmitError::unsupported(value, "expected an object"))
    }

    pub(crate) fn type_name(&self) -> &str {
        self.obj.type_info().key().full_name()
    }

    pub(crate) fn get(&self, property: &str) -> Result<Value> {
        self.obj
            .get(property)
            .map_err(|source| EmitError::property_access(self.obj, property, source))
    }

    pub(crate) fn f32(&self, property: &str) -> Result<f32> {
        self.opt_f32(property)?
            .ok_or_else(|| self.mismatch(property, "a number"))
    }

    pub(crate) fn opt_f32(&self, property: &str) -> Result<Option<f32>> {
        match self.get(property)? {
            Value::Null => Ok(None),
            other => other
                .as_f64()
                .map(|v| Some(v as f32))
                .ok_or_else(|| self.mismatch(property, "a number")),
        }
    }

    pub(crate) fn i32(&self, property: &str) -> Result<i32> {
        self.get(property)?
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| self.mismatch(property, "a 32-bit integer"))
    }

    pub(crate) fn opt_string(&self, property: &str) -> Result<Option<String>> {
        match self.get(property)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            _ => Err(self.mismatch(property, "a string")),
        }
    }

    pub(crate) fn string(&self, property: &str) -> Result<String> {
        self.opt_string(property)?
            .ok_or_else(|| self.mismatch(property, "a string"))
    }

    /// Items of a list property; null reads as empty.
    pub(crate) fn list(&self, property: &str) -> Result<Vec<Value>> {
        match self.get(property)? {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => Ok(items),
            _ => Err(self.mismatch(property, "a list")),
        }
    }

    fn mismatch(&self, property: &str, expected: &str) -> EmitError {
        EmitError::UnsupportedValue {
            type_name: self.type_name().to_string(),
            reason: format!("property '{property}' is not {expected}"),
        }
    }
}

/// How a mapped property is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Emitted through the generator.
    Value,
    /// Converted to a single-precision literal.
    Single,
}

/// A property copied from the runtime object to the generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Property read on the runtime object.
    pub source: &'static str,
    /// Member assigned on the generated object.
    pub target: &'static str,
    /// Encoding of the value.
    pub kind: FieldKind,
}

impl Field {
    pub const fn value(name: &'static str) -> Self {
        Self {
            source: name,
            target: name,
            kind: FieldKind::Value,
        }
    }

    pub const fn single(name: &'static str) -> Self {
        Self {
            source: name,
            target: name,
            kind: FieldKind::Single,
        }
    }

    pub const fn renamed(source: &'static str, target: &'static str) -> Self {
        Self {
            source,
            target,
            kind: FieldKind::Value,
        }
    }
}

/// Emit every non-null mapped field, returning `(member, expr)` pairs.
pub(crate) fn emit_fields(
    generator: &mut ValueGenerator,
    ctx: &mut EmitContext<'_>,
    props: &Props<'_>,
    base_name: &str,
    fields: &[Field],
) -> Result<Vec<(String, Expr)>> {
    let mut assignments = Vec::with_capacity(fields.len());
    for field in fields {
        let expr = match field.kind {
            FieldKind::Single => props.opt_f32(field.source)?.map(Expr::single),
            FieldKind::Value => {
                let value = props.get(field.source)?;
                if value.is_null() {
                    None
                } else {
                    let local = generator.nested_name(base_name, field.target);
                    Some(generator.emit(ctx, &value, &local)?)
                }
            }
        };
        if let Some(expr) = expr {
            assignments.push((field.target.to_string(), expr));
        }
    }
    Ok(assignments)
}


#[cfg(test)]
mod tests {
    use uigen_core::{AccessError, TypeInfo, known};

    use super::*;

    #[derive(Debug)]
    struct Broken(Arc<TypeInfo>);

    impl Reflect for Broken {
        fn type_info(&self) -> &Arc<TypeInfo> {
            &self.0
        }

        fn get(&self, property: &str) -> std::result::Result<Value, AccessError> {
            Err(AccessError::Getter {
                property: property.to_string(),
                message: "device lost".to_string(),
            })
        }
    }

    #[test]
    fn test_builtin_keys_are_unique() {
        let emitters = builtins();
        let mut keys: Vec<_> = emitters.iter().map(|e| e.value_type()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_props_reads_and_mismatches() {
        let value = known::object(known::SOUND_SOURCE)
            .with("SoundAsset", "click")
            .with("Volume", 0.5)
            .into_value();
        let props = Props::of(&value).unwrap();

        assert_eq!(props.string("SoundAsset").unwrap(), "click");
        assert_eq!(props.f32("Volume").unwrap(), 0.5);
        assert!(matches!(
            props.f32("SoundAsset"),
            Err(EmitError::UnsupportedValue { .. })
        ));
        assert!(matches!(
            props.get("Pitch"),
            Err(EmitError::PropertyAccess { .. })
        ));
    }

    #[test]
    fn test_props_rejects_non_objects() {
        assert!(Props::of(&Value::Int32(1)).is_err());
    }

    #[test]
    fn test_getter_failure_surfaces_from_builtin() {
        let value = Value::object(Broken(known::descriptor(known::COLOR).unwrap()));
        let err = testing::try_emit(&value, "color").err().unwrap();

        match err {
            EmitError::PropertyAccess {
                type_name, source, ..
            } => {
                assert_eq!(type_name, known::COLOR);
                assert!(matches!(source, AccessError::Getter { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
