//! The dispatch driver.

use std::{collections::HashSet, fmt, sync::Arc};

use tracing::{debug, trace};
use uigen_core::{Reflect, TypeKey, Value, sanitize_identifier};

use super::{
    EmitContext, ValueEmitter,
    error::{EmitError, Result},
    options::GeneratorOptions,
    reflective::ReflectiveEmitter,
    registry::EmitterRegistry,
    report::EmissionReport,
    resources::ResourceDictionary,
};
use crate::builder::{ClassSpec, Expr, MethodSpec, TypeRef};

/// How the generator handles a value, checked in this order.
#[derive(Clone)]
pub enum Strategy {
    /// The value is null: emit the null literal.
    Null,
    /// An emitter is registered for the exact runtime type.
    Registered(Arc<dyn ValueEmitter>),
    /// An enum member: emit `Type.Member`.
    Enum,
    /// The declared base is a view-model locator: emit `new T()` only.
    ViewModelLocator,
    /// Synthesize an emitter from the type descriptor.
    Reflective,
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Registered(emitter) => f
                .debug_tuple("Registered")
                .field(&emitter.value_type().full_name())
                .finish(),
            Self::Enum => f.write_str("Enum"),
            Self::ViewModelLocator => f.write_str("ViewModelLocator"),
            Self::Reflective => f.write_str("Reflective"),
        }
    }
}

/// Turns runtime values into construction code.
///
/// The generator owns its registry: emitters synthesized for one generator
/// are never seen by another, and each synthesis happens once per type.
///
/// # Example
///
/// ```
/// use uigen_codegen::{
///     builder::{ClassSpec, MethodSpec},
///     emit::ValueGenerator,
/// };
/// use uigen_core::known;
///
/// let mut generator = ValueGenerator::new();
/// let mut class = ClassSpec::new("Dictionary1");
/// let mut method = MethodSpec::new("InitializeResources");
///
/// let color = known::color_value(255, 255, 0, 0);
/// let expr = generator
///     .process(&mut class, &mut method, &color, "accent", None)
///     .unwrap();
///
/// assert!(method.is_empty());
/// assert!(expr.constructed_type().is_some());
/// ```
#[derive(Debug)]
pub struct ValueGenerator {
    registry: EmitterRegistry,
    options: GeneratorOptions,
    report: EmissionReport,
    /// Objects whose emission has started and not yet finished.
    in_progress: HashSet<usize>,
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueGenerator {
    /// Create a generator with the built-in emitters and default options.
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    /// Create a generator with the built-in emitters.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            registry: EmitterRegistry::with_builtins(),
            options,
            report: EmissionReport::default(),
            in_progress: HashSet::new(),
        }
    }

    /// The options in effect.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// The registry, including emitters synthesized so far.
    pub fn registry(&self) -> &EmitterRegistry {
        &self.registry
    }

    /// What has been synthesized and skipped so far.
    pub fn report(&self) -> &EmissionReport {
        &self.report
    }

    /// Register an additional emitter.
    ///
    /// Fails with [`EmitError::DuplicateRegistration`] if the type already
    /// has one, built-in or synthesized.
    pub fn register(&mut self, emitter: Arc<dyn ValueEmitter>) -> Result<()> {
        self.registry.register_emitter(emitter)
    }

    /// Decide how `value` is handled.
    pub fn resolve(&self, value: &Value) -> Strategy {
        let Some(key) = value.type_key() else {
            return Strategy::Null;
        };
        if let Some(emitter) = self.registry.lookup(&key) {
            return Strategy::Registered(emitter.clone());
        }
        match value {
            Value::Enum(_) => Strategy::Enum,
            Value::Object(obj) if obj.type_info().is_enum() => Strategy::Enum,
            Value::Object(obj) if obj.type_info().derives_from_view_model_locator() => {
                Strategy::ViewModelLocator
            }
            _ => Strategy::Reflective,
        }
    }

    /// Emit `value` into the class and method under construction.
    ///
    /// This is the entry point for parsers; it returns the expression that
    /// evaluates to `value` when the generated method runs.
    #[tracing::instrument(skip_all, fields(base_name = %base_name, value_type = %value.type_name()))]
    pub fn process(
        &mut self,
        class: &mut ClassSpec,
        method: &mut MethodSpec,
        value: &Value,
        base_name: &str,
        resources: Option<&mut ResourceDictionary>,
    ) -> Result<Expr> {
        let mut ctx = EmitContext::new(class, method);
        ctx.resources = resources;
        self.emit(&mut ctx, value, base_name)
    }

    /// Emit `value` within an existing context.
    ///
    /// Emitters call this for nested values. An object reached again while
    /// its own emission is in progress fails with
    /// [`EmitError::UnsupportedValue`].
    pub fn emit(
        &mut self,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let strategy = self.resolve(value);
        trace!(value_type = %value.type_name(), ?strategy, base_name, "emitting value");

        let Some(identity) = value.as_object().map(object_identity) else {
            return self.dispatch(strategy, ctx, value, base_name);
        };
        if !self.in_progress.insert(identity) {
            return Err(EmitError::unsupported(value, "cyclic reference"));
        }
        let result = self.dispatch(strategy, ctx, value, base_name);
        self.in_progress.remove(&identity);
        result
    }

    fn dispatch(
        &mut self,
        strategy: Strategy,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        match strategy {
            Strategy::Null => Ok(Expr::null()),
            Strategy::Registered(emitter) => emitter.emit(self, ctx, value, base_name),
            Strategy::Enum => enum_member(value),
            Strategy::ViewModelLocator => {
                let key = value
                    .type_key()
                    .ok_or_else(|| EmitError::unsupported(value, "expected an object"))?;
                Ok(Expr::new_object(TypeRef::from_key(&key), []))
            }
            Strategy::Reflective => {
                let obj = value.as_object().ok_or_else(|| {
                    EmitError::unsupported(value, "no emitter is registered for this type")
                })?;
                let emitter = self.synthesize(obj.as_ref())?;
                emitter.emit(self, ctx, value, base_name)
            }
        }
    }

    /// Local name for a value nested under `base_name`.
    pub fn nested_name(&self, base_name: &str, member: &str) -> String {
        sanitize_identifier(&format!(
            "{base_name}{}{member}",
            self.options.name_separator
        ))
    }

    fn synthesize(&mut self, obj: &dyn Reflect) -> Result<Arc<dyn ValueEmitter>> {
        let ty = obj.type_info();
        let key: &TypeKey = ty.key();
        let emitter = ReflectiveEmitter::new(ty.clone(), self.options.property_order);
        for (property, reason) in emitter.skipped() {
            debug!(value_type = %key, property, %reason, "property not mirrored");
            self.report
                .record_skipped(key.full_name(), property, *reason);
        }

        let emitter: Arc<dyn ValueEmitter> = Arc::new(emitter);
        self.registry.register(key.clone(), emitter.clone())?;
        self.report.record_synthesized(key.full_name());
        debug!(value_type = %key, "synthesized emitter");
        Ok(emitter)
    }
}

fn enum_member(value: &Value) -> Result<Expr> {
    match value {
        Value::Enum(member) => Ok(Expr::type_member(
            TypeRef::from_key(member.type_info().key()),
            member.member(),
        )),
        other => Err(EmitError::unsupported(
            other,
            "enum values must be given as an enum member",
        )),
    }
}

fn object_identity(obj: &Arc<dyn Reflect>) -> usize {
    Arc::as_ptr(obj).cast::<()>() as usize
}

#[cfg(test)]
mod tests {
    use uigen_core::{DynamicObject, TypeFlags, TypeInfo, known};

    use super::*;

    fn scope() -> (ClassSpec, MethodSpec) {
        (
            ClassSpec::new("Dictionary1"),
            MethodSpec::new("InitializeResources"),
        )
    }

    #[test]
    fn test_resolve_order() {
        let generator = ValueGenerator::new();

        assert!(matches!(generator.resolve(&Value::Null), Strategy::Null));
        assert!(matches!(
            generator.resolve(&Value::Int32(3)),
            Strategy::Registered(_)
        ));
        assert!(matches!(
            generator.resolve(&known::stretch_value("Fill").unwrap()),
            Strategy::Enum
        ));

        let widget = DynamicObject::new(TypeInfo::class("App.Widget").build()).into_value();
        assert!(matches!(generator.resolve(&widget), Strategy::Reflective));
    }

    #[test]
    fn test_view_model_locator_is_constructed_without_statements() {
        let base = TypeInfo::class("App.ViewModelLocatorBase")
            .flags(TypeFlags::VIEW_MODEL_LOCATOR_BASE)
            .build();
        let locator = TypeInfo::class("App.Locator")
            .base(base)
            .read_write(["Main"])
            .build();
        let value = DynamicObject::new(locator).with("Main", 1).into_value();

        let mut generator = ValueGenerator::new();
        let (mut class, mut method) = scope();
        let expr = generator
            .process(&mut class, &mut method, &value, "locator", None)
            .unwrap();

        assert_eq!(expr, Expr::new_object(TypeRef::named("Locator"), []));
        assert!(method.is_empty());
        assert!(generator.report().is_empty());
    }

    #[test]
    fn test_enum_typed_object_is_rejected() {
        let mode = TypeInfo::enumeration("App.Mode", ["Off", "On"]);
        let value = DynamicObject::new(mode).into_value();

        let mut generator = ValueGenerator::new();
        assert!(matches!(generator.resolve(&value), Strategy::Enum));

        let (mut class, mut method) = scope();
        let err = generator
            .process(&mut class, &mut method, &value, "mode", None)
            .unwrap_err();

        assert!(matches!(err, EmitError::UnsupportedValue { .. }));
        assert_eq!(err.type_name(), "App.Mode");
        assert!(method.is_empty());
        assert!(!generator.registry().contains(&TypeKey::new("App.Mode")));
    }

    #[test]
    fn test_same_object_twice_is_not_a_cycle() {
        let ty = TypeInfo::class("App.Pair").read_write(["Left", "Right"]).build();
        let leaf = DynamicObject::new(TypeInfo::class("App.Leaf").build()).into_value();
        let pair = DynamicObject::new(ty)
            .with("Left", leaf.clone())
            .with("Right", leaf)
            .into_value();

        let mut generator = ValueGenerator::new();
        let (mut class, mut method) = scope();
        generator
            .process(&mut class, &mut method, &pair, "pair", None)
            .unwrap();

        let declared: Vec<_> = method
            .statements()
            .iter()
            .filter_map(|s| s.declared_name())
            .collect();
        assert_eq!(declared, ["pair_Left", "pair_Right", "pair"]);
    }

    #[test]
    fn test_nested_name_uses_separator() {
        let generator = ValueGenerator::new();
        assert_eq!(generator.nested_name("brush", "Color"), "brush_Color");

        let generator =
            ValueGenerator::with_options(GeneratorOptions::default().name_separator(""));
        assert_eq!(generator.nested_name("brush", "Color"), "brushColor");
    }
}
