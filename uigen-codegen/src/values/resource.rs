use tracing::trace;
use uigen_core::{TypeKey, Value, known};

use super::Props;
use crate::{
    builder::{Expr, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator},
};

/// A reference to a named resource.
///
/// Keys already recorded in the shared dictionary resolve to the recorded
/// expression; others are looked up at runtime. So are recorded expressions
/// that read locals when the reference sits in a template factory, where
/// those locals are out of scope.
#[derive(Debug, Clone, Copy)]
pub struct ResourceReferenceEmitter;

impl ValueEmitter for ResourceReferenceEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(known::RESOURCE_REFERENCE)
    }

    fn emit(
        &self,
        _generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        _base_name: &str,
    ) -> Result<Expr> {
        let key = Props::of(value)?.string("ResourceKey")?;
        if let Some(expr) = ctx.resources().and_then(|r| r.get(&key)) {
            if !(ctx.is_nested() && expr.is_method_bound()) {
                trace!(%key, "resource resolved from dictionary");
                return Ok(expr.clone());
            }
            trace!(%key, "recorded resource not in scope, deferring lookup");
        }
        Ok(Expr::new_object(
            TypeRef::named("ResourceReferenceExpression"),
            [Expr::string(key)],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{ClassSpec, MethodSpec, Statement},
        emit::ResourceDictionary,
        values::testing::emit,
    };

    fn factory_body(resources: &mut ResourceDictionary) -> Vec<Statement> {
        let template = known::object(known::CONTROL_TEMPLATE)
            .with("TargetType", "Button")
            .with("VisualTree", known::resource_reference_value("Accent"))
            .into_value();

        let mut generator = ValueGenerator::new();
        let mut class = ClassSpec::new("Dictionary1");
        let mut method = MethodSpec::new("InitializeResources");
        generator
            .process(&mut class, &mut method, &template, "button", Some(resources))
            .unwrap();
        class.method("button_Factory").unwrap().statements().to_vec()
    }

    #[test]
    fn test_unknown_key_is_deferred() {
        let out = emit(&known::resource_reference_value("Accent"), "r");
        assert_eq!(
            out.expr,
            Expr::new_object(
                TypeRef::named("ResourceReferenceExpression"),
                [Expr::string("Accent")]
            )
        );
    }

    #[test]
    fn test_known_key_reuses_recorded_expression() {
        let mut resources = ResourceDictionary::new();
        resources.insert("Accent", Expr::var("accent"));

        let mut generator = ValueGenerator::new();
        let mut class = ClassSpec::new("Dictionary1");
        let mut method = MethodSpec::new("InitializeResources");
        let expr = generator
            .process(
                &mut class,
                &mut method,
                &known::resource_reference_value("Accent"),
                "r",
                Some(&mut resources),
            )
            .unwrap();

        assert_eq!(expr, Expr::var("accent"));
        assert!(method.is_empty());
    }

    #[test]
    fn test_outer_local_is_deferred_inside_factory() {
        let mut resources = ResourceDictionary::new();
        resources.insert("Accent", Expr::var("accent"));

        let body = factory_body(&mut resources);
        assert_eq!(
            body,
            [Statement::return_(Expr::new_object(
                TypeRef::named("ResourceReferenceExpression"),
                [Expr::string("Accent")]
            ))]
        );
    }

    #[test]
    fn test_scope_free_expression_is_reused_inside_factory() {
        let color = Expr::new_object(
            TypeRef::named("ColorW"),
            [Expr::int(255), Expr::int(0), Expr::int(0), Expr::int(255)],
        );
        let mut resources = ResourceDictionary::new();
        resources.insert("Accent", color.clone());

        let body = factory_body(&mut resources);
        assert_eq!(body, [Statement::return_(color)]);
    }
}
