use uigen_core::{TypeKey, Value, known, sanitize_identifier};

use super::Props;
use crate::{
    builder::{Expr, Statement, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator},
};

/// Owner of setter properties when the style has no target type.
const DEFAULT_OWNER: &str = "UIElement";

/// `new Style(typeof(T)[, basedOn])` plus one `Setters.Add` per setter.
#[derive(Debug, Clone, Copy)]
pub struct StyleEmitter;

impl ValueEmitter for StyleEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(known::STYLE)
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let props = Props::of(value)?;
        let target = props
            .opt_string("TargetType")?
            .map(|name| TypeRef::from_key(&TypeKey::new(name)));

        let based_on = props.get("BasedOn")?;
        let based_on = if based_on.is_null() {
            None
        } else {
            let local = generator.nested_name(base_name, "BasedOn");
            Some(generator.emit(ctx, &based_on, &local)?)
        };

        let mut setters = Vec::new();
        for setter in props.list("Setters")? {
            let setter = Props::of(&setter)?;
            let property = setter.string("Property")?;
            let (owner, name) = match property.rsplit_once('.') {
                Some((owner, name)) => (TypeRef::named(owner), name.to_string()),
                None => (
                    target
                        .clone()
                        .unwrap_or_else(|| TypeRef::named(DEFAULT_OWNER)),
                    property.clone(),
                ),
            };
            let local = generator.nested_name(base_name, &sanitize_identifier(&name));
            let value = generator.emit(ctx, &setter.get("Value")?, &local)?;
            let dependency_property = Expr::type_member(owner, format!("{name}Property"));
            setters.push(Expr::new_object(
                TypeRef::named("Setter"),
                [dependency_property, value],
            ));
        }

        let mut args = Vec::with_capacity(2);
        if let Some(target) = target {
            args.push(Expr::type_of(target));
        }
        args.extend(based_on);

        let ty = TypeRef::named("Style");
        ctx.push(Statement::declare(
            base_name,
            ty.clone(),
            Expr::new_object(ty, args),
        ));
        let style = Expr::var(base_name);
        for setter in setters {
            ctx.push(Statement::expr(
                style.clone().field("Setters").call("Add", [setter]),
            ));
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::testing::emit;

    fn button_style(setters: Vec<Value>) -> Value {
        known::object(known::STYLE)
            .with("TargetType", "App.Controls.Button")
            .with("Setters", Value::List(setters))
            .into_value()
    }

    #[test]
    fn test_setters_use_dependency_properties() {
        let style = button_style(vec![
            known::setter_value("Width", 120.0),
            known::setter_value(
                "Background",
                known::solid_color_brush_value(known::color_value(255, 0, 0, 0)),
            ),
        ]);
        let out = emit(&style, "buttonStyle");

        let body = out.method.statements();
        // Background brush: declaration and color assignment come first.
        assert_eq!(body[0].declared_name(), Some("buttonStyle_Background"));
        assert_eq!(
            body[2],
            Statement::declare(
                "buttonStyle",
                TypeRef::named("Style"),
                Expr::new_object(
                    TypeRef::named("Style"),
                    [Expr::type_of(TypeRef::named("Button"))]
                )
            )
        );
        assert_eq!(
            body[3],
            Statement::expr(Expr::var("buttonStyle").field("Setters").call(
                "Add",
                [Expr::new_object(
                    TypeRef::named("Setter"),
                    [
                        Expr::type_member(TypeRef::named("Button"), "WidthProperty"),
                        Expr::double(120.0)
                    ]
                )]
            ))
        );
        assert_eq!(body.len(), 5);
    }

    #[test]
    fn test_based_on_is_second_argument() {
        let base = button_style(Vec::new());
        let derived = known::object(known::STYLE)
            .with("TargetType", "Button")
            .with("BasedOn", base)
            .into_value();
        let out = emit(&derived, "derived");

        let body = out.method.statements();
        assert_eq!(body[0].declared_name(), Some("derived_BasedOn"));
        match &body[1] {
            Statement::Declare {
                init: Some(Expr::New { args, .. }),
                ..
            } => assert_eq!(args[1], Expr::var("derived_BasedOn")),
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn test_qualified_setter_property_names_owner() {
        let style = known::object(known::STYLE)
            .with(
                "Setters",
                Value::List(vec![known::setter_value("Grid.Row", 1)]),
            )
            .into_value();
        let out = emit(&style, "s");

        let body = out.method.statements();
        assert_eq!(
            body[1],
            Statement::expr(Expr::var("s").field("Setters").call(
                "Add",
                [Expr::new_object(
                    TypeRef::named("Setter"),
                    [
                        Expr::type_member(TypeRef::named("Grid"), "RowProperty"),
                        Expr::int(1)
                    ]
                )]
            ))
        );
    }
}
