//! Templates: content is built by a factory method on the generated class.

use uigen_core::{TypeKey, Value, known};

use super::Props;
use crate::{
    builder::{Expr, MethodSpec, ParamSpec, Statement, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator},
};

/// Emits the template content into `{base}_Factory(UIElement parent)` and
/// returns `new Target([typeof(T),] factory)`.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEmitter {
    source: &'static str,
    target: &'static str,
    /// Property naming the type the template applies to, if any.
    type_property: Option<&'static str>,
}

impl TemplateEmitter {
    pub const DATA_TEMPLATE: Self = Self {
        source: known::DATA_TEMPLATE,
        target: "DataTemplate",
        type_property: Some("DataType"),
    };

    pub const CONTROL_TEMPLATE: Self = Self {
        source: known::CONTROL_TEMPLATE,
        target: "ControlTemplate",
        type_property: Some("TargetType"),
    };

    pub const ITEMS_PANEL_TEMPLATE: Self = Self {
        source: known::ITEMS_PANEL_TEMPLATE,
        target: "ControlTemplate",
        type_property: None,
    };

    pub const ALL: [Self; 3] = [
        Self::DATA_TEMPLATE,
        Self::CONTROL_TEMPLATE,
        Self::ITEMS_PANEL_TEMPLATE,
    ];
}

impl ValueEmitter for TemplateEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(self.source)
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let props = Props::of(value)?;
        let applies_to = match self.type_property {
            Some(property) => props.opt_string(property)?,
            None => None,
        };
        let content = props.get("VisualTree")?;

        let element = TypeRef::named("UIElement");
        let name = ctx.unique_method_name(&format!("{base_name}_Factory"));
        let mut factory = MethodSpec::new(&name)
            .private()
            .static_()
            .param(ParamSpec::new("parent", element.clone()))
            .returns(element);
        {
            let mut nested = ctx.nested(&mut factory);
            let local = generator.nested_name(base_name, "Root");
            let root = generator.emit(&mut nested, &content, &local)?;
            nested.push(Statement::return_(root));
        }
        ctx.class.add_method(factory);

        let mut args = Vec::with_capacity(2);
        if let Some(type_name) = applies_to {
            let key = TypeKey::new(type_name);
            args.push(Expr::type_of(TypeRef::from_key(&key)));
        }
        args.push(Expr::method_ref(name));
        Ok(Expr::new_object(TypeRef::named(self.target), args))
    }
}

#[cfg(test)]
mod tests {
    use uigen_core::{DynamicObject, TypeInfo};

    use super::*;
    use crate::values::testing::emit;

    fn border() -> Value {
        let ty = TypeInfo::class("App.Controls.Border")
            .read_write(["Padding"])
            .build();
        DynamicObject::new(ty)
            .with("Padding", known::thickness_value(4.0, 4.0, 4.0, 4.0))
            .into_value()
    }

    #[test]
    fn test_data_template_builds_factory() {
        let template = known::object(known::DATA_TEMPLATE)
            .with("DataType", "App.ViewModels.ItemViewModel")
            .with("VisualTree", border())
            .into_value();
        let out = emit(&template, "item");

        assert_eq!(
            out.expr,
            Expr::new_object(
                TypeRef::named("DataTemplate"),
                [
                    Expr::type_of(TypeRef::named("ItemViewModel")),
                    Expr::method_ref("item_Factory")
                ]
            )
        );
        assert!(out.method.is_empty());

        let factory = out.class.method("item_Factory").unwrap();
        assert!(factory.is_static);
        assert_eq!(factory.params[0].name, "parent");
        let body = factory.statements();
        assert_eq!(body[0].declared_name(), Some("item_Root"));
        assert_eq!(
            body.last(),
            Some(&Statement::return_(Expr::var("item_Root")))
        );
    }

    #[test]
    fn test_items_panel_has_no_type_argument() {
        let template = known::object(known::ITEMS_PANEL_TEMPLATE)
            .with("VisualTree", border())
            .into_value();
        let out = emit(&template, "panel");

        assert_eq!(
            out.expr,
            Expr::new_object(
                TypeRef::named("ControlTemplate"),
                [Expr::method_ref("panel_Factory")]
            )
        );
    }

    #[test]
    fn test_empty_template_returns_null() {
        let template = known::object(known::CONTROL_TEMPLATE)
            .with("TargetType", "Button")
            .into_value();
        let out = emit(&template, "button");

        let factory = out.class.method("button_Factory").unwrap();
        assert_eq!(factory.statements(), [Statement::return_(Expr::null())]);
    }

    #[test]
    fn test_factory_names_do_not_collide() {
        let template = known::object(known::ITEMS_PANEL_TEMPLATE).into_value();
        let mut generator = ValueGenerator::new();
        let mut class = crate::builder::ClassSpec::new("Dictionary1");
        let mut method = MethodSpec::new("InitializeResources");

        let first = generator
            .process(&mut class, &mut method, &template, "panel", None)
            .unwrap();
        let second = generator
            .process(&mut class, &mut method, &template, "panel", None)
            .unwrap();

        assert_eq!(
            first,
            Expr::new_object(
                TypeRef::named("ControlTemplate"),
                [Expr::method_ref("panel_Factory")]
            )
        );
        assert_eq!(
            second,
            Expr::new_object(
                TypeRef::named("ControlTemplate"),
                [Expr::method_ref("panel_Factory2")]
            )
        );
        assert_eq!(class.methods().len(), 2);
    }
}
