use uigen_core::{TypeKey, Value, known};

use super::{Field, FieldKind, Props, emit_fields};
use crate::{
    builder::{Expr, Statement, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator, declare_local},
};

/// Animations: `From`/`To` in the animated value's encoding, a duration in
/// seconds, and storyboard targeting.
#[derive(Debug, Clone, Copy)]
pub struct AnimationEmitter {
    source: &'static str,
    target: &'static str,
    value_kind: FieldKind,
}

impl AnimationEmitter {
    pub const DOUBLE: Self = Self {
        source: known::DOUBLE_ANIMATION,
        target: "FloatAnimation",
        value_kind: FieldKind::Single,
    };

    pub const SOLID_COLOR_BRUSH: Self = Self {
        source: known::SOLID_COLOR_BRUSH_ANIMATION,
        target: "SolidColorBrushAnimation",
        value_kind: FieldKind::Value,
    };

    pub const THICKNESS: Self = Self {
        source: known::THICKNESS_ANIMATION,
        target: "ThicknessAnimation",
        value_kind: FieldKind::Value,
    };

    pub const ALL: [Self; 3] = [Self::DOUBLE, Self::SOLID_COLOR_BRUSH, Self::THICKNESS];

    fn endpoints(&self) -> [Field; 2] {
        [
            Field {
                source: "From",
                target: "From",
                kind: self.value_kind,
            },
            Field {
                source: "To",
                target: "To",
                kind: self.value_kind,
            },
        ]
    }
}

impl ValueEmitter for AnimationEmitter {
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
        let mut assignments = emit_fields(generator, ctx, &props, base_name, &self.endpoints())?;

        if let Some(seconds) = props.opt_f32("Duration")? {
            let span = Expr::static_call(
                TypeRef::named("TimeSpan"),
                "FromSeconds",
                [Expr::double(f64::from(seconds))],
            );
            assignments.push((
                "Duration".to_string(),
                Expr::new_object(TypeRef::named("Duration"), [span]),
            ));
        }
        let target_name = props.opt_string("TargetName")?;
        let target_property = props.opt_string("TargetProperty")?;

        let animation = declare_local(
            ctx,
            base_name,
            TypeRef::named(self.target),
            assignments,
        );
        let storyboard = TypeRef::named("Storyboard");
        if let Some(name) = target_name {
            ctx.push(Statement::expr(Expr::static_call(
                storyboard.clone(),
                "SetTargetName",
                [animation.clone(), Expr::string(name)],
            )));
        }
        if let Some(property) = target_property {
            ctx.push(Statement::expr(Expr::static_call(
                storyboard,
                "SetTargetProperty",
                [animation.clone(), Expr::string(property)],
            )));
        }
        Ok(animation)
    }
}
