use uigen_core::{TypeKey, Value, known};

use super::Props;
use crate::{
    builder::{Expr, Statement, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator},
};

/// Emit `Opacity` only when it differs from the runtime default.
fn opacity(props: &Props<'_>) -> Result<Option<Expr>> {
    Ok(props
        .opt_f32("Opacity")?
        .filter(|o| (*o - 1.0).abs() > f32::EPSILON)
        .map(Expr::single))
}

#[derive(Debug, Clone, Copy)]
pub struct SolidColorBrushEmitter;

impl ValueEmitter for SolidColorBrushEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(known::SOLID_COLOR_BRUSH)
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let props = Props::of(value)?;
        let color = props.get("Color")?;
        let local = generator.nested_name(base_name, "Color");
        let color = generator.emit(ctx, &color, &local)?;

        let ty = TypeRef::named("SolidColorBrush");
        ctx.push(Statement::declare(
            base_name,
            ty.clone(),
            Expr::new_object(ty, []),
        ));
        let brush = Expr::var(base_name);
        ctx.push(Statement::assign(brush.clone().field("Color"), color));
        if let Some(opacity) = opacity(&props)? {
            ctx.push(Statement::assign(brush.clone().field("Opacity"), opacity));
        }
        Ok(brush)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LinearGradientBrushEmitter;

impl ValueEmitter for LinearGradientBrushEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(known::LINEAR_GRADIENT_BRUSH)
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let props = Props::of(value)?;

        let mut points = Vec::with_capacity(2);
        for member in ["StartPoint", "EndPoint"] {
            let point = props.get(member)?;
            if !point.is_null() {
                let local = generator.nested_name(base_name, member);
                points.push((member, generator.emit(ctx, &point, &local)?));
            }
        }

        let mut stops = Vec::new();
        for (index, stop) in props.list("GradientStops")?.iter().enumerate() {
            let stop_props = Props::of(stop)?;
            let color = stop_props.get("Color")?;
            let local = generator.nested_name(base_name, &format!("Stop{index}"));
            let color = generator.emit(ctx, &color, &local)?;
            let offset = stop_props.f32("Offset")?;
            stops.push(Expr::new_object(
                TypeRef::named("GradientStop"),
                [color, Expr::single(offset)],
            ));
        }

        let ty = TypeRef::named("LinearGradientBrush");
        ctx.push(Statement::declare(
            base_name,
            ty.clone(),
            Expr::new_object(ty, []),
        ));
        let brush = Expr::var(base_name);
        for (member, point) in points {
            ctx.push(Statement::assign(brush.clone().field(member), point));
        }
        for stop in stops {
            ctx.push(Statement::expr(
                brush.clone().field("GradientStops").call("Add", [stop]),
            ));
        }
        if let Some(opacity) = opacity(&props)? {
            ctx.push(Statement::assign(brush.clone().field("Opacity"), opacity));
        }
        Ok(brush)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::testing::emit;

    #[test]
    fn test_solid_brush_assigns_color() {
        let brush = known::solid_color_brush_value(known::color_value(255, 0, 128, 255));
        let out = emit(&brush, "accent");

        assert_eq!(out.expr, Expr::var("accent"));
        let body = out.method.statements();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].declared_name(), Some("accent"));
        assert_eq!(body[1].assigned_member(), Some("Color"));
    }

    #[test]
    fn test_solid_brush_opacity_only_when_not_one() {
        let brush = known::object(known::SOLID_COLOR_BRUSH)
            .with("Color", known::color_value(255, 0, 0, 0))
            .with("Opacity", 0.5)
            .into_value();
        let out = emit(&brush, "shade");

        let body = out.method.statements();
        assert_eq!(body.len(), 3);
        assert_eq!(
            body[2],
            Statement::assign(Expr::var("shade").field("Opacity"), Expr::single(0.5))
        );
    }

    #[test]
    fn test_gradient_adds_one_stop_per_entry() {
        let brush = known::linear_gradient_brush_value(
            known::point_value(0.0, 0.0),
            known::point_value(1.0, 1.0),
            vec![
                known::gradient_stop_value(known::color_value(255, 255, 0, 0), 0.0),
                known::gradient_stop_value(known::color_value(255, 0, 0, 255), 1.0),
            ],
        );
        let out = emit(&brush, "fade");

        let body = out.method.statements();
        assert_eq!(body[0].declared_name(), Some("fade"));
        assert_eq!(body[1].assigned_member(), Some("StartPoint"));
        assert_eq!(body[2].assigned_member(), Some("EndPoint"));
        let adds = body
            .iter()
            .filter(|s| {
                matches!(s, Statement::Expr(Expr::Call { method, .. }) if method == "Add")
            })
            .count();
        assert_eq!(adds, 2);
        assert_eq!(body.len(), 5);
    }
}
