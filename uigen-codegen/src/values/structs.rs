//! Small value types rebuilt with a single constructor call.

use uigen_core::{TypeKey, Value, known};

use super::Props;
use crate::{
    builder::{Expr, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator},
};

/// How a constructor argument is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    Int(&'static str),
    Single(&'static str),
}

/// Emits `new Target(args)` from a fixed list of properties.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorEmitter {
    source: &'static str,
    target: &'static str,
    args: &'static [Arg],
}

impl ConstructorEmitter {
    pub const COLOR: Self = Self {
        source: known::COLOR,
        target: "ColorW",
        args: &[Arg::Int("R"), Arg::Int("G"), Arg::Int("B"), Arg::Int("A")],
    };

    pub const POINT: Self = Self {
        source: known::POINT,
        target: "PointF",
        args: &[Arg::Single("X"), Arg::Single("Y")],
    };

    pub const RECT: Self = Self {
        source: known::RECT,
        target: "Rect",
        args: &[
            Arg::Single("X"),
            Arg::Single("Y"),
            Arg::Single("Width"),
            Arg::Single("Height"),
        ],
    };

    pub const THICKNESS: Self = Self {
        source: known::THICKNESS,
        target: "Thickness",
        args: &[
            Arg::Single("Left"),
            Arg::Single("Top"),
            Arg::Single("Right"),
            Arg::Single("Bottom"),
        ],
    };

    pub const ALL: [Self; 4] = [Self::COLOR, Self::POINT, Self::RECT, Self::THICKNESS];
}

impl ValueEmitter for ConstructorEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(self.source)
    }

    fn emit(
        &self,
        _generator: &mut ValueGenerator,
        _ctx: &mut EmitContext<'_>,
        value: &Value,
        _base_name: &str,
    ) -> Result<Expr> {
        let props = Props::of(value)?;
        let args = self
            .args
            .iter()
            .map(|arg| match *arg {
                Arg::Int(name) => props.i32(name).map(Expr::int),
                Arg::Single(name) => props.f32(name).map(Expr::single),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Expr::new_object(TypeRef::named(self.target), args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{emit::EmitError, values::testing::emit};

    #[test]
    fn test_color_argument_order() {
        let out = emit(&known::color_value(128, 255, 10, 20), "c");
        assert_eq!(
            out.expr,
            Expr::new_object(
                TypeRef::named("ColorW"),
                [Expr::int(255), Expr::int(10), Expr::int(20), Expr::int(128)]
            )
        );
        assert!(out.method.is_empty());
    }

    #[test]
    fn test_single_precision_arguments() {
        let out = emit(&known::thickness_value(1.0, 2.0, 3.0, 4.5), "t");
        assert_eq!(
            out.expr,
            Expr::new_object(
                TypeRef::named("Thickness"),
                [
                    Expr::single(1.0),
                    Expr::single(2.0),
                    Expr::single(3.0),
                    Expr::single(4.5)
                ]
            )
        );

        let out = emit(&known::point_value(0.5, 1.0), "p");
        assert_eq!(
            out.expr.constructed_type(),
            Some(&TypeRef::named("PointF"))
        );
    }

    #[test]
    fn test_missing_component_is_unsupported() {
        let partial = known::object(known::RECT).with("X", 1.0).into_value();
        let err = crate::values::testing::try_emit(&partial, "r").err().unwrap();
        assert!(matches!(err, EmitError::UnsupportedValue { .. }));
        assert_eq!(err.type_name(), known::RECT);
    }
}
