use uigen_core::{TypeKey, Value, known};

use super::Props;
use crate::{
    builder::{Expr, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator},
};

/// `new FontFamily("source")`.
#[derive(Debug, Clone, Copy)]
pub struct FontFamilyEmitter;

impl ValueEmitter for FontFamilyEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(known::FONT_FAMILY)
    }

    fn emit(
        &self,
        _generator: &mut ValueGenerator,
        _ctx: &mut EmitContext<'_>,
        value: &Value,
        _base_name: &str,
    ) -> Result<Expr> {
        let source = Props::of(value)?.string("Source")?;
        Ok(Expr::new_object(
            TypeRef::named("FontFamily"),
            [Expr::string(source)],
        ))
    }
}

/// A named `FontWeights` member, or a weight built from its numeric value.
#[derive(Debug, Clone, Copy)]
pub struct FontWeightEmitter;

impl ValueEmitter for FontWeightEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(known::FONT_WEIGHT)
    }

    fn emit(
        &self,
        _generator: &mut ValueGenerator,
        _ctx: &mut EmitContext<'_>,
        value: &Value,
        _base_name: &str,
    ) -> Result<Expr> {
        let weight = Props::of(value)?.i32("Weight")?;
        let expr = match known::FONT_WEIGHTS.iter().find(|(_, w)| *w == weight) {
            Some((name, _)) => Expr::type_member(TypeRef::named("FontWeights"), *name),
            None => Expr::static_call(
                TypeRef::named("FontWeight"),
                "FromOpenTypeWeight",
                [Expr::int(weight)],
            ),
        };
        Ok(expr)
    }
}
