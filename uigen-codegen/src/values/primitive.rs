use uigen_core::{PrimitiveKind, TypeKey, Value};

use crate::{
    builder::{Expr, Literal},
    emit::{EmitContext, EmitError, Result, ValueEmitter, ValueGenerator},
};

/// Emits a primitive as a literal, without statements.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveEmitter {
    kind: PrimitiveKind,
}

impl PrimitiveEmitter {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }
}

impl ValueEmitter for PrimitiveEmitter {
    fn value_type(&self) -> TypeKey {
        self.kind.type_key()
    }

    fn emit(
        &self,
        _generator: &mut ValueGenerator,
        _ctx: &mut EmitContext<'_>,
        value: &Value,
        _base_name: &str,
    ) -> Result<Expr> {
        if value.primitive_kind() != Some(self.kind) {
            return Err(EmitError::unsupported(
                value,
                format!("expected a {} value", self.kind.full_name()),
            ));
        }
        Literal::from_value(value)
            .map(Expr::literal)
            .ok_or_else(|| EmitError::unsupported(value, "not a literal"))
    }
}
