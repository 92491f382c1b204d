use uigen_core::{LIST_TYPE, TypeKey, Value};

use crate::{
    builder::{Expr, Statement, TypeRef},
    emit::{EmitContext, EmitError, Result, ValueEmitter, ValueGenerator},
};

/// `new List<object>()` followed by one `Add` per item.
#[derive(Debug, Clone, Copy)]
pub struct ListEmitter;

impl ValueEmitter for ListEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(LIST_TYPE)
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let items = value
            .as_list()
            .ok_or_else(|| EmitError::unsupported(value, "expected a list"))?;

        let mut exprs = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let local = generator.nested_name(base_name, &index.to_string());
            exprs.push(generator.emit(ctx, item, &local)?);
        }

        let ty = TypeRef::generic("List", vec![TypeRef::Object]);
        ctx.push(Statement::declare(
            base_name,
            ty.clone(),
            Expr::new_object(ty, []),
        ));
        let list = Expr::var(base_name);
        for expr in exprs {
            ctx.push(Statement::expr(list.clone().call("Add", [expr])));
        }
        Ok(list)
    }
}
