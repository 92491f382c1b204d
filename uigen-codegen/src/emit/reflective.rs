//! Emitters synthesized from type descriptors.

use std::sync::Arc;

use uigen_core::{SkipReason, TypeInfo, TypeKey, Value};

use super::{
    EmitContext, ValueEmitter, ValueGenerator, declare_local,
    error::{EmitError, Result},
    options::PropertyOrder,
};
use crate::builder::{Expr, TypeRef};

/// Mirrors every readable, writable, argument-free property of a type.
///
/// The property split is fixed when the emitter is built. Emitting a value
/// reads each mirrored property, emits it through the generator, then
/// declares `new T()` and assigns the emitted values, so nested locals are
/// declared before the object that holds them.
#[derive(Debug, Clone)]
pub struct ReflectiveEmitter {
    ty: Arc<TypeInfo>,
    mirrored: Vec<String>,
    skipped: Vec<(String, SkipReason)>,
}

impl ReflectiveEmitter {
    /// Classify the properties of `ty`.
    pub fn new(ty: Arc<TypeInfo>, order: PropertyOrder) -> Self {
        let mut mirrored = Vec::new();
        let mut skipped = Vec::new();
        for property in ty.properties() {
            match property.mirror_status() {
                Ok(()) => mirrored.push(property.name.clone()),
                Err(reason) => skipped.push((property.name.clone(), reason)),
            }
        }
        if order == PropertyOrder::Name {
            mirrored.sort();
            skipped.sort_by(|a, b| a.0.cmp(&b.0));
        }
        Self {
            ty,
            mirrored,
            skipped,
        }
    }

    /// The type this emitter was built for.
    pub fn type_info(&self) -> &Arc<TypeInfo> {
        &self.ty
    }

    /// Mirrored properties, in emission order.
    pub fn mirrored(&self) -> &[String] {
        &self.mirrored
    }

    /// Properties left out, with the reason.
    pub fn skipped(&self) -> &[(String, SkipReason)] {
        &self.skipped
    }
}

impl ValueEmitter for ReflectiveEmitter {
    fn value_type(&self) -> TypeKey {
        self.ty.key().clone()
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let obj = value
            .as_object()
            .ok_or_else(|| EmitError::unsupported(value, "expected an object"))?;

        let mut assignments = Vec::with_capacity(self.mirrored.len());
        for property in &self.mirrored {
            let current = obj
                .get(property)
                .map_err(|source| EmitError::property_access(obj.as_ref(), property, source))?;
            let local = generator.nested_name(base_name, property);
            let expr = generator.emit(ctx, &current, &local)?;
            assignments.push((property.clone(), expr));
        }

        Ok(declare_local(
            ctx,
            base_name,
            TypeRef::from_key(self.ty.key()),
            assignments,
        ))
    }
}
