//! Value emission: turning runtime values into construction code.
//!
//! A [`ValueGenerator`] owns an [`EmitterRegistry`] and dispatches each value
//! to the emitter registered for its exact runtime type. Values without an
//! emitter are handled by the generator itself (null, enum members,
//! view-model locators) or by a [`ReflectiveEmitter`] synthesized on first
//! use and registered for every later value of the same type.

mod context;
mod error;
mod generator;
mod options;
mod reflective;
mod registry;
mod report;
mod resources;

pub use context::EmitContext;
pub use error::{EmitError, Result};
pub use generator::{Strategy, ValueGenerator};
pub use options::{ConfigError, GeneratorOptions, PropertyOrder};
pub use reflective::ReflectiveEmitter;
pub use registry::EmitterRegistry;
pub use report::{EmissionReport, SkippedProperty};
pub use resources::ResourceDictionary;
use uigen_core::{TypeKey, Value};

use crate::builder::{Expr, Statement, TypeRef};

/// Emits construction code for values of one runtime type.
///
/// `emit` may append statements to the current method and methods to the
/// class, and returns an expression that evaluates to the value. Nested
/// values go back through the generator so they are dispatched like any
/// other value.
pub trait ValueEmitter: Send + Sync {
    /// The exact runtime type this emitter handles.
    fn value_type(&self) -> TypeKey;

    /// Emit code that reconstructs `value`, using `base_name` for any local
    /// the emitter declares.
    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr>;
}

/// Declare `name` as a new instance of `ty`, then assign each member.
///
/// Returns a reference to the declared local.
pub(crate) fn declare_local(
    ctx: &mut EmitContext<'_>,
    name: &str,
    ty: TypeRef,
    assignments: impl IntoIterator<Item = (String, Expr)>,
) -> Expr {
    ctx.push(Statement::declare(
        name,
        ty.clone(),
        Expr::new_object(ty, []),
    ));
    let local = Expr::var(name);
    for (member, value) in assignments {
        ctx.push(Statement::assign(local.clone().field(member), value));
    }
    local
}
