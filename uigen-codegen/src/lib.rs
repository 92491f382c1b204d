//! Value emission engine for the uigen UI resource code generator.
//!
//! Given a runtime value met while walking a resource dictionary, the engine
//! appends target-language statements to a method under construction and
//! returns an expression that rebuilds the value when the generated code
//! runs.
//!
//! # Module Organization
//!
//! - [`builder`] - Target expression model (Expr, Statement, MethodSpec, ClassSpec, CodeBuilder)
//! - [`emit`] - Dispatch driver, registry, reflective fallback, options and report
//! - [`values`] - Built-in emitters for well-known value shapes
//! - [`language`] - Language-specific abstractions (NamingConvention)

pub mod builder;
pub mod emit;
pub mod language;
pub mod values;

pub use emit::{
    EmitContext, EmitError, GeneratorOptions, ResourceDictionary, ValueEmitter, ValueGenerator,
};
