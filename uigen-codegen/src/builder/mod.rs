//! Target expression model.
//!
//! This module provides the pieces emitters build generated code from:
//! - [`Expr`] / [`Literal`] - Immutable expression nodes
//! - [`Statement`] - Instructions appended to a method body
//! - [`MethodSpec`] / [`ClassSpec`] - The method and class under construction
//! - [`TypeRef`] - Language-agnostic type references
//! - [`Renderer`] - Trait for language-specific rendering
//! - [`CodeBuilder`] - Indented text output for renderers

mod class;
mod code_builder;
mod expr;
mod function;
mod render;
mod types;

pub use class::ClassSpec;
pub use code_builder::CodeBuilder;
pub use expr::{Expr, Literal};
pub use function::{MethodSpec, ParamSpec, Statement};
pub use render::{RenderExt, Renderer};
pub use types::{TypeMapper, TypeRef, Visibility};
