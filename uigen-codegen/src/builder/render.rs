//! Language-specific rendering of the target model.

use super::{ClassSpec, CodeBuilder, Expr, Literal, MethodSpec, Statement};

/// Trait for language-specific rendering of expressions, statements,
/// methods and classes.
///
/// Implement this trait to support a new target language.
pub trait Renderer {
    /// Render a literal.
    fn render_literal(&self, lit: &Literal) -> String;

    /// Render an expression.
    fn render_expr(&self, expr: &Expr) -> String;

    /// Render a statement as a single line (without indentation).
    fn render_statement(&self, stmt: &Statement) -> String;

    /// Render a method into the builder.
    fn render_method(&self, method: &MethodSpec, builder: CodeBuilder) -> CodeBuilder;

    /// Render a complete class declaration, including usings and namespace.
    fn render_class(&self, class: &ClassSpec) -> String;
}

/// Extension trait for convenient rendering.
pub trait RenderExt {
    /// Render using the given renderer.
    fn render(&self, renderer: &dyn Renderer) -> String;
}

impl RenderExt for Expr {
    fn render(&self, renderer: &dyn Renderer) -> String {
        renderer.render_expr(self)
    }
}

impl RenderExt for Statement {
    fn render(&self, renderer: &dyn Renderer) -> String {
        renderer.render_statement(self)
    }
}

impl RenderExt for MethodSpec {
    fn render(&self, renderer: &dyn Renderer) -> String {
        renderer.render_method(self, CodeBuilder::default()).build()
    }
}

impl RenderExt for ClassSpec {
    fn render(&self, renderer: &dyn Renderer) -> String {
        renderer.render_class(self)
    }
}
