//! C# renderer for the target expression model.
//!
//! This module implements the [`Renderer`] trait for C#, translating
//! [`Expr`], [`Statement`], [`MethodSpec`] and [`ClassSpec`] into source
//! text.

use uigen_codegen::builder::{
    ClassSpec, CodeBuilder, Expr, Literal, MethodSpec, Renderer, Statement, TypeMapper, TypeRef,
    Visibility,
};

use crate::{naming::CSHARP_NAMING, type_mapper::CSharpTypeMapper};

/// C# language renderer.
///
/// # Examples
///
/// ```
/// use uigen_codegen::builder::{Expr, RenderExt, TypeRef};
/// use uigen_codegen_csharp::CSharpRenderer;
///
/// let color = Expr::new_object(
///     TypeRef::named("ColorW"),
///     [Expr::int(255), Expr::int(0), Expr::int(0), Expr::int(255)],
/// );
/// assert_eq!(color.render(&CSharpRenderer), "new ColorW(255, 0, 0, 255)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl CSharpRenderer {
    /// Create a new C# renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_type(&self, ty: &TypeRef) -> String {
        CSharpTypeMapper.render_type(ty)
    }

    fn render_args(&self, args: &[Expr]) -> String {
        args.iter()
            .map(|a| self.render_expr(a))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn method_header(&self, method: &MethodSpec) -> String {
        let params = method
            .params
            .iter()
            .map(|p| format!("{} {}", self.render_type(&p.ty), CSHARP_NAMING.safe_name(&p.name)))
            .collect::<Vec<_>>()
            .join(", ");
        let modifier = if method.is_static { "static " } else { "" };
        format!(
            "{} {}{} {}({})",
            visibility(method.visibility),
            modifier,
            self.render_type(&method.return_type),
            method.name,
            params
        )
    }

    fn render_class_body(&self, class: &ClassSpec, builder: CodeBuilder) -> CodeBuilder {
        let partial = if class.is_partial { "partial " } else { "" };
        let base = class
            .base
            .as_ref()
            .map(|b| format!(" : {}", b))
            .unwrap_or_default();
        let header = format!(
            "{} {}class {}{}",
            visibility(class.visibility),
            partial,
            class.name,
            base
        );

        builder.braced(&header, |mut b| {
            for (i, method) in class.methods().iter().enumerate() {
                if i > 0 {
                    b = b.blank();
                }
                b = self.render_method(method, b);
            }
            b
        })
    }
}

fn visibility(v: Visibility) -> &'static str {
    match v {
        Visibility::Public => "public",
        Visibility::Private => "private",
        Visibility::Protected => "protected",
        Visibility::Internal => "internal",
    }
}

fn escape(c: char, quote: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\0' => "\\0".to_string(),
        c if c == quote => format!("\\{}", c),
        // U+2028 and U+2029 end a line in C# source.
        c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
            format!("\\u{:04X}", c as u32)
        }
        c => c.to_string(),
    }
}

/// Ensure a float rendering reads as a real literal.
fn real(s: String) -> String {
    if s.contains('.') { s } else { format!("{}.0", s) }
}

impl Renderer for CSharpRenderer {
    fn render_literal(&self, lit: &Literal) -> String {
        match lit {
            Literal::Null => "null".to_string(),
            Literal::Bool(v) => v.to_string(),
            Literal::Byte(v) => format!("(byte){}", v),
            Literal::SByte(v) => format!("(sbyte){}", v),
            Literal::Int16(v) => format!("(short){}", v),
            Literal::UInt16(v) => format!("(ushort){}", v),
            Literal::Int32(v) => v.to_string(),
            Literal::UInt32(v) => format!("{}U", v),
            Literal::Int64(v) => format!("{}L", v),
            Literal::UInt64(v) => format!("{}UL", v),
            Literal::Char(v) => format!("'{}'", escape(*v, '\'')),
            Literal::Single(v) if v.is_nan() => "float.NaN".to_string(),
            Literal::Single(v) if v.is_infinite() => {
                if v.is_sign_positive() {
                    "float.PositiveInfinity".to_string()
                } else {
                    "float.NegativeInfinity".to_string()
                }
            }
            Literal::Single(v) => format!("{}F", v),
            Literal::Double(v) if v.is_nan() => "double.NaN".to_string(),
            Literal::Double(v) if v.is_infinite() => {
                if v.is_sign_positive() {
                    "double.PositiveInfinity".to_string()
                } else {
                    "double.NegativeInfinity".to_string()
                }
            }
            Literal::Double(v) => real(v.to_string()),
            Literal::String(v) => {
                let escaped: String = v.chars().map(|c| escape(c, '"')).collect();
                format!("\"{}\"", escaped)
            }
        }
    }

    fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(lit) => self.render_literal(lit),
            Expr::Variable(name) => CSHARP_NAMING.safe_name(name),
            Expr::This => "this".to_string(),
            Expr::Type(ty) => self.render_type(ty),
            Expr::Field { target, name } => {
                format!("{}.{}", self.render_expr(target), name)
            }
            Expr::New { ty, args } => {
                format!("new {}({})", self.render_type(ty), self.render_args(args))
            }
            Expr::Call {
                target,
                method,
                args,
            } => match target {
                Some(target) => format!(
                    "{}.{}({})",
                    self.render_expr(target),
                    method,
                    self.render_args(args)
                ),
                None => format!("{}({})", method, self.render_args(args)),
            },
            Expr::TypeOf(ty) => format!("typeof({})", self.render_type(ty)),
            Expr::MethodRef(name) => name.clone(),
        }
    }

    fn render_statement(&self, stmt: &Statement) -> String {
        match stmt {
            Statement::Declare { name, ty, init } => {
                let name = CSHARP_NAMING.safe_name(name);
                match init {
                    Some(init) => format!(
                        "{} {} = {};",
                        self.render_type(ty),
                        name,
                        self.render_expr(init)
                    ),
                    None => format!("{} {};", self.render_type(ty), name),
                }
            }
            Statement::Assign { target, value } => format!(
                "{} = {};",
                self.render_expr(target),
                self.render_expr(value)
            ),
            Statement::Expr(expr) => format!("{};", self.render_expr(expr)),
            Statement::Return(Some(value)) => format!("return {};", self.render_expr(value)),
            Statement::Return(None) => "return;".to_string(),
        }
    }

    fn render_method(&self, method: &MethodSpec, builder: CodeBuilder) -> CodeBuilder {
        let builder = match &method.doc {
            Some(doc) => builder.xml_doc(doc),
            None => builder,
        };
        builder.braced(&self.method_header(method), |b| {
            b.each(method.statements(), |b, stmt| {
                b.line(&self.render_statement(stmt))
            })
        })
    }

    fn render_class(&self, class: &ClassSpec) -> String {
        let builder = CodeBuilder::csharp()
            .each(&class.usings, |b, ns| b.line(&format!("using {};", ns)))
            .when(!class.usings.is_empty(), |b| b.blank());

        match &class.namespace {
            Some(ns) => builder
                .braced(&format!("namespace {}", ns), |b| {
                    self.render_class_body(class, b)
                })
                .build(),
            None => self.render_class_body(class, builder).build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use uigen_codegen::builder::{ParamSpec, RenderExt};
    use uigen_core::PrimitiveKind;

    use super::*;

    fn lit(l: Literal) -> String {
        CSharpRenderer.render_literal(&l)
    }

    #[test]
    fn test_integral_literals() {
        assert_eq!(lit(Literal::Int32(-7)), "-7");
        assert_eq!(lit(Literal::Byte(200)), "(byte)200");
        assert_eq!(lit(Literal::SByte(-5)), "(sbyte)-5");
        assert_eq!(lit(Literal::Int16(12)), "(short)12");
        assert_eq!(lit(Literal::UInt16(12)), "(ushort)12");
        assert_eq!(lit(Literal::UInt32(3)), "3U");
        assert_eq!(lit(Literal::Int64(3)), "3L");
        assert_eq!(lit(Literal::UInt64(3)), "3UL");
    }

    #[test]
    fn test_real_literals() {
        assert_eq!(lit(Literal::Single(1.5)), "1.5F");
        assert_eq!(lit(Literal::Single(4.0)), "4F");
        assert_eq!(lit(Literal::Double(0.25)), "0.25");
        assert_eq!(lit(Literal::Double(120.0)), "120.0");
        assert_eq!(lit(Literal::Double(f64::NAN)), "double.NaN");
        assert_eq!(
            lit(Literal::Single(f32::NEG_INFINITY)),
            "float.NegativeInfinity"
        );
    }

    #[test]
    fn test_text_literals() {
        assert_eq!(lit(Literal::Char('a')), "'a'");
        assert_eq!(lit(Literal::Char('\'')), r"'\''");
        assert_eq!(
            lit(Literal::String("say \"hi\"\n\\".into())),
            r#""say \"hi\"\n\\""#
        );
        assert_eq!(lit(Literal::String("\u{1}".into())), r#""\u0001""#);
        assert_eq!(lit(Literal::Char('\u{2029}')), r"'\u2029'");
        assert_eq!(lit(Literal::Null), "null");
        assert_eq!(lit(Literal::Bool(false)), "false");
    }

    #[test]
    fn test_expressions() {
        let r = CSharpRenderer;

        let stop = Expr::new_object(
            TypeRef::named("GradientStop"),
            [Expr::var("color"), Expr::single(0.5)],
        );
        assert_eq!(
            Expr::var("brush")
                .field("GradientStops")
                .call("Add", [stop])
                .render(&r),
            "brush.GradientStops.Add(new GradientStop(color, 0.5F))"
        );
        assert_eq!(
            Expr::type_member(TypeRef::named("Stretch"), "Fill").render(&r),
            "Stretch.Fill"
        );
        assert_eq!(
            Expr::static_call(
                TypeRef::named("TimeSpan"),
                "FromSeconds",
                [Expr::double(0.5)]
            )
            .render(&r),
            "TimeSpan.FromSeconds(0.5)"
        );
        assert_eq!(
            Expr::type_of(TypeRef::primitive(PrimitiveKind::Int32)).render(&r),
            "typeof(int)"
        );
        assert_eq!(Expr::var("class").render(&r), "@class");
    }

    #[test]
    fn test_statements() {
        let r = CSharpRenderer;
        let list = TypeRef::generic("List", vec![TypeRef::Object]);

        assert_eq!(
            Statement::declare("items", list.clone(), Expr::new_object(list, [])).render(&r),
            "List<object> items = new List<object>();"
        );
        assert_eq!(
            Statement::assign(Expr::var("b").field("Opacity"), Expr::single(0.5)).render(&r),
            "b.Opacity = 0.5F;"
        );
        assert_eq!(Statement::return_void().render(&r), "return;");
    }

    #[test]
    fn test_method_with_doc_and_params() {
        let mut method = MethodSpec::new("Build")
            .doc("Builds the root.")
            .private()
            .static_()
            .param(ParamSpec::new("parent", TypeRef::named("UIElement")))
            .returns(TypeRef::named("UIElement"));
        method.push(Statement::return_(Expr::null()));

        assert_eq!(
            method.render(&CSharpRenderer),
            "/// <summary>\n\
             /// Builds the root.\n\
             /// </summary>\n\
             private static UIElement Build(UIElement parent)\n\
             {\n    return null;\n}\n"
        );
    }
}
