//! Table-driven emitters: declare `new Target()` and assign mapped members.

use uigen_core::{TypeKey, Value, known};

use super::{Field, Props, emit_fields};
use crate::{
    builder::{Expr, TypeRef},
    emit::{EmitContext, Result, ValueEmitter, ValueGenerator, declare_local},
};

/// Declares a local of the target type and assigns each non-null field.
///
/// Field values are emitted before the declaration, like reflective
/// emission, so nested locals come first.
#[derive(Debug, Clone, Copy)]
pub struct InitializerEmitter {
    source: &'static str,
    target: &'static str,
    fields: &'static [Field],
}

impl InitializerEmitter {
    pub const IMAGE_BRUSH: Self = Self {
        source: known::IMAGE_BRUSH,
        target: "ImageBrush",
        fields: &[
            Field::value("ImageSource"),
            Field::value("Stretch"),
            Field::single("Opacity"),
        ],
    };

    pub const BITMAP_IMAGE: Self = Self {
        source: known::BITMAP_IMAGE,
        target: "BitmapImage",
        fields: &[Field::renamed("UriSource", "TextureAsset")],
    };

    pub const SOUND_SOURCE: Self = Self {
        source: known::SOUND_SOURCE,
        target: "SoundSource",
        fields: &[Field::value("SoundAsset"), Field::single("Volume")],
    };

    pub const RECTANGLE_GEOMETRY: Self = Self {
        source: known::RECTANGLE_GEOMETRY,
        target: "RectangleGeometry",
        fields: &[
            Field::value("Rect"),
            Field::single("RadiusX"),
            Field::single("RadiusY"),
        ],
    };

    pub const ELLIPSE_GEOMETRY: Self = Self {
        source: known::ELLIPSE_GEOMETRY,
        target: "EllipseGeometry",
        fields: &[
            Field::value("Center"),
            Field::single("RadiusX"),
            Field::single("RadiusY"),
        ],
    };

    pub const LINE_GEOMETRY: Self = Self {
        source: known::LINE_GEOMETRY,
        target: "LineGeometry",
        fields: &[Field::value("StartPoint"), Field::value("EndPoint")],
    };

    pub const DIRECTIONAL_BLUR_EFFECT: Self = Self {
        source: known::DIRECTIONAL_BLUR_EFFECT,
        target: "DirectionalBlurEffect",
        fields: &[Field::single("Angle"), Field::single("BlurAmount")],
    };

    pub const CUSTOM_EFFECT: Self = Self {
        source: known::CUSTOM_EFFECT,
        target: "CustomEffect",
        fields: &[Field::value("EffectAsset")],
    };

    pub const ALL: [Self; 8] = [
        Self::IMAGE_BRUSH,
        Self::BITMAP_IMAGE,
        Self::SOUND_SOURCE,
        Self::RECTANGLE_GEOMETRY,
        Self::ELLIPSE_GEOMETRY,
        Self::LINE_GEOMETRY,
        Self::DIRECTIONAL_BLUR_EFFECT,
        Self::CUSTOM_EFFECT,
    ];

    /// The mapped fields, in assignment order.
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }
}

impl ValueEmitter for InitializerEmitter {
    fn value_type(&self) -> TypeKey {
        TypeKey::new(self.source)
    }

    fn emit(
        &self,
        generator: &mut ValueGenerator,
        ctx: &mut EmitContext<'_>,
        value: &Value,
        base_name: &str,
    ) -> Result<Expr> {
        let props = Props::of(value)?;
        let assignments = emit_fields(generator, ctx, &props, base_name, self.fields)?;
        Ok(declare_local(
            ctx,
            base_name,
            TypeRef::named(self.target),
            assignments,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{Statement, TypeRef},
        values::testing::emit,
    };

    #[test]
    fn test_image_brush_emits_nested_image_first() {
        let image = known::object(known::BITMAP_IMAGE)
            .with("UriSource", "Images/logo")
            .into_value();
        let brush = known::object(known::IMAGE_BRUSH)
            .with("ImageSource", image)
            .with("Stretch", known::stretch_value("Uniform").unwrap())
            .with("Opacity", 0.75)
            .into_value();
        let out = emit(&brush, "logo");

        let body = out.method.statements();
        assert_eq!(body[0].declared_name(), Some("logo_ImageSource"));
        assert_eq!(
            body[1],
            Statement::assign(
                Expr::var("logo_ImageSource").field("TextureAsset"),
                Expr::string("Images/logo")
            )
        );
        assert_eq!(body[2].declared_name(), Some("logo"));
        assert_eq!(
            body[4],
            Statement::assign(
                Expr::var("logo").field("Stretch"),
                Expr::type_member(TypeRef::named("Stretch"), "Uniform")
            )
        );
        assert_eq!(body.len(), 6);
    }

    #[test]
    fn test_null_fields_are_not_assigned() {
        let sound = known::object(known::SOUND_SOURCE)
            .with("SoundAsset", "click")
            .into_value();
        let out = emit(&sound, "click");

        let members: Vec<_> = out
            .method
            .statements()
            .iter()
            .filter_map(Statement::assigned_member)
            .collect();
        assert_eq!(members, ["SoundAsset"]);
    }

    #[test]
    fn test_geometry_delegates_rect() {
        let geometry = known::object(known::RECTANGLE_GEOMETRY)
            .with("Rect", known::rect_value(0.0, 0.0, 10.0, 5.0))
            .with("RadiusX", 2.0)
            .with("RadiusY", 2.0)
            .into_value();
        let out = emit(&geometry, "clip");

        let body = out.method.statements();
        assert_eq!(body.len(), 4);
        match &body[1] {
            Statement::Assign { value, .. } => {
                assert_eq!(value.constructed_type(), Some(&TypeRef::named("Rect")));
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }
}
