//! Catalog of well-known value shapes.
//!
//! Resource dictionaries mostly hold values of a small set of framework
//! types. This module names them and describes their properties so that
//! built-in emitters can recognize them by key and read them by property
//! name. The `*_value` helpers build runtime values of these types.

use std::sync::Arc;

use crate::{
    type_info::{PropertyInfo, TypeInfo},
    value::{DynamicObject, EnumValue, Value},
};

pub const COLOR: &str = "System.Windows.Media.Color";
pub const POINT: &str = "System.Windows.Point";
pub const RECT: &str = "System.Windows.Rect";
pub const THICKNESS: &str = "System.Windows.Thickness";
pub const SOLID_COLOR_BRUSH: &str = "System.Windows.Media.SolidColorBrush";
pub const LINEAR_GRADIENT_BRUSH: &str = "System.Windows.Media.LinearGradientBrush";
pub const GRADIENT_STOP: &str = "System.Windows.Media.GradientStop";
pub const IMAGE_BRUSH: &str = "System.Windows.Media.ImageBrush";
pub const STRETCH: &str = "System.Windows.Media.Stretch";
pub const BITMAP_IMAGE: &str = "System.Windows.Media.Imaging.BitmapImage";
pub const RESOURCE_REFERENCE: &str = "System.Windows.ResourceReferenceExpression";
pub const DATA_TEMPLATE: &str = "System.Windows.DataTemplate";
pub const CONTROL_TEMPLATE: &str = "System.Windows.Controls.ControlTemplate";
pub const ITEMS_PANEL_TEMPLATE: &str = "System.Windows.Controls.ItemsPanelTemplate";
pub const STYLE: &str = "System.Windows.Style";
pub const SETTER: &str = "System.Windows.Setter";
pub const SOUND_SOURCE: &str = "UserInterface.Media.SoundSource";
pub const DOUBLE_ANIMATION: &str = "System.Windows.Media.Animation.DoubleAnimation";
pub const SOLID_COLOR_BRUSH_ANIMATION: &str =
    "UserInterface.Media.Animation.SolidColorBrushAnimation";
pub const THICKNESS_ANIMATION: &str = "System.Windows.Media.Animation.ThicknessAnimation";
pub const RECTANGLE_GEOMETRY: &str = "System.Windows.Media.RectangleGeometry";
pub const ELLIPSE_GEOMETRY: &str = "System.Windows.Media.EllipseGeometry";
pub const LINE_GEOMETRY: &str = "System.Windows.Media.LineGeometry";
pub const FONT_FAMILY: &str = "System.Windows.Media.FontFamily";
pub const FONT_WEIGHT: &str = "System.Windows.FontWeight";
pub const DIRECTIONAL_BLUR_EFFECT: &str = "UserInterface.Media.Effects.DirectionalBlurEffect";
pub const CUSTOM_EFFECT: &str = "UserInterface.Media.Effects.CustomEffect";

/// Members of the `Stretch` enum.
pub const STRETCH_MEMBERS: [&str; 4] = ["None", "Fill", "Uniform", "UniformToFill"];

/// Named font weights and their OpenType weight values.
pub const FONT_WEIGHTS: [(&str, i32); 9] = [
    ("Thin", 100),
    ("ExtraLight", 200),
    ("Light", 300),
    ("Normal", 400),
    ("Medium", 500),
    ("SemiBold", 600),
    ("Bold", 700),
    ("ExtraBold", 800),
    ("Black", 900),
];

fn class(full_name: &str, properties: &[&str]) -> Arc<TypeInfo> {
    TypeInfo::class(full_name)
        .read_write(properties.iter().copied())
        .build()
}

/// Descriptor of a well-known type by its fully qualified name.
pub fn descriptor(full_name: &str) -> Option<Arc<TypeInfo>> {
    let ty = match full_name {
        COLOR => class(COLOR, &["A", "R", "G", "B"]),
        POINT => class(POINT, &["X", "Y"]),
        RECT => class(RECT, &["X", "Y", "Width", "Height"]),
        THICKNESS => class(THICKNESS, &["Left", "Top", "Right", "Bottom"]),
        SOLID_COLOR_BRUSH => class(SOLID_COLOR_BRUSH, &["Color", "Opacity"]),
        LINEAR_GRADIENT_BRUSH => TypeInfo::class(LINEAR_GRADIENT_BRUSH)
            .read_write(["StartPoint", "EndPoint", "Opacity"])
            .property(PropertyInfo::read_only("GradientStops"))
            .build(),
        GRADIENT_STOP => class(GRADIENT_STOP, &["Color", "Offset"]),
        IMAGE_BRUSH => class(IMAGE_BRUSH, &["ImageSource", "Stretch", "Opacity"]),
        STRETCH => TypeInfo::enumeration(STRETCH, STRETCH_MEMBERS),
        BITMAP_IMAGE => class(BITMAP_IMAGE, &["UriSource"]),
        RESOURCE_REFERENCE => class(RESOURCE_REFERENCE, &["ResourceKey"]),
        DATA_TEMPLATE => class(DATA_TEMPLATE, &["DataType", "VisualTree"]),
        CONTROL_TEMPLATE => class(CONTROL_TEMPLATE, &["TargetType", "VisualTree"]),
        ITEMS_PANEL_TEMPLATE => class(ITEMS_PANEL_TEMPLATE, &["VisualTree"]),
        STYLE => TypeInfo::class(STYLE)
            .read_write(["TargetType", "BasedOn"])
            .property(PropertyInfo::read_only("Setters"))
            .build(),
        SETTER => class(SETTER, &["Property", "Value"]),
        SOUND_SOURCE => class(SOUND_SOURCE, &["SoundAsset", "Volume"]),
        DOUBLE_ANIMATION | SOLID_COLOR_BRUSH_ANIMATION | THICKNESS_ANIMATION => class(
            full_name,
            &["From", "To", "Duration", "TargetName", "TargetProperty"],
        ),
        RECTANGLE_GEOMETRY => class(RECTANGLE_GEOMETRY, &["Rect", "RadiusX", "RadiusY"]),
        ELLIPSE_GEOMETRY => class(ELLIPSE_GEOMETRY, &["Center", "RadiusX", "RadiusY"]),
        LINE_GEOMETRY => class(LINE_GEOMETRY, &["StartPoint", "EndPoint"]),
        FONT_FAMILY => class(FONT_FAMILY, &["Source"]),
        FONT_WEIGHT => class(FONT_WEIGHT, &["Weight"]),
        DIRECTIONAL_BLUR_EFFECT => class(DIRECTIONAL_BLUR_EFFECT, &["Angle", "BlurAmount"]),
        CUSTOM_EFFECT => class(CUSTOM_EFFECT, &["EffectAsset"]),
        _ => return None,
    };
    Some(ty)
}

/// Start an object of a well-known type.
///
/// # Panics
///
/// Panics if `full_name` is not one of the catalog constants.
pub fn object(full_name: &str) -> DynamicObject {
    let ty = descriptor(full_name)
        .unwrap_or_else(|| panic!("'{full_name}' is not a well-known type"));
    DynamicObject::new(ty)
}

pub fn color_value(a: u8, r: u8, g: u8, b: u8) -> Value {
    object(COLOR)
        .with("A", Value::Byte(a))
        .with("R", Value::Byte(r))
        .with("G", Value::Byte(g))
        .with("B", Value::Byte(b))
        .into_value()
}

pub fn point_value(x: f64, y: f64) -> Value {
    object(POINT).with("X", x).with("Y", y).into_value()
}

pub fn rect_value(x: f64, y: f64, width: f64, height: f64) -> Value {
    object(RECT)
        .with("X", x)
        .with("Y", y)
        .with("Width", width)
        .with("Height", height)
        .into_value()
}

pub fn thickness_value(left: f64, top: f64, right: f64, bottom: f64) -> Value {
    object(THICKNESS)
        .with("Left", left)
        .with("Top", top)
        .with("Right", right)
        .with("Bottom", bottom)
        .into_value()
}

pub fn solid_color_brush_value(color: Value) -> Value {
    object(SOLID_COLOR_BRUSH)
        .with("Color", color)
        .with("Opacity", 1.0)
        .into_value()
}

pub fn gradient_stop_value(color: Value, offset: f64) -> Value {
    object(GRADIENT_STOP)
        .with("Color", color)
        .with("Offset", offset)
        .into_value()
}

pub fn linear_gradient_brush_value(start: Value, end: Value, stops: Vec<Value>) -> Value {
    object(LINEAR_GRADIENT_BRUSH)
        .with("StartPoint", start)
        .with("EndPoint", end)
        .with("GradientStops", Value::List(stops))
        .with("Opacity", 1.0)
        .into_value()
}

pub fn stretch_value(member: &str) -> Option<Value> {
    let ty = descriptor(STRETCH)?;
    EnumValue::new(ty, member).map(Value::Enum)
}

pub fn font_family_value(source: &str) -> Value {
    object(FONT_FAMILY).with("Source", source).into_value()
}

pub fn font_weight_value(weight: i32) -> Value {
    object(FONT_WEIGHT).with("Weight", weight).into_value()
}

pub fn setter_value(property: &str, value: impl Into<Value>) -> Value {
    object(SETTER)
        .with("Property", property)
        .with("Value", value)
        .into_value()
}

pub fn resource_reference_value(key: &str) -> Value {
    object(RESOURCE_REFERENCE)
        .with("ResourceKey", key)
        .into_value()
}
