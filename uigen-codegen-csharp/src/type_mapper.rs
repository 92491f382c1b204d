//! C# type mapper implementation.

use uigen_codegen::builder::TypeMapper;
use uigen_core::PrimitiveKind;

/// Maps language-agnostic `TypeRef` types to C# type syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn map_primitive(&self, ty: PrimitiveKind) -> String {
        let keyword = match ty {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::SByte => "sbyte",
            PrimitiveKind::Int16 => "short",
            PrimitiveKind::UInt16 => "ushort",
            PrimitiveKind::Int32 => "int",
            PrimitiveKind::UInt32 => "uint",
            PrimitiveKind::Int64 => "long",
            PrimitiveKind::UInt64 => "ulong",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Single => "float",
            PrimitiveKind::String => "string",
        };
        keyword.to_string()
    }

    fn map_array(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }

    fn map_object(&self) -> String {
        "object".to_string()
    }

    fn map_void(&self) -> String {
        "void".to_string()
    }
}
