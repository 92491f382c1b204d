//! Runtime object model for the uigen resource code generator.
//!
//! Resource dictionaries hold arbitrary runtime values. This crate gives
//! those values an explicit shape: a [`Value`] enum, [`TypeInfo`]
//! descriptors listing each type's properties, and the [`Reflect`]
//! capability the generator uses to read them.

pub mod known;
mod type_info;
mod type_key;
mod utils;
mod value;

// Type descriptors
pub use type_info::{PropertyInfo, SkipReason, TypeFlags, TypeInfo, TypeInfoBuilder, TypeKind};
pub use type_key::{PrimitiveKind, TypeKey};
// Runtime values
pub use value::{AccessError, DynamicObject, EnumValue, LIST_TYPE, Reflect, Value};
// String utilities
pub use utils::sanitize_identifier;
