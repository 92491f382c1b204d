mod naming;
mod renderer;
mod type_mapper;

pub use naming::CSHARP_NAMING;
pub use renderer::CSharpRenderer;
pub use type_mapper::CSharpTypeMapper;
