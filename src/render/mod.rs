pub mod backend;
pub mod webgl;
pub mod shaders;
pub mod surface;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod recording;

pub use backend::{GraphicsBackend, Primitive, ShaderStage};
pub use webgl::WebGLContext;
pub use surface::{CanvasSurface, ContextKind, DrawingSurface};
pub use pipeline::{acquire_context, initialize, Bootstrap, RenderResult, RenderedScene, Stage};
