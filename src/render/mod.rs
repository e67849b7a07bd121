pub mod webgl;
pub mod shaders;
pub mod program;
pub mod buffers;
pub mod pipeline;

pub use webgl::WebGLContext;
pub use program::ShaderProgram;
pub use buffers::GeometryBuffers;
pub use pipeline::FrameRenderer;
