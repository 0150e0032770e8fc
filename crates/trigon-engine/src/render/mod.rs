//! GL resources and shader sources.
//!
//! Every GL object here is owned by exactly one Rust value and deleted on drop.
//! Owners hold an `Rc<glow::Context>`, so they must be dropped while the
//! context that created them is still current.

mod buffer;
mod error;
mod shader;
mod source;

pub use buffer::VertexBuffer;
pub use error::RenderError;
pub use shader::{CompileStatus, Shader, ShaderStage};
pub use source::{load_source, read_source};
