use std::rc::Rc;

use glow::HasContext;
use trigon_engine::paint::Color;
use trigon_engine::render::{CompileStatus, RenderError, Shader, ShaderStage, VertexBuffer};

use crate::triangle::FrameBackend;

/// Frame backend on a live GL context.
///
/// The buffer and shader are created once and reused by every frame; both are
/// deleted when this value drops.
pub struct GlBackend {
    gl: Rc<glow::Context>,
    vertices: VertexBuffer,
    vertex_shader: Shader,
}

impl GlBackend {
    pub fn new(gl: Rc<glow::Context>) -> Result<Self, RenderError> {
        let vertices = VertexBuffer::new(gl.clone())?;
        let vertex_shader = Shader::new(gl.clone(), ShaderStage::Vertex)?;

        Ok(Self {
            gl,
            vertices,
            vertex_shader,
        })
    }
}

impl FrameBackend for GlBackend {
    fn clear(&mut self, color: Color) {
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn upload_vertices(&mut self, vertices: &[f32]) {
        self.vertices.upload(vertices);
    }

    fn compile_vertex_shader(&mut self, source: &str) -> CompileStatus {
        self.vertex_shader.compile(source)
    }
}
