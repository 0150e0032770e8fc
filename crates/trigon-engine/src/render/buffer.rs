use std::rc::Rc;

use glow::HasContext;

use super::RenderError;

/// An `ARRAY_BUFFER` holding `f32` vertex data.
pub struct VertexBuffer {
    gl: Rc<glow::Context>,
    id: glow::Buffer,
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.id);
        }
    }
}

impl VertexBuffer {
    pub fn new(gl: Rc<glow::Context>) -> Result<Self, RenderError> {
        let id = unsafe { gl.create_buffer() }.map_err(RenderError::CreateBuffer)?;
        log::debug!("created vertex buffer {id:?}");

        Ok(Self { gl, id })
    }

    /// Replaces the buffer contents with `data` (`STATIC_DRAW`).
    ///
    /// The buffer stays bound to `ARRAY_BUFFER` afterwards.
    pub fn upload(&self, data: &[f32]) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.id));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
        }
    }
}
