//! The per-frame sequence: clear, upload the triangle, recompile the vertex shader.
//!
//! Nothing is drawn. The buffer is filled and the shader compiled every frame,
//! but no program is linked and no draw call is issued.

use std::path::{Path, PathBuf};

use trigon_engine::core::AppControl;
use trigon_engine::input::{Key, KeyEvent};
use trigon_engine::paint::Color;
use trigon_engine::render::{CompileStatus, load_source};

/// Default vertex shader location, relative to the working directory.
pub const DEFAULT_SHADER_PATH: &str = "VertexShader.vert";

pub const CLEAR_COLOR: Color = Color::opaque(0.2, 0.3, 0.3);

/// One triangle in normalized device coordinates, `xyz` per vertex.
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.0, 0.5, 0.0,
];

/// GPU operations one frame needs.
pub trait FrameBackend {
    fn clear(&mut self, color: Color);

    fn upload_vertices(&mut self, vertices: &[f32]);

    fn compile_vertex_shader(&mut self, source: &str) -> CompileStatus;
}

/// Outcome of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub compile: CompileStatus,
}

/// Closes on Escape press; everything else is ignored.
pub fn control_for_key(event: KeyEvent) -> AppControl {
    if event.is_press_of(Key::Escape) {
        AppControl::Exit
    } else {
        AppControl::Continue
    }
}

pub struct FrameDriver<B> {
    backend: B,
    shader_path: PathBuf,
}

impl<B> FrameDriver<B>
where
    B: FrameBackend,
{
    pub fn new(backend: B, shader_path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            shader_path: shader_path.into(),
        }
    }

    pub fn shader_path(&self) -> &Path {
        &self.shader_path
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs one frame. Shader failures are logged and reported, never fatal.
    pub fn frame(&mut self) -> FrameReport {
        self.backend.clear(CLEAR_COLOR);

        let vertices = TRIANGLE_VERTICES;
        self.backend.upload_vertices(&vertices);

        let source = load_source(&self.shader_path);
        let compile = self.backend.compile_vertex_shader(&source);
        if let CompileStatus::Failed { info_log } = &compile {
            log::error!(
                "vertex shader {} failed to compile:\n{}",
                self.shader_path.display(),
                info_log.trim_end()
            );
        }

        FrameReport { compile }
    }
}
