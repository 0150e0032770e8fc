use std::fmt;
use std::rc::Rc;

use glow::HasContext;

use super::RenderError;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a driver-side compile.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompileStatus {
    Compiled,
    /// `info_log` is the driver's compiler output, verbatim.
    Failed { info_log: String },
}

impl CompileStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileStatus::Compiled)
    }

    pub fn info_log(&self) -> Option<&str> {
        match self {
            CompileStatus::Compiled => None,
            CompileStatus::Failed { info_log } => Some(info_log),
        }
    }
}

/// A shader object that can be recompiled in place.
///
/// Recompiling replaces the previous source; the object itself is created once
/// and deleted on drop.
pub struct Shader {
    gl: Rc<glow::Context>,
    id: glow::Shader,
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

impl Shader {
    pub fn new(gl: Rc<glow::Context>, stage: ShaderStage) -> Result<Self, RenderError> {
        let id = unsafe { gl.create_shader(stage.gl_enum()) }.map_err(|message| {
            RenderError::CreateShader {
                stage: stage.name(),
                message,
            }
        })?;
        log::debug!("created {stage} shader {id:?}");

        Ok(Self { gl, id })
    }

    /// Sets `source` and compiles it. Validation is left entirely to the driver.
    pub fn compile(&self, source: &str) -> CompileStatus {
        unsafe {
            self.gl.shader_source(self.id, source);
            self.gl.compile_shader(self.id);

            if self.gl.get_shader_compile_status(self.id) {
                CompileStatus::Compiled
            } else {
                CompileStatus::Failed {
                    info_log: self.gl.get_shader_info_log(self.id),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_status_has_no_log() {
        assert!(CompileStatus::Compiled.is_success());
        assert_eq!(CompileStatus::Compiled.info_log(), None);
    }

    #[test]
    fn failed_status_carries_driver_log() {
        let status = CompileStatus::Failed {
            info_log: "0:1(1): error: syntax error".into(),
        };
        assert!(!status.is_success());
        assert_eq!(status.info_log(), Some("0:1(1): error: syntax error"));
    }

    #[test]
    fn vertex_stage_name_and_enum() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Vertex.gl_enum(), glow::VERTEX_SHADER);
    }
}
