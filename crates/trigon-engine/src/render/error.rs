/// Failure to allocate a GL object.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum RenderError {
    #[error("failed to create GL buffer: {0}")]
    CreateBuffer(String),

    #[error("failed to create {stage} shader: {message}")]
    CreateShader {
        stage: &'static str,
        message: String,
    },
}
