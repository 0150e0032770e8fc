//! GL display + context + window surface management.
//!
//! This module is responsible for:
//! - creating the window together with a matching GL config
//! - creating the OpenGL context and making it current on the window surface
//! - loading GL function pointers into a shared `glow::Context`
//! - presenting frames (buffer swap)

mod context;
mod error;
mod init;

pub use context::GlContext;
pub use error::DeviceError;
pub use init::{GlInit, GlVersion, ParseGlVersionError};
