use winit::error::EventLoopError;

use crate::device::DeviceError;
use crate::render::RenderError;

/// Fatal runtime failures. Any of these ends the process before (or instead
/// of) rendering.
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("application init failed: {0}")]
    Init(#[from] RenderError),
}
