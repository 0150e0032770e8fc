use std::rc::Rc;

use crate::coords::Viewport;
use crate::time::FrameTime;

/// Context passed to `App::on_init`.
pub struct InitCtx<'a> {
    pub gl: &'a Rc<glow::Context>,
    /// Framebuffer size the viewport was set to.
    pub viewport: Viewport,
}

/// Per-frame context passed to `App::on_frame`.
pub struct FrameCtx {
    pub time: FrameTime,
}
