use crate::input::KeyEvent;
use crate::render::RenderError;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Called once, after the GL context is current and the viewport is set.
    ///
    /// An error here is fatal: the runtime shuts down before the first frame.
    fn on_init(&mut self, ctx: &mut InitCtx<'_>) -> Result<(), RenderError>;

    /// Called for every key transition, repeats included.
    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame, before the buffer swap.
    fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl;

    /// Called while the context is still current, right before teardown.
    ///
    /// GL resources must be released here, not in a later `Drop`.
    fn on_exit(&mut self) {}
}
