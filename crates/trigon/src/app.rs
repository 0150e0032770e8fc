use std::path::PathBuf;

use trigon_engine::core::{App, AppControl, FrameCtx, InitCtx};
use trigon_engine::input::KeyEvent;
use trigon_engine::render::RenderError;

use crate::backend::GlBackend;
use crate::triangle::{FrameDriver, control_for_key};

pub struct TriangleApp {
    shader_path: PathBuf,
    driver: Option<FrameDriver<GlBackend>>,
}

impl TriangleApp {
    pub fn new(shader_path: PathBuf) -> Self {
        Self {
            shader_path,
            driver: None,
        }
    }
}

impl App for TriangleApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_>) -> Result<(), RenderError> {
        let backend = GlBackend::new(ctx.gl.clone())?;
        let driver = FrameDriver::new(backend, self.shader_path.clone());

        log::info!(
            "clearing {}x{}, vertex shader {}",
            ctx.viewport.width,
            ctx.viewport.height,
            driver.shader_path().display()
        );
        self.driver = Some(driver);
        Ok(())
    }

    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        control_for_key(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl {
        if let Some(driver) = self.driver.as_mut() {
            let report = driver.frame();
            if ctx.time.frame_index == 0 && report.compile.is_success() {
                log::info!("vertex shader compiled");
            }
        }
        AppControl::Continue
    }

    fn on_exit(&mut self) {
        // Deletes the buffer and shader while the context is still current.
        self.driver = None;
    }
}
