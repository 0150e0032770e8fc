use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App, FrameCtx, InitCtx};
use crate::device::{GlContext, GlInit};
use crate::input::platform::translate_key_event;
use crate::time::FrameClock;

use super::{LoopState, RuntimeError};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub gl: GlInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: false,
            gl: GlInit::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until the window closes.
    ///
    /// Returns the first fatal error, if any. The window, its context, and every
    /// GL resource the app released in `on_exit` are gone when this returns.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<(), RuntimeError>
    where
        A: App,
    {
        let event_loop = EventLoop::new()?;
        let mut state = AppState::new(config, app);

        event_loop.run_app(&mut state)?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    clock: FrameClock,

    // Declared before `window` so the surface and context drop first.
    gl: GlContext,
    window: Window,
}

struct AppState<A> {
    config: RuntimeConfig,
    app: A,

    entry: Option<WindowEntry>,
    state: LoopState,
    fatal: Option<RuntimeError>,
}

impl<A> AppState<A>
where
    A: App,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            entry: None,
            state: LoopState::Running,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: RuntimeError) {
        self.fatal = Some(err);
        self.state.request_close();
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RuntimeError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let (window, gl) = GlContext::new(event_loop, attrs, &self.config.gl)?;

        let viewport = Viewport::from(window.inner_size());
        gl.set_viewport(viewport);
        log::info!("window created, viewport {}x{}", viewport.width, viewport.height);

        let mut ctx = InitCtx {
            gl: gl.gl(),
            viewport,
        };
        let init = self.app.on_init(&mut ctx);

        // Keep the entry even on init failure so teardown runs `on_exit` with a
        // current context.
        self.entry = Some(WindowEntry {
            clock: FrameClock::default(),
            gl,
            window,
        });

        init.map_err(RuntimeError::from)
    }

    fn draw_frame(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let time = entry.clock.tick();
        log::trace!("frame {} dt={:.4}s", time.frame_index, time.dt);

        let mut ctx = FrameCtx { time };
        let control = self.app.on_frame(&mut ctx);
        self.state.apply(control);

        entry.window.pre_present_notify();
        if let Err(e) = entry.gl.swap_buffers() {
            log::error!("failed to swap buffers: {e}");
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || !self.state.is_running() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
            return;
        }

        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.is_running() {
            event_loop.exit();
            return;
        }

        // Unthrottled: render again as soon as pending events are drained.
        event_loop.set_control_flow(ControlFlow::Poll);

        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.state.request_close(),

            WindowEvent::KeyboardInput { event, .. } => {
                let key = translate_key_event(&event);
                let control = self.app.on_key(key);
                self.state.apply(control);
            }

            WindowEvent::RedrawRequested if self.state.is_running() => self.draw_frame(),

            _ => {}
        }

        if !self.state.is_running() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(entry) = self.entry.take() {
            self.app.on_exit();
            drop(entry);
            log::debug!("window and GL context destroyed");
        }
    }
}
