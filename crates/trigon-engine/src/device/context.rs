use std::rc::Rc;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::coords::Viewport;

use super::{DeviceError, GlInit, GlVersion};

/// Owns the current GL context, its window surface, and the loaded GL functions.
///
/// The window passed to [`GlContext::new`] is returned to the caller, which must
/// keep it alive for as long as this value exists and drop it afterwards.
pub struct GlContext {
    /// Shared function table. GL resources hold a clone so they can delete
    /// themselves on drop.
    gl: Rc<glow::Context>,

    surface: Surface<WindowSurface>,

    context: PossiblyCurrentContext,
}

impl GlContext {
    /// Creates the window and a current GL context for it.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<(Window, Self), DeviceError> {
        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|e| DeviceError::Display(e.to_string()))?;

        let window = window.ok_or(DeviceError::MissingWindow)?;
        log::debug!(
            "picked GL config: samples={} alpha={}",
            config.num_samples(),
            config.alpha_size()
        );

        let raw_handle = window.window_handle()?.as_raw();
        let display = config.display();

        let profile = if init.core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };
        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(profile)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                init.version.major,
                init.version.minor,
            ))))
            .build(Some(raw_handle));

        // SAFETY: `raw_handle` belongs to `window`, which outlives the context.
        let not_current = unsafe { display.create_context(&config, &context_attrs) }.map_err(
            |source| DeviceError::Context {
                version: init.version,
                source,
            },
        )?;

        let surface_attrs = window.build_surface_attributes(Default::default())?;
        // SAFETY: same window handle as above.
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .map_err(DeviceError::Surface)?;

        let context = not_current
            .make_current(&surface)
            .map_err(DeviceError::MakeCurrent)?;

        // SAFETY: the context is current on this thread.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };
        check_loaded_version(&gl, init.version)?;

        Ok((
            window,
            Self {
                gl: Rc::new(gl),
                surface,
                context,
            },
        ))
    }

    /// Shared GL function table.
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Sets the GL viewport to cover `viewport`.
    pub fn set_viewport(&self, viewport: Viewport) {
        let (w, h) = viewport.as_gl_size();
        // SAFETY: context is current; viewport dims are clamped to i32.
        unsafe { self.gl.viewport(0, 0, w, h) };
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        self.surface.swap_buffers(&self.context)
    }
}

/// Picks the config with the fewest samples; nothing is drawn with MSAA.
///
/// glutin reports "no matching config" itself and only calls the picker with a
/// non-empty set, so the fallback arm is unreachable in practice.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    fewest_samples(configs, |c| c.num_samples())
        .unwrap_or_else(|| unreachable!("glutin invoked the config picker with no configs"))
}

/// First item with the lowest sample count, or `None` for an empty set.
fn fewest_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.reduce(|best, c| if samples(&c) < samples(&best) { c } else { best })
}

fn check_loaded_version(gl: &glow::Context, requested: GlVersion) -> Result<(), DeviceError> {
    let loaded = gl.version();
    log::info!(
        "GL {}.{} loaded ({})",
        loaded.major,
        loaded.minor,
        loaded.vendor_info
    );

    let wanted = (u32::from(requested.major), u32::from(requested.minor));
    if loaded.is_embedded || (loaded.major, loaded.minor) < wanted {
        return Err(DeviceError::Loader {
            requested,
            found: format!("{}.{}", loaded.major, loaded.minor),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewest_samples_prefers_lowest_count() {
        let configs = [(4u8, "msaa4"), (0, "plain"), (8, "msaa8")];
        let picked = fewest_samples(configs.into_iter(), |c| c.0);
        assert_eq!(picked, Some((0, "plain")));
    }

    #[test]
    fn fewest_samples_keeps_first_on_tie() {
        let configs = [(0u8, "first"), (0, "second")];
        assert_eq!(fewest_samples(configs.into_iter(), |c| c.0), Some((0, "first")));
    }

    #[test]
    fn fewest_samples_of_nothing_is_none() {
        assert_eq!(fewest_samples(std::iter::empty::<u8>(), |c| *c), None);
    }
}
