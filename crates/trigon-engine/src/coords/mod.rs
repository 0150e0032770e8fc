//! Framebuffer geometry.
//!
//! All sizes here are physical pixels, the unit `glViewport` expects.

mod viewport;

pub use viewport::Viewport;
