//! Trigon engine crate.
//!
//! Owns the platform + OpenGL runtime pieces: window and context creation, the
//! frame loop, RAII GL resources, and shader source loading.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
