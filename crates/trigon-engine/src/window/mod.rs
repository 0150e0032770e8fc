//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop, the single window, and its GL context.

mod error;
mod runtime;
mod state;

pub use error::RuntimeError;
pub use runtime::{Runtime, RuntimeConfig};
pub use state::LoopState;
