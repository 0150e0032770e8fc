//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application it drives, plus the per-callback contexts handed over.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InitCtx};
