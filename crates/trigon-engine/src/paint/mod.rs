//! Colors handed to the GL clear call.

pub mod color;

pub use color::Color;
