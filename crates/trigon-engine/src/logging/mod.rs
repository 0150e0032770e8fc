//! Logging utilities.
//!
//! Every diagnostic the program emits (setup failures, missing shader files,
//! compiler info logs) goes through the `log` facade. This module owns the one
//! place the `env_logger` backend is installed.

mod init;

pub use init::{init_logging, LoggingConfig};
