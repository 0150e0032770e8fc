mod app;
mod backend;
mod triangle;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use trigon_engine::device::{GlInit, GlVersion};
use trigon_engine::logging::{LoggingConfig, init_logging};
use trigon_engine::window::{Runtime, RuntimeConfig};

use crate::app::TriangleApp;
use crate::triangle::DEFAULT_SHADER_PATH;

const WINDOW_TITLE: &str = "OpenGL Test";

/// Status reported when the window or GL context cannot be set up.
const EXIT_SETUP_FAILED: i32 = -1;

#[derive(Parser, Debug)]
#[command(
    name = "trigon",
    version,
    about = "Opens an OpenGL window and uploads a triangle every frame"
)]
struct Cli {
    /// Vertex shader source, re-read and recompiled every frame.
    #[arg(long, default_value = DEFAULT_SHADER_PATH)]
    shader: PathBuf,

    /// OpenGL core-profile version to request (MAJOR.MINOR).
    #[arg(long, default_value = "3.3")]
    gl_version: GlVersion,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: WINDOW_TITLE.to_string(),
            resizable: false,
            gl: GlInit {
                version: self.gl_version,
                core_profile: true,
            },
            ..RuntimeConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let code = exit_code(&run(cli));
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.runtime_config();
    log::debug!("starting with {config:?}");

    Runtime::run(config, TriangleApp::new(cli.shader)).context("failed to run OpenGL window")
}

fn exit_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{e:#}");
            EXIT_SETUP_FAILED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon_engine::device::DeviceError;
    use trigon_engine::window::RuntimeError;

    #[test]
    fn defaults_match_the_tutorial_setup() {
        let cli = Cli::parse_from(["trigon"]);
        assert_eq!(cli.shader, PathBuf::from("VertexShader.vert"));
        assert_eq!(cli.gl_version, GlVersion::new(3, 3));

        let config = cli.runtime_config();
        assert_eq!(config.title, "OpenGL Test");
        assert_eq!(config.initial_size.width, 800.0);
        assert_eq!(config.initial_size.height, 600.0);
        assert!(!config.resizable);
        assert!(config.gl.core_profile);
    }

    #[test]
    fn gl_version_flag_is_parsed() {
        let cli = Cli::parse_from(["trigon", "--gl-version", "9.9"]);
        assert_eq!(cli.runtime_config().gl.version, GlVersion::new(9, 9));
    }

    #[test]
    fn malformed_gl_version_is_rejected() {
        assert!(Cli::try_parse_from(["trigon", "--gl-version", "latest"]).is_err());
    }

    #[test]
    fn clean_shutdown_exits_zero() {
        assert_eq!(exit_code(&Ok(())), 0);
    }

    #[test]
    fn setup_failure_exits_minus_one() {
        let err = RuntimeError::from(DeviceError::MissingWindow);
        let result: anyhow::Result<()> = Err(anyhow::Error::new(err).context("setup"));
        assert_eq!(exit_code(&result), -1);
    }

    #[test]
    fn unsupported_version_failure_exits_minus_one() {
        let err = RuntimeError::from(DeviceError::Loader {
            requested: GlVersion::new(9, 9),
            found: "4.6".into(),
        });
        assert_eq!(exit_code(&Err(err.into())), -1);
    }
}
