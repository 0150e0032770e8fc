use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "trigon_engine=debug,trigon=trace").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`, before the event loop is created.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.target(env_logger::Target::Stderr);

        // `try_init` so a logger installed by a test harness does not panic here.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_defers_to_environment() {
        let cfg = LoggingConfig::default();
        assert!(cfg.env_filter.is_none());
        assert!(matches!(cfg.write_style, env_logger::WriteStyle::Auto));
    }

    #[test]
    fn repeated_init_is_ignored() {
        init_logging(LoggingConfig {
            env_filter: Some("warn".into()),
            ..Default::default()
        });
        init_logging(LoggingConfig::default());
    }
}
