use std::sync::Once;

/// Logger settings.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"debug"` or
/// `"henon_explorer::core::navigation=trace"`. When unset, `RUST_LOG` is
/// consulted before falling back to info.
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

/// Installs the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed, e.g. by a test harness.
        if builder.try_init().is_err() {
            log::warn!("a global logger was already installed");
        }

        log::debug!("logging initialized");
    });
}
