use std::sync::Once;

use log::LevelFilter;

/// Logger setup for hosts embedding the engine.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`. Filters use the
/// `env_logger` syntax (e.g. "info", "kite_engine::render=trace,kite_engine::tween=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    pub fn with_write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(self.default_level),
        };
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call does anything.
///
/// Returns `true` if this call installed the logger. Another `log` backend installed by
/// the host is left alone.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| match config.builder().try_init() {
        Ok(()) => {
            installed = true;
            log::debug!("logging initialized");
        }
        Err(err) => eprintln!("kite: logger not installed: {err}"),
    });
    installed
}
