//! Logger initialization for the `slurve` binary.
//!
//! The library only emits through the `log` facade; embedders pick their own
//! backend.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "slurve=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
        }
    }
}

impl LoggingConfig {
    /// Raise the default level to debug
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.default_level = log::LevelFilter::Debug;
        }
        self
    }
}

static INIT: Once = Once::new();

fn logger_builder(config: &LoggingConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.default_level);
    if let Some(filter) = config.env_filter.clone().or(rust_log) {
        builder.parse_filters(&filter);
    }
    builder
}

/// Initializes the global logger once; later calls are ignored.
///
/// The default level applies first. An explicit filter (or else `RUST_LOG`)
/// is layered on top: module directives keep the default for everything else,
/// a bare level replaces it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = logger_builder(&config, std::env::var("RUST_LOG").ok());

        builder.format_timestamp(None);
        // Another logger may already be installed by an embedder
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(LoggingConfig::default().default_level, log::LevelFilter::Warn);
        assert_eq!(
            LoggingConfig::default().verbose(true).default_level,
            log::LevelFilter::Debug
        );
        assert_eq!(
            LoggingConfig::default().verbose(false).default_level,
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_verbose_survives_module_filters() {
        let config = LoggingConfig::default().verbose(true);
        let logger = logger_builder(&config, Some("lol_html=error".to_string())).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bare_level_replaces_default() {
        let config = LoggingConfig::default().verbose(true);
        let logger = logger_builder(&config, Some("error".to_string())).build();
        assert_eq!(logger.filter(), log::LevelFilter::Error);

        let explicit = LoggingConfig {
            env_filter: Some("info".to_string()),
            ..LoggingConfig::default()
        };
        let logger = logger_builder(&explicit, Some("trace".to_string())).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default().verbose(true));
    }
}
