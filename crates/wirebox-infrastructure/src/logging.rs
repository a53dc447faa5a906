//! Structured logging with tracing
//!
//! Provides centralized logging configuration using the tracing ecosystem.
//! The registry itself only emits events; installing a subscriber is left to
//! the embedding application through [`init_logging`].

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV, REGISTRY_LOG_TARGET};
use wirebox_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `WIREBOX_LOG` replaces the configured filter entirely when set.
/// Fails when a level is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let directives = filter_directives(config)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&directives));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_STEM)),
        )
    });

    // Layer types differ between plain and JSON output, hence the branches
    let installed = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter).with(stdout);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(file).try_init()
        } else {
            registry.try_init()
        }
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter).with(stdout);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(file).try_init()
        } else {
            registry.try_init()
        }
    };

    installed.map_err(|err| Error::configuration(format!("Failed to install subscriber: {err}")))?;

    info!(filter = %directives, "Logging initialized");
    Ok(())
}

/// Default filter: the global level, with the registry target at its own level
///
/// ```
/// use wirebox_infrastructure::logging::{LoggingConfig, filter_directives};
///
/// let directives = filter_directives(&LoggingConfig::default()).unwrap();
/// assert_eq!(directives, "info,wirebox_infrastructure::registry=warn");
/// ```
pub fn filter_directives(config: &LoggingConfig) -> Result<String> {
    let level = parse_log_level(&config.level)?;
    let registry_level = parse_log_level(&config.registry_level)?;
    Ok(format!(
        "{},{REGISTRY_LOG_TARGET}={}",
        level.as_str().to_ascii_lowercase(),
        registry_level.as_str().to_ascii_lowercase()
    ))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
