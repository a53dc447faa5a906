//! Logging Tests

use tracing::Level;
use wirebox_domain::error::Error;
use wirebox_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_REGISTRY_LOG_LEVEL};
use wirebox_infrastructure::logging::{
    LoggingConfig, filter_directives, init_logging, parse_log_level,
};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.registry_level, DEFAULT_REGISTRY_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_filter_directives_scope_registry_target() {
    assert_eq!(
        filter_directives(&LoggingConfig::default()).unwrap(),
        "info,wirebox_infrastructure::registry=warn"
    );

    let config = LoggingConfig {
        level: "Warning".to_string(),
        registry_level: "DEBUG".to_string(),
        ..LoggingConfig::default()
    };
    assert_eq!(
        filter_directives(&config).unwrap(),
        "warn,wirebox_infrastructure::registry=debug"
    );
}

#[test]
fn test_filter_directives_reject_invalid_registry_level() {
    let config = LoggingConfig {
        registry_level: "verbose".to_string(),
        ..LoggingConfig::default()
    };

    match filter_directives(&config) {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("verbose")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };

    match init_logging(&config) {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("chatty")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_init_logging_twice_fails() {
    let config = LoggingConfig::default();

    // Another test in this binary may already have installed a subscriber
    let _ = init_logging(&config);

    match init_logging(&config) {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("Failed to install subscriber"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
