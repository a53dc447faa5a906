//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `wirebox_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebox";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// REGISTRY CONSTANTS
// ============================================================================

/// Whether top-level factory results are cached by default
pub const DEFAULT_MEMOIZE_RESOLVED: bool = false;

/// Whether failed resolutions are logged by default
pub const DEFAULT_REPORT_FAILURES: bool = true;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Target of the events emitted while resolving bindings
pub const REGISTRY_LOG_TARGET: &str = "wirebox_infrastructure::registry";

/// Default level for the registry target
///
/// Failure reports are `warn!`; memoization and factory calls are `debug!`.
pub const DEFAULT_REGISTRY_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WIREBOX_LOG";

/// File stem used for log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wirebox";
