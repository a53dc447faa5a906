//! Registry configuration types

use crate::constants::{DEFAULT_MEMOIZE_RESOLVED, DEFAULT_REPORT_FAILURES};
use serde::{Deserialize, Serialize};

/// Resolution engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Cache the value a top-level lookup obtains by invoking a factory
    ///
    /// Factory results consumed as arguments of other factories are always
    /// cached. With this off (the default) a factory requested directly runs
    /// again on every request until something else caches its output.
    pub memoize_resolved: bool,

    /// Emit a warning event for every failed resolution
    pub report_failures: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            memoize_resolved: DEFAULT_MEMOIZE_RESOLVED,
            report_failures: DEFAULT_REPORT_FAILURES,
        }
    }
}
