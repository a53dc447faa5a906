//! # Infrastructure Layer
//!
//! The resolution engine and the cross-cutting concerns around it.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Type-indexed registry with factories, memoization and parent delegation |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod registry;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, RegistryConfig};
pub use error_ext::ErrorContext;
pub use registry::Registry;
