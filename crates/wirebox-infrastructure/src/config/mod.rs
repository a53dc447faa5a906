//! Configuration management
//!
//! Loads registry and logging settings from defaults, TOML files and
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
