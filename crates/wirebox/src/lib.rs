//! # Wirebox
//!
//! A type-indexed dependency registry.
//!
//! A [`Registry`] associates types with values or with factories producing
//! them, and satisfies a request for "the value of type T" by lookup, lazy
//! factory invocation, or delegation to a parent registry. Clients use it to
//! populate the `#[inject]` fields of a struct ([`Registry::apply`]), call a
//! function with its parameters supplied from the registry
//! ([`Registry::invoke`]), or fetch a value by type ([`Registry::get`]).
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox::prelude::*;
//!
//! trait Greeter {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct Plain;
//!
//! impl Greeter for Plain {
//!     fn greet(&self, name: &str) -> String {
//!         format!("hello {name}")
//!     }
//! }
//!
//! #[derive(Default, Inject)]
//! struct Page {
//!     #[inject]
//!     greeter: Option<Arc<dyn Greeter>>,
//!     #[inject]
//!     visitor: String,
//! }
//!
//! let registry = Registry::new();
//! registry
//!     .register_value(Some(Arc::new(Plain) as Arc<dyn Greeter>))
//!     .register_value("ada".to_string());
//!
//! let mut page = Page::default();
//! registry.apply(&mut page).unwrap();
//!
//! let greeting = page.greeter.map(|g| g.greet(&page.visitor));
//! assert_eq!(greeting.as_deref(), Some("hello ada"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - type keys, bindings, resolution ports and errors
//! - `infrastructure` - the registry engine, configuration and logging

/// Domain layer - type keys, bindings, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Infrastructure layer - registry, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine and its configuration at the crate root
pub use infrastructure::{AppConfig, ConfigBuilder, ConfigLoader, Registry, RegistryConfig};

// Derive macro, sharing its name with the trait
pub use wirebox_macros::Inject;

/// Everything needed to register, resolve and inject
pub mod prelude {
    pub use crate::{
        BindingSource, Error, Inject, Injectable, IntoFactory, Registry, RegistryConfig, Result,
        TypeKey,
    };
}
