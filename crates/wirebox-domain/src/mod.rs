//! # Domain Layer
//!
//! Core types for the wirebox type-indexed dependency container.
//! Contains the type keys, bindings and boundary contracts that the
//! resolution engine in `wirebox-infrastructure` is built on.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`value_objects`] | Type keys, resolution chains and bindings |
//! | [`ports`] | Factory, invocation, injection and lookup contracts |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error types |
//!
//! ## Example
//!
//! ```
//! use wirebox_domain::value_objects::TypeKey;
//!
//! let key = TypeKey::of::<String>();
//! assert_eq!(key, TypeKey::of::<String>());
//! assert_ne!(key, TypeKey::of::<i32>());
//! ```

/// Domain-level constants
pub mod constants;
/// Domain error types
pub mod error;
/// Boundary contracts between the registry and its collaborators
pub mod ports;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use ports::{
    BindingSource, Factory, FnFactory, Inject, Injectable, IntoFactory, resolve_as,
};
pub use value_objects::{Binding, Instance, ResolutionChain, TypeKey};
