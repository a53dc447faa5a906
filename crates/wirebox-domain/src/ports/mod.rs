//! Domain Port Interfaces
//!
//! Boundary contracts between the resolution engine and the code it serves.
//! Ports stand in for the introspection a reflective runtime would provide:
//!
//! - **factory** - factories and callables with statically known parameter types
//! - **source** - read-only binding lookup (what a parent registry exposes)
//! - **inject** - struct population

/// Factory and invocation adapters
pub mod factory;
/// Struct population
pub mod inject;
/// Binding lookup
pub mod source;

pub use factory::{Factory, FnFactory, Injectable, IntoFactory};
pub use inject::Inject;
pub use source::{BindingSource, resolve_as};
