//! Error handling types

use crate::value_objects::{ResolutionChain, TypeKey};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// No binding for a requested type anywhere in the registry chain
    #[error("value not found for type {key}{}: {chain}", describe_factory(.factory))]
    DependencyNotFound {
        /// The type that could not be resolved
        key: TypeKey,
        /// Types being resolved when the lookup failed, ending with `key`
        chain: ResolutionChain,
        /// Signature of the factory that required `key`, if any
        factory: Option<String>,
    },

    /// A factory chain revisited a type that is already being resolved
    #[error("dependency loop: {chain}")]
    DependencyLoop {
        /// The chain that closed the loop
        chain: ResolutionChain,
    },

    /// A binding holds an instance of a different type than its key
    #[error("type mismatch: binding for {key} does not hold a value of type {expected}")]
    TypeMismatch {
        /// Key the binding was stored under
        key: TypeKey,
        /// Type the caller tried to read
        expected: &'static str,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn describe_factory(factory: &Option<String>) -> String {
    factory
        .as_deref()
        .map(|signature| format!(" (factory '{signature}')"))
        .unwrap_or_default()
}

// Resolution error creation methods
impl Error {
    /// Create a dependency-not-found error
    pub fn dependency_not_found(
        key: TypeKey,
        chain: ResolutionChain,
        factory: Option<String>,
    ) -> Self {
        Self::DependencyNotFound {
            key,
            chain,
            factory,
        }
    }

    /// Create a dependency-loop error
    pub fn dependency_loop(chain: ResolutionChain) -> Self {
        Self::DependencyLoop { chain }
    }

    /// Create a type mismatch error for a read of `T` under `key`
    pub fn type_mismatch<T: ?Sized + 'static>(key: TypeKey) -> Self {
        Self::TypeMismatch {
            key,
            expected: std::any::type_name::<T>(),
        }
    }

    /// Whether this error reports a missing dependency
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DependencyNotFound { .. })
    }

    /// Whether this error reports a dependency loop
    pub fn is_loop(&self) -> bool {
        matches!(self, Self::DependencyLoop { .. })
    }

    /// The resolution chain carried by resolution errors
    pub fn chain(&self) -> Option<&ResolutionChain> {
        match self {
            Self::DependencyNotFound { chain, .. } | Self::DependencyLoop { chain } => Some(chain),
            _ => None,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error without an underlying source
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
