//! Domain Value Objects
//!
//! Immutable value objects the resolution engine works with.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Canonical runtime type identity |
//! | [`ResolutionChain`] | Types being resolved, for loop detection |
//! | [`Binding`] | Registry entry: value or factory |
//! | [`Instance`] | Type-erased shared value |

/// Registry entries
pub mod binding;
/// Resolution chain
pub mod chain;
/// Runtime type identity
pub mod type_key;

pub use binding::{Binding, Instance, read_instance};
pub use chain::ResolutionChain;
pub use type_key::TypeKey;
