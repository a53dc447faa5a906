//! Registry entries

use super::TypeKey;
use crate::error::{Error, Result};
use crate::ports::Factory;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Type-erased instance held by a value binding
pub type Instance = Rc<dyn Any>;

/// A registry entry: a constructed value or a producing factory
#[derive(Clone)]
pub enum Binding {
    /// An already-constructed instance
    Value(Instance),
    /// A factory producing the instance on demand
    Factory(Rc<dyn Factory>),
}

impl Binding {
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }

    /// The instance of a value binding
    pub fn as_value(&self) -> Option<&Instance> {
        match self {
            Self::Value(instance) => Some(instance),
            Self::Factory(_) => None,
        }
    }

    /// Consume the binding, keeping the instance of a value binding
    pub fn into_value(self) -> Option<Instance> {
        match self {
            Self::Value(instance) => Some(instance),
            Self::Factory(_) => None,
        }
    }

    /// The factory of a factory binding
    pub fn as_factory(&self) -> Option<&Rc<dyn Factory>> {
        match self {
            Self::Value(_) => None,
            Self::Factory(factory) => Some(factory),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Binding::Value(..)"),
            Self::Factory(factory) => write!(f, "Binding::Factory({})", factory.signature()),
        }
    }
}

/// Clone a `T` out of an instance stored under `key`
///
/// Fails with [`Error::TypeMismatch`] when the instance holds another type,
/// which only happens for raw bindings whose key and value disagree.
pub fn read_instance<T: Clone + 'static>(instance: &Instance, key: TypeKey) -> Result<T> {
    instance
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| Error::type_mismatch::<T>(key))
}
