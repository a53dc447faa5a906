//! Type-indexed dependency registry
//!
//! A [`Registry`] maps [`TypeKey`]s to bindings: constructed values or
//! factories producing them. Requests are satisfied by local lookup (values
//! first, then factories), lazy factory invocation with argument
//! memoization, and finally delegation to an optional parent registry.
//!
//! ## Example
//!
//! ```
//! use wirebox_infrastructure::Registry;
//!
//! let registry = Registry::new();
//! registry
//!     .register_value(42_i32)
//!     .register_factory(|n: i32| n.to_string());
//!
//! let text = registry.invoke(|s: String| s).unwrap();
//! assert_eq!(text, "42");
//! ```
//!
//! The registry is single-threaded: it is neither `Send` nor `Sync`, and a
//! parent is shared through `Rc`.

mod invoke;
mod resolve;

use crate::config::RegistryConfig;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tracing::trace;
use wirebox_domain::{BindingSource, Factory, Instance, IntoFactory, TypeKey};

/// Type-indexed container of values and factories
pub struct Registry {
    /// Constructed values, including memoized factory products
    values: RefCell<HashMap<TypeKey, Instance>>,
    /// Factories keyed by the type they produce
    factories: RefCell<HashMap<TypeKey, Rc<dyn Factory>>>,
    /// Registry consulted when no local binding exists
    parent: RefCell<Option<Weak<dyn BindingSource>>>,
    /// Set while a lookup is forwarded to the parent
    delegating: Cell<bool>,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            factories: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
            delegating: Cell::new(false),
            config,
        }
    }

    /// Create an empty registry whose parent is `self`
    ///
    /// The child inherits this registry's configuration.
    pub fn child(self: &Rc<Self>) -> Self {
        let child = Self::with_config(self.config);
        child.set_parent(self);
        child
    }

    /// Bind `value` under its own type
    ///
    /// Replaces any value or factory previously bound to that type here.
    pub fn register_value<T: 'static>(&self, value: T) -> &Self {
        self.bind_value(TypeKey::of::<T>(), Rc::new(value))
    }

    /// Bind `value` under the interface marker `I`
    ///
    /// The binding is requested as `Arc<I>`, whatever concrete type the value
    /// was created from.
    ///
    /// # Panics
    ///
    /// Panics when `I` is a sized type (see [`TypeKey::interface`]).
    pub fn register_as<I: ?Sized + 'static>(&self, value: Arc<I>) -> &Self {
        self.bind_value(TypeKey::interface::<I>(), Rc::new(value))
    }

    /// Bind a factory under the type it returns
    ///
    /// Parameters are resolved from this registry (or its parents) when the
    /// factory is first needed. Replaces any value or factory previously
    /// bound to the return type here.
    pub fn register_factory<Args, F: IntoFactory<Args>>(&self, factory: F) -> &Self {
        let factory = factory.into_factory();
        self.bind_factory(factory.output(), Rc::new(factory))
    }

    /// Bind a precomputed key directly to an instance
    ///
    /// For keys that cannot be derived from the value's own type. The caller
    /// is responsible for the instance holding the type a reader will ask for;
    /// a disagreement surfaces as `Error::TypeMismatch` on read.
    pub fn set(&self, key: TypeKey, instance: Instance) -> &Self {
        self.bind_value(key, instance)
    }

    /// Bind a precomputed key directly to a factory
    pub fn set_factory(&self, key: TypeKey, factory: Rc<dyn Factory>) -> &Self {
        self.bind_factory(key, factory)
    }

    /// Install `parent` as the registry consulted for missing bindings
    ///
    /// Only a weak reference is kept; the caller keeps the parent alive.
    /// Replaces any previous parent. Links that lead back here (including
    /// `r.set_parent(&r)`) are tolerated: a lookup that returns to a registry
    /// already forwarding it ends there, and the key counts as absent.
    pub fn set_parent<P: BindingSource + 'static>(&self, parent: &Rc<P>) -> &Self {
        let weak: Weak<dyn BindingSource> = Rc::downgrade(parent) as Weak<dyn BindingSource>;
        *self.parent.borrow_mut() = Some(weak);
        trace!("parent registry installed");
        self
    }

    /// Whether a binding for `key` exists at this level
    pub fn contains_key(&self, key: TypeKey) -> bool {
        self.values.borrow().contains_key(&key) || self.factories.borrow().contains_key(&key)
    }

    /// Whether a binding for `T` exists at this level
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.contains_key(TypeKey::of::<T>())
    }

    /// Number of distinct keys bound at this level
    pub fn len(&self) -> usize {
        let values = self.values.borrow();
        let factories = self.factories.borrow();
        values.len() + factories.keys().filter(|key| !values.contains_key(key)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty() && self.factories.borrow().is_empty()
    }

    /// Whether a parent has been installed (it may have been dropped since)
    pub fn has_parent(&self) -> bool {
        self.parent.borrow().is_some()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn bind_value(&self, key: TypeKey, instance: Instance) -> &Self {
        self.factories.borrow_mut().remove(&key);
        self.values.borrow_mut().insert(key, instance);
        trace!(key = %key, "value registered");
        self
    }

    fn bind_factory(&self, key: TypeKey, factory: Rc<dyn Factory>) -> &Self {
        self.values.borrow_mut().remove(&key);
        trace!(key = %key, signature = %factory.signature(), "factory registered");
        self.factories.borrow_mut().insert(key, factory);
        self
    }

    /// Cache a resolved instance without disturbing the factory behind it
    fn memoize(&self, key: TypeKey, instance: Instance) {
        self.values.borrow_mut().insert(key, instance);
    }

    fn parent(&self) -> Option<Rc<dyn BindingSource>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<TypeKey> = self.values.borrow().keys().copied().collect();
        let factories: Vec<String> = self
            .factories
            .borrow()
            .values()
            .map(|factory| factory.signature())
            .collect();
        f.debug_struct("Registry")
            .field("values", &values)
            .field("factories", &factories)
            .field("has_parent", &self.has_parent())
            .field("config", &self.config)
            .finish()
    }
}
