//! Typed retrieval, function invocation and struct population

use super::Registry;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::value_objects::read_instance;
use wirebox_domain::{BindingSource, Inject, Injectable, Instance, ResolutionChain, TypeKey};

impl Registry {
    /// Resolve `key` to an instance, invoking a factory if that is what is bound
    ///
    /// `Ok(None)` when nothing is bound here or in any parent.
    pub fn get_key(&self, key: TypeKey) -> Result<Option<Instance>> {
        self.resolve_key(key)
    }

    /// Typed [`Registry::get_key`]
    pub fn get<T: Clone + 'static>(&self) -> Result<Option<T>> {
        let key = TypeKey::of::<T>();
        self.get_key(key)?
            .map(|instance| read_instance(&instance, key))
            .transpose()
    }

    /// Like [`Registry::get`], reporting absence as `Error::DependencyNotFound`
    pub fn resolve<T: Clone + 'static>(&self) -> Result<T> {
        let key = TypeKey::of::<T>();
        match self.get_key(key)? {
            Some(instance) => read_instance(&instance, key),
            None => Err(self.not_found(key)),
        }
    }

    /// Call `f` with every parameter resolved from the registry
    ///
    /// Returns whatever `f` returns; several results come back as a tuple.
    ///
    /// ```
    /// use wirebox_infrastructure::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.register_value(2_u32).register_value("x");
    ///
    /// let (n, s) = registry.invoke(|n: u32, s: &'static str| (n * 2, s)).unwrap();
    /// assert_eq!((n, s), (4, "x"));
    /// ```
    pub fn invoke<Args, F: Injectable<Args>>(&self, f: F) -> Result<F::Output> {
        let parameters = f.parameters();
        let mut args = Vec::with_capacity(parameters.len());
        for param in parameters {
            match self.get_key(param)? {
                Some(instance) => args.push(instance),
                None => return Err(self.not_found(param)),
            }
        }
        f.call_with(&args)
    }

    /// Populate the `#[inject]` fields of `target`
    ///
    /// Stops at the first field that cannot be resolved; fields assigned
    /// before it keep their new values.
    pub fn apply<T: Inject + ?Sized>(&self, target: &mut T) -> Result<()> {
        target.inject(self).inspect_err(|err| {
            // Failures inside a factory chain were already reported by lookup
            if matches!(err, Error::DependencyNotFound { factory: None, .. }) {
                self.report(err);
            }
        })
    }

    fn not_found(&self, key: TypeKey) -> Error {
        let err = Error::dependency_not_found(key, ResolutionChain::root(key), None);
        self.report(&err);
        err
    }
}
