//! Read-only lookup port

use crate::error::{Error, Result};
use crate::value_objects::{Binding, Instance, ResolutionChain, TypeKey, read_instance};

/// Anything that can answer "which binding satisfies this type"
///
/// A registry reaches its parent only through this trait, so a child can
/// read from its parent but never register into it.
pub trait BindingSource {
    /// Find the binding for `key`
    ///
    /// With `resolve_factories` set, a factory binding is invoked and its
    /// product returned as a value binding; otherwise the raw factory is
    /// returned so the caller can invoke it in its own context. `Ok(None)`
    /// means no binding exists; that is not an error by itself.
    fn lookup(&self, key: TypeKey, resolve_factories: bool) -> Result<Option<Binding>>;

    /// Resolve `key` to an instance, invoking factories as needed
    fn resolve_key(&self, key: TypeKey) -> Result<Option<Instance>> {
        Ok(self.lookup(key, true)?.and_then(Binding::into_value))
    }
}

/// Resolve a `T` from `source`, reporting absence as an error
///
/// This is what `#[derive(Inject)]` calls for every marked field.
pub fn resolve_as<T: Clone + 'static>(source: &(impl BindingSource + ?Sized)) -> Result<T> {
    let key = TypeKey::of::<T>();
    let instance = source
        .resolve_key(key)?
        .ok_or_else(|| Error::dependency_not_found(key, ResolutionChain::root(key), None))?;
    read_instance(&instance, key)
}
