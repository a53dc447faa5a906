//! Lookup, lazy factory invocation and memoization

use super::Registry;
use std::rc::Rc;
use tracing::{debug, warn};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::{Binding, BindingSource, Factory, Instance, ResolutionChain, TypeKey};

impl Registry {
    /// Find the binding for `key` at this level, then through the parent
    ///
    /// Local values win over local factories, which win over the parent. The
    /// parent is always asked for the raw binding so that a factory found
    /// there runs here, with this registry's arguments and memo.
    fn find_binding(&self, key: TypeKey) -> Result<Option<Binding>> {
        if let Some(instance) = self.values.borrow().get(&key) {
            return Ok(Some(Binding::Value(Rc::clone(instance))));
        }
        if let Some(factory) = self.factories.borrow().get(&key) {
            return Ok(Some(Binding::Factory(Rc::clone(factory))));
        }

        if !self.has_parent() {
            return Ok(None);
        }
        if self.delegating.get() {
            // Every registry on the loop has already been searched locally
            debug!(key = %key, "parent links loop back, treating key as absent");
            return Ok(None);
        }
        let Some(parent) = self.parent() else {
            debug!(key = %key, "parent registry dropped, treating it as absent");
            return Ok(None);
        };

        self.delegating.set(true);
        let found = parent.lookup(key, false);
        self.delegating.set(false);
        found
    }

    /// Invoke `factory`, resolving its parameters along `chain`
    ///
    /// `chain` ends with the key being produced. Every parameter resolved on
    /// the way is memoized as a local value, so a factory consumed as an
    /// argument runs at most once per registry. Memoization is per parameter:
    /// arguments resolved before a failing one stay cached.
    pub(super) fn resolve_factory(
        &self,
        factory: &Rc<dyn Factory>,
        chain: &ResolutionChain,
    ) -> Result<Instance> {
        if chain.closes_loop() {
            return Err(Error::dependency_loop(chain.clone()));
        }

        let mut args = Vec::with_capacity(factory.parameters().len());
        for &param in factory.parameters() {
            let memoized = self.values.borrow().get(&param).cloned();
            let instance = match memoized {
                Some(instance) => instance,
                None => {
                    let instance = match self.find_binding(param)? {
                        Some(Binding::Value(instance)) => instance,
                        Some(Binding::Factory(inner)) => {
                            self.resolve_factory(&inner, &chain.extended(param))?
                        }
                        None => {
                            return Err(Error::dependency_not_found(
                                param,
                                chain.extended(param),
                                Some(factory.signature()),
                            ));
                        }
                    };
                    debug!(key = %param, "memoizing factory argument");
                    self.memoize(param, Rc::clone(&instance));
                    instance
                }
            };
            args.push(instance);
        }

        debug!(signature = %factory.signature(), "invoking factory");
        factory.produce(&args)
    }

    /// Log a failed resolution when the configuration asks for it
    pub(super) fn report(&self, err: &Error) {
        if self.config.report_failures {
            warn!(error = %err, "resolution failed");
        }
    }
}

impl BindingSource for Registry {
    fn lookup(&self, key: TypeKey, resolve_factories: bool) -> Result<Option<Binding>> {
        let factory = match self.find_binding(key)? {
            Some(Binding::Factory(factory)) if resolve_factories => factory,
            other => return Ok(other),
        };

        let instance = self
            .resolve_factory(&factory, &ResolutionChain::root(key))
            .inspect_err(|err| self.report(err))?;
        if self.config.memoize_resolved {
            debug!(key = %key, "memoizing resolved value");
            self.memoize(key, Rc::clone(&instance));
        }
        Ok(Some(Binding::Value(instance)))
    }
}
