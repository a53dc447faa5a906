//! Factory port and typed closure adapters
//!
//! Rust has no reflection-based dynamic call, so factories are described by
//! an explicit [`Factory`] contract: the declared parameter keys, the output
//! key and an erased call. Plain closures of up to eight arguments are
//! adapted automatically through [`IntoFactory`].

use crate::error::{Error, Result};
use crate::value_objects::{Instance, TypeKey, read_instance};
use std::rc::Rc;

/// A value-producing callable whose parameters are resolved from a registry
pub trait Factory {
    /// Key of the produced value
    fn output(&self) -> TypeKey;

    /// Keys of the declared parameters, in call order
    fn parameters(&self) -> &[TypeKey];

    /// Invoke the factory with arguments resolved for [`Factory::parameters`]
    fn produce(&self, args: &[Instance]) -> Result<Instance>;

    /// Human-readable signature used in diagnostics
    fn signature(&self) -> String {
        let params: Vec<&str> = self.parameters().iter().map(TypeKey::name).collect();
        format!("fn({}) -> {}", params.join(", "), self.output())
    }
}

type ProduceFn = Box<dyn Fn(&[Instance]) -> Result<Instance>>;

/// [`Factory`] backed by an erased closure
pub struct FnFactory {
    output: TypeKey,
    parameters: Vec<TypeKey>,
    produce: ProduceFn,
}

impl FnFactory {
    /// Build a factory from explicit keys and an erased producer
    ///
    /// The producer receives one instance per entry of `parameters`, in order.
    pub fn new<F>(output: TypeKey, parameters: Vec<TypeKey>, produce: F) -> Self
    where
        F: Fn(&[Instance]) -> Result<Instance> + 'static,
    {
        Self {
            output,
            parameters,
            produce: Box::new(produce),
        }
    }
}

impl Factory for FnFactory {
    fn output(&self) -> TypeKey {
        self.output
    }

    fn parameters(&self) -> &[TypeKey] {
        &self.parameters
    }

    fn produce(&self, args: &[Instance]) -> Result<Instance> {
        if args.len() != self.parameters.len() {
            return Err(Error::internal(format!(
                "factory '{}' called with {} arguments",
                self.signature(),
                args.len()
            )));
        }
        (self.produce)(args)
    }
}

impl std::fmt::Debug for FnFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFactory")
            .field("signature", &self.signature())
            .finish_non_exhaustive()
    }
}

/// Conversion of a typed closure into a [`Factory`]
///
/// `Args` is the tuple of parameter types; it only exists to keep the
/// per-arity implementations apart and is inferred at the call site.
pub trait IntoFactory<Args> {
    fn into_factory(self) -> FnFactory;
}

/// Conversion of a typed callable into an injectable invocation
pub trait Injectable<Args> {
    /// Return type of the callable
    type Output;

    /// Keys of the declared parameters, in call order
    fn parameters(&self) -> Vec<TypeKey>;

    /// Call with arguments resolved for [`Injectable::parameters`]
    fn call_with(self, args: &[Instance]) -> Result<Self::Output>;
}

pub(crate) fn next_argument<T: Clone + 'static>(
    args: &mut std::slice::Iter<'_, Instance>,
) -> Result<T> {
    let key = TypeKey::of::<T>();
    let instance = args
        .next()
        .ok_or_else(|| Error::internal(format!("missing argument of type {key}")))?;
    read_instance(instance, key)
}

macro_rules! impl_adapters {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> IntoFactory<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out + 'static,
            Out: 'static,
            $($arg: Clone + 'static,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_factory(self) -> FnFactory {
                FnFactory::new(
                    TypeKey::of::<Out>(),
                    vec![$(TypeKey::of::<$arg>()),*],
                    move |args: &[Instance]| {
                        let mut args = args.iter();
                        $(let $arg = next_argument::<$arg>(&mut args)?;)*
                        Ok(Rc::new(self($($arg),*)) as Instance)
                    },
                )
            }
        }

        impl<Func, Out, $($arg,)*> Injectable<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Out,
            $($arg: Clone + 'static,)*
        {
            type Output = Out;

            fn parameters(&self) -> Vec<TypeKey> {
                vec![$(TypeKey::of::<$arg>()),*]
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn call_with(self, args: &[Instance]) -> Result<Out> {
                let mut args = args.iter();
                $(let $arg = next_argument::<$arg>(&mut args)?;)*
                Ok(self($($arg),*))
            }
        }
    };
}

impl_adapters!();
impl_adapters!(A1);
impl_adapters!(A1, A2);
impl_adapters!(A1, A2, A3);
impl_adapters!(A1, A2, A3, A4);
impl_adapters!(A1, A2, A3, A4, A5);
impl_adapters!(A1, A2, A3, A4, A5, A6);
impl_adapters!(A1, A2, A3, A4, A5, A6, A7);
impl_adapters!(A1, A2, A3, A4, A5, A6, A7, A8);
