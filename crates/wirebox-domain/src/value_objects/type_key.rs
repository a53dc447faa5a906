//! Runtime type identity used as the registry key

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Canonical key denoting a runtime type
///
/// Two keys are equal iff they were built from the same type. The type name
/// is carried for diagnostics only and never takes part in comparisons.
///
/// # Example
///
/// ```
/// use wirebox_domain::value_objects::TypeKey;
///
/// trait Greeter {}
///
/// let key = TypeKey::of::<u64>();
/// assert_eq!(key.name(), "u64");
///
/// // Interface markers key on the shared trait object
/// let iface = TypeKey::interface::<dyn Greeter>();
/// assert_eq!(iface, TypeKey::of::<std::sync::Arc<dyn Greeter>>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Key for an interface marker
    ///
    /// `I` names a trait object type (`dyn Trait`); the resulting key is the
    /// one of `Arc<I>`, the form in which interface values are stored and
    /// requested. Only sizedness is checked, so `str` and slices pass as well.
    ///
    /// # Panics
    ///
    /// Panics when `I` is a sized type. Passing a concrete type where an
    /// interface is expected is a programming error.
    pub fn interface<I: ?Sized + 'static>() -> Self {
        assert!(
            Self::is_interface_marker::<I>(),
            "TypeKey::interface called with `{}`, which is a sized type. Use `dyn MyInterface`.",
            std::any::type_name::<I>()
        );
        Self::of::<Arc<I>>()
    }

    /// Whether `I` is unsized
    ///
    /// True for trait objects, and also for `str` and `[T]`: the check looks
    /// at pointer width only.
    pub fn is_interface_marker<I: ?Sized + 'static>() -> bool {
        std::mem::size_of::<*const I>() != std::mem::size_of::<*const ()>()
    }

    /// Underlying [`TypeId`]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this key denotes `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
