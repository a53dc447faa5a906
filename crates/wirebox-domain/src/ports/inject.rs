//! Struct population port

use super::BindingSource;
use crate::error::Result;

/// A value whose marked fields can be populated from a [`BindingSource`]
///
/// Usually derived with `#[derive(Inject)]` and `#[inject]` on each field to
/// populate. Implementations assign fields in declaration order and stop at
/// the first failure; fields assigned before it keep their new value.
pub trait Inject {
    fn inject(&mut self, source: &dyn BindingSource) -> Result<()>;
}

impl<T: Inject + ?Sized> Inject for Box<T> {
    fn inject(&mut self, source: &dyn BindingSource) -> Result<()> {
        (**self).inject(source)
    }
}

impl<T: Inject + ?Sized> Inject for &mut T {
    fn inject(&mut self, source: &dyn BindingSource) -> Result<()> {
        (**self).inject(source)
    }
}
