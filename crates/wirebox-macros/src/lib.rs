//! Procedural macros for wirebox.
//!
//! * `#[derive(Inject)]` - populates `#[inject]` fields from a registry

use proc_macro::TokenStream;

/// Inject derive macro implementation.
mod inject;

/// Derives `wirebox::Inject`.
///
/// Every field marked `#[inject]` is assigned from the binding source, in
/// declaration order; unmarked fields are left untouched. Marked field types
/// must be `Clone + 'static`. Deriving on an enum or union produces an
/// implementation that does nothing.
///
/// ```ignore
/// #[derive(Default, Inject)]
/// struct Handler {
///     #[inject]
///     greeter: Arc<dyn Greeter>,
///     #[inject]
///     name: String,
///     hits: u32,
/// }
///
/// registry.apply(&mut handler)?;
/// ```
#[proc_macro_derive(Inject, attributes(inject))]
pub fn derive_inject(input: TokenStream) -> TokenStream {
    inject::derive_inject(input)
}
