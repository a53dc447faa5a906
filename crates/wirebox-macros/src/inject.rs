//! `#[derive(Inject)]` expansion.
//!
//! Generated code names items through `::wirebox`, so the derive is meant to
//! be used through the facade crate.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Index, Member, Meta, parse_macro_input, parse_quote};
use wirebox_domain::constants::INJECT_ATTRIBUTE;

/// Main entry point for the Inject derive macro.
pub fn derive_inject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_inject_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_inject_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let targets = match &input.data {
        Data::Struct(data) => marked_fields(&data.fields)?,
        // Nothing to populate
        Data::Enum(_) | Data::Union(_) => Vec::new(),
    };

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for (_, ty) in &targets {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::core::clone::Clone + 'static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let assignments = targets.iter().map(|(member, ty)| {
        quote! {
            self.#member = ::wirebox::resolve_as::<#ty>(source)?;
        }
    });

    Ok(quote! {
        impl #impl_generics ::wirebox::Inject for #name #ty_generics #where_clause {
            fn inject(
                &mut self,
                source: &dyn ::wirebox::BindingSource,
            ) -> ::wirebox::Result<()> {
                let _ = &source;
                #(#assignments)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Collect the `#[inject]` fields as (member, type) pairs, in declaration order.
fn marked_fields(fields: &Fields) -> syn::Result<Vec<(Member, &syn::Type)>> {
    let mut targets = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if !is_marked(field)? {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        targets.push((member, &field.ty));
    }
    Ok(targets)
}

/// Whether `field` carries a bare `#[inject]`.
fn is_marked(field: &Field) -> syn::Result<bool> {
    let mut marked = false;
    for attr in &field.attrs {
        if !attr.path().is_ident(INJECT_ATTRIBUTE) {
            continue;
        }
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(
                attr,
                "#[inject] takes no arguments",
            ));
        }
        if marked {
            return Err(syn::Error::new_spanned(attr, "duplicate #[inject] attribute"));
        }
        marked = true;
    }
    Ok(marked)
}
