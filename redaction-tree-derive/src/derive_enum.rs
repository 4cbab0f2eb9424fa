//! Enum-specific `Inspect` derivation.
//!
//! Unit variants report their name as a scalar. Data-carrying variants report
//! their fields the way a struct of the same form would.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, DataEnum, Fields, Generics, Result};

use crate::{
    crate_path, fields::FieldSet, generics::FieldBounds, strategy::parse_variant_rename,
};

pub(crate) fn derive_enum(
    data: &DataEnum,
    generics: &Generics,
    bounds: &mut FieldBounds,
) -> Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let shape_path = crate_path("Shape");
    let mut arms = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let rename = parse_variant_rename(&variant.attrs)?;

        if matches!(variant.fields, Fields::Unit) {
            let name = rename.map_or_else(|| variant_ident.unraw().to_string(), |name| name.value());
            arms.push(quote! {
                Self::#variant_ident => #shape_path::borrowed(#name),
            });
            continue;
        }

        if let Some(rename) = rename {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` is only supported on unit variants",
            ));
        }

        let fields = FieldSet::collect(&variant.fields, generics, bounds)?;
        let pattern = fields.pattern();
        let shape = fields.shape();
        arms.push(quote! {
            Self::#variant_ident #pattern => #shape,
        });
    }

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}
