//! Field collection shared by struct and enum expansion.
//!
//! Each field becomes a [`FieldBinding`]: the local it is bound to in a
//! destructuring pattern, the name it is reported under, and its strategy.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, Fields, Generics, Result};

use crate::{
    crate_path,
    generics::FieldBounds,
    strategy::{parse_field_options, Strategy},
};

pub(crate) struct FieldBinding {
    binding: Ident,
    name: String,
    renamed: bool,
    strategy: Strategy,
    span: proc_macro2::Span,
}

/// The fields of a struct or variant, in declaration order.
pub(crate) struct FieldSet {
    fields: Vec<FieldBinding>,
    style: Style,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Named,
    Unnamed,
    Unit,
}

impl FieldSet {
    pub(crate) fn collect(
        fields: &Fields,
        generics: &Generics,
        bounds: &mut FieldBounds,
    ) -> Result<Self> {
        let style = match fields {
            Fields::Named(_) => Style::Named,
            Fields::Unnamed(_) => Style::Unnamed,
            Fields::Unit => Style::Unit,
        };

        let mut bindings = Vec::new();
        for (index, field) in fields.iter().enumerate() {
            let options = parse_field_options(&field.attrs)?;
            let (binding, default_name) = match &field.ident {
                Some(ident) => (ident.clone(), ident.unraw().to_string()),
                None => (format_ident!("field_{}", index), index.to_string()),
            };

            match options.strategy {
                Strategy::Inspect => bounds.require_inspect(&field.ty, generics),
                Strategy::Display => bounds.require_display(&field.ty, generics),
                Strategy::Skip => {}
            }

            bindings.push(FieldBinding {
                binding,
                renamed: options.rename.is_some(),
                name: options.rename.map_or(default_name, |name| name.value()),
                strategy: options.strategy,
                span: field.span(),
            });
        }

        Ok(Self {
            fields: bindings,
            style,
        })
    }

    /// The destructuring pattern following a struct or variant path.
    pub(crate) fn pattern(&self) -> TokenStream {
        match self.style {
            Style::Named => {
                let bound = self
                    .fields
                    .iter()
                    .filter(|field| field.strategy != Strategy::Skip)
                    .map(|field| &field.binding);
                quote! { { #(#bound,)* .. } }
            }
            Style::Unnamed => {
                let bound = self.fields.iter().map(|field| {
                    if field.strategy == Strategy::Skip {
                        quote! { _ }
                    } else {
                        let binding = &field.binding;
                        quote! { #binding }
                    }
                });
                quote! { ( #(#bound),* ) }
            }
            Style::Unit => quote! {},
        }
    }

    /// A single unrenamed tuple field reports the shape of its content.
    fn is_transparent(&self) -> bool {
        self.style == Style::Unnamed && self.fields.len() == 1 && !self.fields[0].renamed
    }

    /// The shape expression, with the bindings of [`FieldSet::pattern`] in scope.
    pub(crate) fn shape(&self) -> TokenStream {
        let shape_path = crate_path("Shape");
        let field_path = crate_path("Field");
        let inspect_path = crate_path("Inspect");

        if self.is_transparent() {
            let field = &self.fields[0];
            let binding = &field.binding;
            return match field.strategy {
                Strategy::Inspect => quote_spanned! { field.span =>
                    #inspect_path::shape(#binding)
                },
                Strategy::Display => quote_spanned! { field.span =>
                    #shape_path::scalar(#binding)
                },
                Strategy::Skip => quote! { #shape_path::Absent },
            };
        }

        let entries = self
            .fields
            .iter()
            .filter(|field| field.strategy != Strategy::Skip)
            .map(|field| {
                let FieldBinding {
                    binding,
                    name,
                    span,
                    ..
                } = field;
                if field.strategy == Strategy::Display {
                    quote_spanned! { *span => #field_path::display(#name, #binding) }
                } else {
                    quote_spanned! { *span => #field_path::inspect(#name, #binding) }
                }
            });
        quote! { #shape_path::Composite(::std::vec![#(#entries),*]) }
    }
}
