//! Derive macro for `redaction-tree`.
//!
//! This crate generates the `Inspect` implementations behind
//! `#[derive(Inspect)]`. It:
//! - reads `#[inspect(...)]` container, field and variant attributes
//! - emits a `shape` method that hands borrowed fields to the redactor
//!
//! It does **not** decide what is redacted. Exclusion and depth limits live in
//! the main `redaction-tree` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod fields;
mod generics;
mod strategy;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_bounds, FieldBounds};

/// Derives `redaction_tree::Inspect` for structs and enums.
///
/// # Container Attributes
///
/// - `#[inspect(display)]`: report the whole value as a scalar through its
///   `Display` impl. Use this for value types whose string form is meaningful,
///   such as identifiers or amounts. Fields are not inspected.
///
/// # Field Attributes
///
/// - **No annotation**: the field reports its own shape. Its type must
///   implement `Inspect`.
/// - `#[inspect(display)]`: the field is a scalar rendered through `Display`.
///   Use this for external types such as timestamps or decimals.
/// - `#[inspect(skip)]`: the field is never reported.
/// - `#[inspect(rename = "name")]`: report the field under another name. The
///   new name is the one exclusion patterns are matched against.
///
/// # Variants
///
/// Unit variants report their name (or `#[inspect(rename = "...")]`) as a
/// scalar. A variant with a single unnamed field reports the shape of that
/// field. Other variants report their fields as a composite.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the `redaction-tree` crate root.
///
/// Handles crate renaming (e.g., `logs = { package = "redaction-tree", ... }`).
/// Inside `redaction-tree` itself the crate is reachable as `::redaction_tree`
/// through its `extern crate self` alias, which also holds for its tests.
fn crate_root() -> TokenStream {
    match crate_name("redaction-tree") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::redaction_tree },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { display } = parse_container_options(&attrs)?;
    let mut bounds = FieldBounds::default();

    let body = match &data {
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Inspect` cannot be derived for unions",
            ));
        }
        _ if display => {
            let shape_path = crate_path("Shape");
            quote! { #shape_path::scalar(self) }
        }
        Data::Struct(data) => derive_struct(data, &generics, &mut bounds)?,
        Data::Enum(data) => derive_enum(data, &generics, &mut bounds)?,
    };

    let mut generics = add_bounds(generics, &bounds);
    if display {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: ::core::fmt::Display));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let inspect_path = crate_path("Inspect");
    let shape_path = crate_path("Shape");

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #inspect_path for #ident #ty_generics #where_clause {
            fn shape(&self) -> #shape_path<'_> {
                #body
            }
        }
    })
}
