//! Struct-specific `Inspect` derivation.
//!
//! - named structs report a composite of their fields
//! - a tuple struct with one field reports the shape of that field
//! - other tuple structs report a composite keyed by position
//! - unit structs report an empty composite

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Fields, Generics, Result};

use crate::{fields::FieldSet, generics::FieldBounds};

pub(crate) fn derive_struct(
    data: &DataStruct,
    generics: &Generics,
    bounds: &mut FieldBounds,
) -> Result<TokenStream> {
    let fields = FieldSet::collect(&data.fields, generics, bounds)?;
    if matches!(data.fields, Fields::Unit) {
        return Ok(fields.shape());
    }
    let pattern = fields.pattern();
    let shape = fields.shape();
    Ok(quote! {
        let Self #pattern = self;
        #shape
    })
}
