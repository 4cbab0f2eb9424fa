//! Generic type parameter handling and trait bound management.
//!
//! Bounds go on field types rather than on bare parameters: an inspected field
//! of type `BTreeMap<K, V>` adds `BTreeMap<K, V>: Inspect`, which carries the
//! `K: Display` requirement of the map impl instead of a useless `K: Inspect`.
//! A `display` field adds `FieldTy: Display`. Skipped fields add nothing, and
//! neither do field types that mention no type parameter.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics, so a marker parameter
//! never needs to implement anything:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T is not required to implement Inspect
//! }
//! ```

use syn::{parse_quote, GenericArgument, Generics, Ident, PathArguments, Type};

use crate::crate_path;

/// Generic field types of reported fields, by required bound.
#[derive(Default)]
pub(crate) struct FieldBounds {
    inspect: Vec<Type>,
    display: Vec<Type>,
}

impl FieldBounds {
    pub(crate) fn require_inspect(&mut self, ty: &Type, generics: &Generics) {
        push_type(ty, generics, &mut self.inspect);
    }

    pub(crate) fn require_display(&mut self, ty: &Type, generics: &Generics) {
        push_type(ty, generics, &mut self.display);
    }
}

fn push_type(ty: &Type, generics: &Generics, result: &mut Vec<Type>) {
    let mut params = Vec::new();
    collect_generics_from_type(ty, generics, &mut params);
    if !params.is_empty() && !result.contains(ty) {
        result.push(ty.clone());
    }
}

fn collect_generics_from_type(ty: &Type, generics: &Generics, result: &mut Vec<Ident>) {
    match ty {
        Type::Path(path) => {
            if path.qself.is_none() && path.path.segments.len() == 1 {
                push_param(&path.path.segments[0].ident, generics, result);
            }
            if let Some(segment) = path.path.segments.last() {
                if segment.ident == "PhantomData" {
                    return;
                }
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let GenericArgument::Type(inner) = arg {
                            collect_generics_from_type(inner, generics, result);
                        }
                    }
                }
            }
        }
        Type::Reference(reference) => collect_generics_from_type(&reference.elem, generics, result),
        Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

fn push_param(ident: &Ident, generics: &Generics, result: &mut Vec<Ident>) {
    let is_param = generics.type_params().any(|param| &param.ident == ident);
    if is_param && !result.iter().any(|g| g == ident) {
        result.push(ident.clone());
    }
}

/// Adds a `where` predicate for every field type in `bounds`.
pub(crate) fn add_bounds(mut generics: Generics, bounds: &FieldBounds) -> Generics {
    if bounds.inspect.is_empty() && bounds.display.is_empty() {
        return generics;
    }
    let inspect_path = crate_path("Inspect");
    let where_clause = generics.make_where_clause();
    for ty in &bounds.inspect {
        where_clause
            .predicates
            .push(parse_quote!(#ty: #inspect_path));
    }
    for ty in &bounds.display {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::core::fmt::Display));
    }
    generics
}
