//! Parsing of `#[inspect(...)]` field and variant attributes.
//!
//! This module maps attribute syntax to the shape each field reports and
//! produces structured errors for invalid forms.

use proc_macro2::Span;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Attribute, LitStr, Meta, Result};

/// How a field is reported.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Inspect` | Field reports its own shape via `Inspect` |
/// | `#[inspect(display)]` | `Display` | Field is a scalar via `Display` |
/// | `#[inspect(skip)]` | `Skip` | Field is never reported |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Inspect,
    Display,
    Skip,
}

/// Options parsed from a field's `#[inspect(...)]` attributes.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    /// Name reported instead of the field name.
    pub(crate) rename: Option<LitStr>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Inspect,
            rename: None,
        }
    }
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    match target {
        Some(current) if *current == next => Err(syn::Error::new(
            span,
            "duplicate #[inspect] option on the same field",
        )),
        Some(_) => Err(syn::Error::new(
            span,
            "`skip` and `display` cannot be combined on the same field",
        )),
        None => {
            *target = Some(next);
            Ok(())
        }
    }
}

fn parse_rename(meta: &ParseNestedMeta<'_>, target: &mut Option<LitStr>) -> Result<()> {
    if target.is_some() {
        return Err(meta.error("duplicate `rename` option"));
    }
    let name: LitStr = meta.value()?.parse()?;
    if name.value().is_empty() {
        return Err(syn::Error::new(name.span(), "`rename` must not be empty"));
    }
    *target = Some(name);
    Ok(())
}

fn unknown_option(meta: &ParseNestedMeta<'_>, expected: &str) -> syn::Error {
    meta.error(format!(
        "unknown #[inspect] option `{}`; expected {expected}",
        meta.path
            .get_ident()
            .map_or_else(|| "?".to_string(), ToString::to_string)
    ))
}

/// Walks every `#[inspect(...)]` list in `attrs`.
fn for_each_option<F>(attrs: &[Attribute], mut f: F) -> Result<()>
where
    F: FnMut(ParseNestedMeta<'_>) -> Result<()>,
{
    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        match &attr.meta {
            Meta::List(list) => list.parse_nested_meta(&mut f)?,
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected options, e.g. #[inspect(skip)]",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for #[inspect]",
                ));
            }
        }
    }
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut strategy = None;
    let mut rename = None;

    for_each_option(attrs, |meta| {
        if meta.path.is_ident("skip") {
            set_strategy(&mut strategy, Strategy::Skip, meta.path.span())
        } else if meta.path.is_ident("display") {
            set_strategy(&mut strategy, Strategy::Display, meta.path.span())
        } else if meta.path.is_ident("rename") {
            parse_rename(&meta, &mut rename)
        } else {
            Err(unknown_option(&meta, "`skip`, `display` or `rename`"))
        }
    })?;

    Ok(FieldOptions {
        strategy: strategy.unwrap_or(Strategy::Inspect),
        rename,
    })
}

/// Variants only accept `rename`.
pub(crate) fn parse_variant_rename(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut rename = None;
    for_each_option(attrs, |meta| {
        if meta.path.is_ident("rename") {
            parse_rename(&meta, &mut rename)
        } else {
            Err(unknown_option(&meta, "`rename` on a variant"))
        }
    })?;
    Ok(rename)
}
