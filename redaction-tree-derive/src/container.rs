//! Container-level attribute parsing for `#[derive(Inspect)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use syn::{Attribute, Meta, Result};

/// Options parsed from container-level `#[inspect(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Report the whole value as a scalar through its `Display` impl.
    pub(crate) display: bool,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("display") {
                        if options.display {
                            return Err(meta.error("duplicate container option `display`"));
                        }
                        options.display = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `display`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected container options, e.g. #[inspect(display)]",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[inspect]",
                ));
            }
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_defaults() {
        let attrs = parse_attrs(quote! {});
        let options = parse_container_options(&attrs).unwrap();
        assert!(!options.display);
    }

    #[test]
    fn display_is_parsed() {
        let attrs = parse_attrs(quote! { #[inspect(display)] });
        let options = parse_container_options(&attrs).unwrap();
        assert!(options.display);
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[inspect(transparent)] });
        let error = parse_container_options(&attrs).unwrap_err();
        assert!(error.to_string().contains("unknown container option"));
    }

    #[test]
    fn duplicate_display_errors() {
        let attrs = parse_attrs(quote! {
            #[inspect(display)]
            #[inspect(display)]
        });
        let error = parse_container_options(&attrs).unwrap_err();
        assert!(error.to_string().contains("duplicate container option"));
    }

    #[test]
    fn bare_inspect_errors() {
        let attrs = parse_attrs(quote! { #[inspect] });
        assert!(parse_container_options(&attrs).is_err());
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(rename_all = "camelCase")]
        });
        assert!(!parse_container_options(&attrs).unwrap().display);
    }
}
