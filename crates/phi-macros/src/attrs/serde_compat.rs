//! Reads the naming half of `#[serde(...)]` attributes.
//!
//! Paths in violation reports use the same names the payload uses on the
//! wire, so a field renamed for serde is reported under its serde name unless
//! `#[phi(rename = "...")]` says otherwise. Every other serde key is skipped.

use proc_macro2::{Span, TokenTree};
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, LitStr, Token};

use super::RenameAll;

/// Container-level serde naming rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeContainerAttrs {
    pub rename_all: Option<RenameAll>,
    pub rename_all_fields: Option<RenameAll>,
}

impl SerdeContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Self {
        Self {
            rename_all: serde_name(attrs, "rename_all").and_then(|v| RenameAll::parse(&v)),
            rename_all_fields: serde_name(attrs, "rename_all_fields")
                .and_then(|v| RenameAll::parse(&v)),
        }
    }
}

/// `#[serde(rename = "...")]` on a field, or the `deserialize` half of
/// `#[serde(rename(deserialize = "..."))]`.
pub fn serde_field_rename(attrs: &[Attribute]) -> Option<String> {
    serde_name(attrs, "rename")
}

/// Span of `flatten` if the field carries `#[serde(flatten)]`.
pub fn serde_flatten(attrs: &[Attribute]) -> Option<Span> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("flatten") {
                found = Some(meta.path.span());
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        });
    }
    found
}

fn serde_name(attrs: &[Attribute], key: &str) -> Option<String> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        // Malformed serde attributes are serde_derive's to report.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                if let Some(name) = deserialize_name(&meta)? {
                    found = Some(name);
                }
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        });
    }
    found
}

fn deserialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let lit: LitStr = meta.value()?.parse()?;
        return Ok(Some(lit.value()));
    }
    let mut name = None;
    if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| {
            let lit: LitStr = inner.value()?.parse()?;
            if inner.path.is_ident("deserialize") {
                name = Some(lit.value());
            }
            Ok(())
        })?;
    }
    Ok(name)
}

fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let _: TokenTree = meta.input.parse()?;
    }
    Ok(())
}
