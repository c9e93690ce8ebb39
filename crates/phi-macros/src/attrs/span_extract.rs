use proc_macro2::Span;
use std::collections::HashMap;
use syn::Attribute;
use syn::spanned::Spanned;

/// Extracts spans of individual attribute keys from `#[phi(...)]` attributes,
/// so errors can point at `required` or `skip` instead of the derive.
pub fn extract_phi_attr_spans(attrs: &[Attribute]) -> HashMap<String, Span> {
    let mut spans = HashMap::new();

    for attr in attrs {
        if !attr.path().is_ident("phi") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                spans.insert(ident.to_string(), meta.path.span());
            }
            if meta.input.peek(syn::Token![=]) {
                let _: syn::Token![=] = meta.input.parse()?;
                let _: syn::Expr = meta.input.parse()?;
            }
            Ok(())
        });
    }

    spans
}
