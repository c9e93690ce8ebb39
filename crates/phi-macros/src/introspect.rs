//! Introspect derive macro implementation

mod record;
mod union;

use darling::FromField;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, Index, Member};

use crate::attrs::{FieldAttrs, extract_phi_attr_spans, serde_flatten};
use crate::context::{FieldScope, MacroContext};

pub fn derive(context: MacroContext) -> TokenStream {
    derive_inner(&context).unwrap_or_else(syn::Error::into_compile_error)
}

fn derive_inner(context: &MacroContext) -> syn::Result<TokenStream> {
    match &context.input.data {
        Data::Struct(data) => record::generate_record(context, data),
        Data::Enum(data) => union::generate_union(context, data),
        Data::Union(_) => Ok(quote! { compile_error!("Union is not supported for Introspect") }),
    }
}

/// A field that takes part in validation.
struct DescribedField {
    /// `FieldDescriptor::new("name", required)`, plus `.flattened()` under
    /// `#[serde(flatten)]`
    descriptor: TokenStream,
    /// Position of the field in its declaration (used for tuple patterns).
    position: usize,
    member: Member,
}

/// Reads the attributes of every field, dropping `#[phi(skip)]` ones.
fn describe_fields<'f>(
    context: &MacroContext,
    fields: impl IntoIterator<Item = &'f syn::Field>,
    scope: FieldScope,
) -> syn::Result<Vec<DescribedField>> {
    let field_descriptor = context.FieldDescriptor();
    let mut described = Vec::new();
    for (position, f) in fields.into_iter().enumerate() {
        let attrs = FieldAttrs::from_field(f).expect("failed to parse field attributes");
        if attrs.skip {
            if attrs.required {
                let spans = extract_phi_attr_spans(&f.attrs);
                let span = spans.get("required").copied().unwrap_or_else(|| f.span());
                return Err(syn::Error::new(
                    span,
                    "cannot use both #[phi(required)] and #[phi(skip)] on the same field",
                ));
            }
            continue;
        }
        let name = context.field_name(f, &attrs, position, scope);
        let required = attrs.required;
        let flatten = serde_flatten(&f.attrs);
        if required && let Some(span) = flatten {
            return Err(syn::Error::new(
                span,
                "#[phi(required)] cannot be used on a #[serde(flatten)] field; mark the fields of the flattened type instead",
            ));
        }
        let member = match &f.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(position)),
        };
        described.push(DescribedField {
            descriptor: match flatten {
                Some(_) => quote! { #field_descriptor::new(#name, #required).flattened() },
                None => quote! { #field_descriptor::new(#name, #required) },
            },
            position,
            member,
        });
    }
    Ok(described)
}
