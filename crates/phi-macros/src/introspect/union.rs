
use darling::FromField;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{DataEnum, Fields, Variant};

use super::describe_fields;
use crate::attrs::{FieldAttrs, extract_phi_attr_spans};
use crate::context::{FieldScope, MacroContext};

/// An enum has the shape of whichever variant is active.
pub fn generate_union(context: &MacroContext, input: &DataEnum) -> syn::Result<TokenStream> {
    if input.variants.is_empty() {
        return Ok(context.impl_introspect(quote! { match *self {} }));
    }
    let arms = input
        .variants
        .iter()
        .map(|variant| generate_arm(context, variant))
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(context.impl_introspect(quote! {
        match self {
            #(#arms)*
        }
    }))
}

fn generate_arm(context: &MacroContext, variant: &Variant) -> syn::Result<TokenStream> {
    let variant_ident = &variant.ident;
    let shape = context.Shape();
    let introspect = context.Introspect();
    match &variant.fields {
        // A bare tag carries nothing that could be missing.
        Fields::Unit => Ok(quote! {
            Self::#variant_ident => #shape::Scalar { is_default: false },
        }),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field = &fields.unnamed[0];
            let attrs = FieldAttrs::from_field(field).expect("failed to parse field attributes");
            if attrs.required {
                let spans = extract_phi_attr_spans(&field.attrs);
                let span = spans.get("required").copied().unwrap_or_else(|| field.span());
                return Err(syn::Error::new(
                    span,
                    "#[phi(required)] has no effect on a newtype variant; mark the field that holds the enum instead",
                ));
            }
            if attrs.skip {
                Ok(quote! { Self::#variant_ident(_) => #shape::Unsupported, })
            } else {
                Ok(quote! { Self::#variant_ident(inner) => #introspect::shape(inner), })
            }
        }
        Fields::Unnamed(fields) => {
            let described = describe_fields(context, &fields.unnamed, FieldScope::Variant)?;
            let patterns = (0..fields.unnamed.len()).map(|position| {
                if described.iter().any(|f| f.position == position) {
                    let binding = format_ident!("field_{}", position);
                    quote! { #binding }
                } else {
                    quote! { _ }
                }
            });
            let bindings: Vec<_> = described
                .iter()
                .map(|f| format_ident!("field_{}", f.position))
                .collect();
            let descriptors: Vec<_> = described.iter().map(|f| &f.descriptor).collect();
            let body = variant_record(context, &descriptors, &bindings);
            Ok(quote! {
                Self::#variant_ident(#(#patterns),*) => #body
            })
        }
        Fields::Named(fields) => {
            let described = describe_fields(context, &fields.named, FieldScope::Variant)?;
            let members: Vec<_> = described.iter().map(|f| &f.member).collect();
            let bindings: Vec<_> = described
                .iter()
                .map(|f| format_ident!("field_{}", f.position))
                .collect();
            let descriptors: Vec<_> = described.iter().map(|f| &f.descriptor).collect();
            let body = variant_record(context, &descriptors, &bindings);
            Ok(quote! {
                Self::#variant_ident { #(#members: #bindings,)* .. } => #body
            })
        }
    }
}

fn variant_record(
    context: &MacroContext,
    descriptors: &[&TokenStream],
    bindings: &[syn::Ident],
) -> TokenStream {
    let field_descriptor = context.FieldDescriptor();
    let introspect = context.Introspect();
    let shape = context.Shape();
    let record = context.Record();
    quote! {
        {
            const FIELDS: &[#field_descriptor] = &[#(#descriptors,)*];
            #shape::Record(#record::new(
                FIELDS,
                ::std::vec![#(#bindings as &dyn #introspect,)*],
            ))
        }
    }
}
