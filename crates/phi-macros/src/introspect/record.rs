
use darling::FromField;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{DataStruct, Fields};

use super::describe_fields;
use crate::attrs::{FieldAttrs, extract_phi_attr_spans};
use crate::context::{FieldScope, MacroContext};

pub fn generate_record(context: &MacroContext, input: &DataStruct) -> syn::Result<TokenStream> {
    match &input.fields {
        Fields::Named(fields) => generate_fields_struct(context, &fields.named),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            generate_newtype_struct(context, &fields.unnamed[0])
        }
        Fields::Unnamed(fields) => generate_fields_struct(context, &fields.unnamed),
        Fields::Unit => Ok(generate_unit_struct(context)),
    }
}

/// Named structs and tuple structs with more than one field both become
/// records; tuple fields are named by position.
fn generate_fields_struct(
    context: &MacroContext,
    fields: &syn::punctuated::Punctuated<syn::Field, syn::token::Comma>,
) -> syn::Result<TokenStream> {
    let fields = describe_fields(context, fields, FieldScope::Struct)?;
    let introspect = context.Introspect();
    let described = context.Described();
    let shape = context.Shape();
    let record = context.Record();

    let descriptors: Vec<_> = fields.iter().map(|f| f.descriptor.clone()).collect();
    let members: Vec<_> = fields.iter().map(|f| &f.member).collect();

    let described_impl = context.impl_described(&descriptors);
    let introspect_impl = context.impl_introspect(quote! {
        #shape::Record(#record::new(
            <Self as #described>::FIELDS,
            ::std::vec![#(&self.#members as &dyn #introspect,)*],
        ))
    });

    Ok(quote! {
        #described_impl
        #introspect_impl
    })
}

/// A newtype is transparent: it has the shape of the value it wraps.
fn generate_newtype_struct(context: &MacroContext, field: &syn::Field) -> syn::Result<TokenStream> {
    let attrs = FieldAttrs::from_field(field).expect("failed to parse field attributes");
    if attrs.required {
        let spans = extract_phi_attr_spans(&field.attrs);
        let span = spans.get("required").copied().unwrap_or_else(|| field.span());
        return Err(syn::Error::new(
            span,
            "#[phi(required)] has no effect on a newtype struct; mark the field that holds it instead",
        ));
    }
    let shape = context.Shape();
    let introspect = context.Introspect();
    let body = if attrs.skip {
        quote! { #shape::Unsupported }
    } else {
        quote! { #introspect::shape(&self.0) }
    };
    Ok(context.impl_introspect(body))
}

fn generate_unit_struct(context: &MacroContext) -> TokenStream {
    let shape = context.Shape();
    context.impl_introspect(quote! {
        #shape::Scalar { is_default: true }
    })
}
