use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{ConstParam, DeriveInput, GenericParam, Generics, Ident, LifetimeParam, TypeParam};

use crate::attrs::{FieldAttrs, serde_field_rename};
use crate::config::MacroConfig;

pub struct MacroContext {
    pub config: MacroConfig,
    pub input: DeriveInput,
}

/// Which container rule renames a field.
#[derive(Clone, Copy)]
pub enum FieldScope {
    /// A field of the struct itself (`rename_all`).
    Struct,
    /// A field of an enum variant (`rename_all_fields`).
    Variant,
}

impl MacroContext {
    pub fn new(config: MacroConfig, input: DeriveInput) -> Self {
        Self { config, input }
    }

    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    pub fn generics(&self) -> &Generics {
        &self.input.generics
    }

    /// Returns generics for the impl<...>, in declaration order, with every
    /// type parameter bound by `Introspect`.
    pub fn impl_generics(&self) -> Vec<TokenStream> {
        let introspect = self.Introspect();
        self.generics()
            .params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime(LifetimeParam {
                    lifetime,
                    colon_token,
                    bounds,
                    ..
                }) => quote! { #lifetime #colon_token #bounds },
                GenericParam::Const(ConstParam {
                    const_token,
                    ident,
                    colon_token,
                    ty,
                    ..
                }) => quote! { #const_token #ident #colon_token #ty },
                GenericParam::Type(TypeParam {
                    ident,
                    colon_token,
                    bounds,
                    ..
                }) => {
                    if bounds.is_empty() {
                        quote! { #ident: #introspect }
                    } else {
                        quote! { #ident #colon_token #bounds + #introspect }
                    }
                }
            })
            .collect()
    }

    /// Returns generics for the for #ident<...>, in declaration order
    pub fn for_generics(&self) -> Vec<TokenStream> {
        self.generics()
            .params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime(LifetimeParam { lifetime, .. }) => {
                    lifetime.to_token_stream()
                }
                GenericParam::Const(ConstParam { ident, .. }) => ident.to_token_stream(),
                GenericParam::Type(TypeParam { ident, .. }) => ident.to_token_stream(),
            })
            .collect()
    }

    #[allow(non_snake_case)]
    pub fn Introspect(&self) -> TokenStream {
        let phi_crate = &self.config.phi_crate;
        quote!(#phi_crate::Introspect)
    }

    #[allow(non_snake_case)]
    pub fn Described(&self) -> TokenStream {
        let phi_crate = &self.config.phi_crate;
        quote!(#phi_crate::Described)
    }

    #[allow(non_snake_case)]
    pub fn FieldDescriptor(&self) -> TokenStream {
        let phi_crate = &self.config.phi_crate;
        quote!(#phi_crate::FieldDescriptor)
    }

    #[allow(non_snake_case)]
    pub fn Shape(&self) -> TokenStream {
        let phi_crate = &self.config.phi_crate;
        quote!(#phi_crate::Shape)
    }

    #[allow(non_snake_case)]
    pub fn Record(&self) -> TokenStream {
        let phi_crate = &self.config.phi_crate;
        quote!(#phi_crate::Record)
    }

    /// Resolves the external name of a field.
    ///
    /// `#[phi(rename)]`, then `#[serde(rename)]`, then the container rule for
    /// `scope`, then the identifier itself.
    pub fn field_name(
        &self,
        field: &syn::Field,
        attrs: &FieldAttrs,
        position: usize,
        scope: FieldScope,
    ) -> String {
        if let Some(rename) = &attrs.rename {
            return rename.clone();
        }
        if let Some(rename) = serde_field_rename(&field.attrs) {
            return rename;
        }
        let Some(ident) = &field.ident else {
            return position.to_string();
        };
        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);
        let rule = match scope {
            FieldScope::Struct => self.config.rename_all,
            FieldScope::Variant => self.config.rename_all_fields,
        };
        match rule {
            Some(rule) => rule.apply(name),
            None => name.to_string(),
        }
    }

    /// Wraps `body` in `impl Trait for Type`, adding `Introspect` bounds to
    /// type parameters.
    pub fn impl_trait(&self, trait_path: TokenStream, body: TokenStream) -> TokenStream {
        let ident = self.ident();
        if self.generics().params.is_empty() {
            return quote! {
                impl #trait_path for #ident {
                    #body
                }
            };
        }
        let impl_generics = self.impl_generics();
        let for_generics = self.for_generics();
        let where_clause = &self.generics().where_clause;
        quote! {
            impl<#(#impl_generics),*> #trait_path for #ident<#(#for_generics),*> #where_clause {
                #body
            }
        }
    }

    pub fn impl_introspect(&self, shape_body: TokenStream) -> TokenStream {
        let shape = self.Shape();
        self.impl_trait(
            self.Introspect(),
            quote! {
                fn shape(&self) -> #shape<'_> {
                    #shape_body
                }
            },
        )
    }

    pub fn impl_described(&self, descriptors: &[TokenStream]) -> TokenStream {
        let field_descriptor = self.FieldDescriptor();
        self.impl_trait(
            self.Described(),
            quote! {
                const FIELDS: &'static [#field_descriptor] = &[#(#descriptors,)*];
            },
        )
    }
}
