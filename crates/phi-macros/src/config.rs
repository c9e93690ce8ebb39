use proc_macro2::TokenStream;
use quote::quote;

use crate::attrs::{ContainerAttrs, RenameAll, SerdeContainerAttrs};

pub struct MacroConfig {
    pub phi_crate: TokenStream,
    pub rename_all: Option<RenameAll>,
    pub rename_all_fields: Option<RenameAll>,
}

impl MacroConfig {
    /// `#[phi(...)]` wins over the equivalent `#[serde(...)]` rule.
    pub fn from_attrs(attrs: ContainerAttrs, serde: SerdeContainerAttrs) -> Self {
        use quote::ToTokens;
        let phi_crate = attrs
            .crate_path
            .map(|path| path.into_token_stream())
            .unwrap_or_else(|| quote! { ::phi });
        Self {
            phi_crate,
            rename_all: attrs.rename_all.or(serde.rename_all),
            rename_all_fields: attrs.rename_all_fields.or(serde.rename_all_fields),
        }
    }
}
