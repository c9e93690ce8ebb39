use darling::FromDeriveInput;
use syn::parse_macro_input;

use crate::{
    attrs::{ContainerAttrs, SerdeContainerAttrs},
    config::MacroConfig,
    context::MacroContext,
};

mod attrs;
pub(crate) mod config;
pub(crate) mod context;
mod introspect;

/// Derives `phi::Introspect` (and `phi::Described` for structs with fields).
///
/// # Attributes
///
/// Container:
/// - `#[phi(crate = path)]`: path to the `phi` crate (default `::phi`)
/// - `#[phi(rename_all = "camelCase")]`: rename struct fields
/// - `#[phi(rename_all_fields = "camelCase")]`: rename fields of enum variants
///
/// Field:
/// - `#[phi(required)]`: report the field when it holds its zero value
/// - `#[phi(rename = "name")]`: external name used in reported paths
/// - `#[phi(skip)]`: never inspect the field
///
/// Without a `phi` rename, `#[serde(rename = "...")]` and serde's
/// `rename_all`/`rename_all_fields` decide the external name.
///
/// ```ignore
/// #[derive(Deserialize, Introspect)]
/// #[serde(rename_all = "camelCase")]
/// struct Body {
///     #[phi(required)]
///     classic_string: String,
///     classic_int: i64,
/// }
/// ```
#[proc_macro_derive(Introspect, attributes(phi))]
pub fn introspect_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    introspect::derive(create_context(input)).into()
}

fn create_context(input: syn::DeriveInput) -> MacroContext {
    let attrs = ContainerAttrs::from_derive_input(&input).expect("Failed to parse phi attributes");
    let serde = SerdeContainerAttrs::from_attrs(&input.attrs);
    MacroContext::new(MacroConfig::from_attrs(attrs, serde), input)
}
