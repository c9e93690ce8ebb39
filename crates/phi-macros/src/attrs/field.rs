use darling::FromField;

#[derive(Debug, Default, FromField)]
#[darling(default, attributes(phi))]
pub struct FieldAttrs {
    /// Report this field when it holds its type's zero value.
    pub required: bool,
    /// Explicit external name (overrides serde's rename and any rename_all).
    pub rename: Option<String>,
    /// Leave this field out of the descriptor table entirely.
    pub skip: bool,
}
