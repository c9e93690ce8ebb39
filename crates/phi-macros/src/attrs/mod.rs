mod container;
mod field;
mod rename_all;
mod serde_compat;
mod span_extract;

pub use container::ContainerAttrs;
pub use field::FieldAttrs;
pub use rename_all::RenameAll;
pub use serde_compat::{SerdeContainerAttrs, serde_field_rename, serde_flatten};
pub use span_extract::extract_phi_attr_spans;
