//! Required-field validation for decoded values.
//!
//! Mark fields with `#[phi(required)]` and derive [`Introspect`]. Validation
//! walks the whole value and reports every required field still holding its
//! type's default, each as a path such as `items[0].owner.name`. It never
//! stops at the first violation.
//!
//! ```
//! use phi::Introspect;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Introspect)]
//! struct Item {
//!     #[phi(required)]
//!     id: u64,
//! }
//!
//! #[derive(Deserialize, Introspect)]
//! struct Order {
//!     #[phi(required)]
//!     customer: String,
//!     items: Vec<Item>,
//! }
//!
//! let error = phi::from_str::<Order>(r#"{"customer": "", "items": [{"id": 1}, {"id": 0}]}"#)
//!     .err()
//!     .unwrap();
//! assert_eq!(error.to_string(), "missing 'customer, items[1].id'");
//! ```

extern crate self as phi;

/// Structural view of values, and the impls for std types.
pub mod introspect;

/// Rendered location of a violation.
pub mod path;

/// Validation settings.
pub mod options;

/// The traversal itself.
pub mod walker;

pub mod error;

/// JSON error bodies.
pub mod response;

mod validate;

pub use error::{Error, ErrorKind, MissingFields};
pub use introspect::{
    Described, Entries, Field, FieldDescriptor, Introspect, Record, Sequence, SequenceKind, Shape,
    ShapeKind, Unchecked,
};
pub use options::{MapKeyOrder, ValidateOptions};
pub use path::{FieldPath, PathSegment};
pub use response::ErrorBody;
pub use validate::{Validator, check, from_reader, from_slice, from_str, validate};
pub use walker::Walker;

/// Derive [`Introspect`] for a struct or enum.
///
/// See the crate documentation of `phi-macros` for the accepted attributes.
pub use phi_macros::Introspect;
