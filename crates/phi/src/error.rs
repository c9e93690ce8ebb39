//! Error types returned by the entry points.

use std::slice;

use thiserror::Error;

/// Every required field that held its zero value, in traversal order.
///
/// Displays as `missing 'a, b.c, d[0].e'`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing '{}'", .paths.join(", "))]
pub struct MissingFields {
    paths: Vec<String>,
}

impl MissingFields {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

impl IntoIterator for MissingFields {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a MissingFields {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Failure of a decode-then-validate call.
///
/// A body that does not decode never reaches validation, so the two cases
/// stay distinguishable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error while decoding request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    MissingFields(#[from] MissingFields),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Decode(_) => ErrorKind::Decode,
            Error::MissingFields(_) => ErrorKind::MissingFields,
        }
    }

    /// Get the violations if this is a `MissingFields` error.
    pub fn as_missing_fields(&self) -> Option<&MissingFields> {
        match self {
            Error::MissingFields(missing) => Some(missing),
            _ => None,
        }
    }
}

/// Stable machine-readable category of an error.
///
/// `Unknown` is never returned by [`Error::kind`]; it is the category of
/// failures raised outside this crate (see [`ErrorBody::unknown`]).
///
/// [`ErrorBody::unknown`]: crate::ErrorBody::unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Decode,
    MissingFields,
    Unknown,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Decode => "decodingError",
            ErrorKind::MissingFields => "missingBodyParameters",
            ErrorKind::Unknown => "unknownError",
        }
    }

    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::Decode | ErrorKind::MissingFields => 400,
            ErrorKind::Unknown => 500,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
