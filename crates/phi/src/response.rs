//! JSON error bodies for the surrounding HTTP layer.

use std::borrow::Cow;
use std::fmt::Display;

use serde::Serialize;

use crate::error::{Error, ErrorKind, MissingFields};

/// `{"error": "<code>", "message": "<text>"}` plus the status to send it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: Cow<'static, str>,
    pub message: Cow<'static, str>,
    #[serde(skip)]
    pub status_code: u16,
}

impl ErrorBody {
    pub const DECODING: ErrorBody = ErrorBody::new(
        "decodingError",
        "error while decoding request body",
        400,
    );
    pub const PARSING: ErrorBody = ErrorBody::new("parseError", "error while parsing response", 500);
    pub const WRITING: ErrorBody = ErrorBody::new("writingError", "error while writing response", 500);

    pub const fn new(error: &'static str, message: &'static str, status_code: u16) -> Self {
        Self {
            error: Cow::Borrowed(error),
            message: Cow::Borrowed(message),
            status_code,
        }
    }

    pub fn missing_body_parameters(missing: &MissingFields) -> Self {
        Self::with_kind(ErrorKind::MissingFields, missing.to_string())
    }

    pub fn validating(message: impl Display) -> Self {
        Self {
            error: Cow::Borrowed("validatingError"),
            message: Cow::Owned(message.to_string()),
            status_code: 400,
        }
    }

    pub fn unknown(message: impl Display) -> Self {
        Self::with_kind(ErrorKind::Unknown, message.to_string())
    }

    fn with_kind(kind: ErrorKind, message: String) -> Self {
        Self {
            error: Cow::Borrowed(kind.as_str()),
            message: Cow::Owned(message),
            status_code: kind.status_code(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        match error {
            Error::Decode(_) => ErrorBody::DECODING,
            Error::MissingFields(missing) => ErrorBody::missing_body_parameters(missing),
        }
    }
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        ErrorBody::from(&error)
    }
}
