//! Entry points: validate an already-built value, or decode JSON and then
//! validate it.

use std::io;

use serde::de::DeserializeOwned;
use tracing::{debug, trace_span};

use crate::error::{Error, MissingFields};
use crate::introspect::Introspect;
use crate::options::ValidateOptions;
use crate::walker::Walker;

/// Validation with a fixed set of options.
///
/// The free functions in this crate use `Validator::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: ValidateOptions,
}

impl Validator {
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Every violation in `value`, in traversal order. Empty means valid.
    pub fn missing_fields<T: Introspect>(&self, value: &T) -> Vec<String> {
        let _span = trace_span!("validate", ty = std::any::type_name::<T>()).entered();
        let mut walker = Walker::new(self.options);
        walker.walk(value);
        walker.finish()
    }

    pub fn check<T: Introspect>(&self, value: &T) -> Result<(), MissingFields> {
        let paths = self.missing_fields(value);
        if paths.is_empty() {
            return Ok(());
        }
        debug!(count = paths.len(), "rejected value with missing required fields");
        Err(MissingFields::new(paths))
    }

    /// Hand `value` back if nothing required is missing.
    pub fn validate<T: Introspect>(&self, value: T) -> Result<T, MissingFields> {
        self.check(&value)?;
        Ok(value)
    }

    pub fn from_slice<T>(&self, bytes: &[u8]) -> Result<T, Error>
    where
        T: DeserializeOwned + Introspect,
    {
        let value: T = serde_json::from_slice(bytes).inspect_err(log_decode_failure)?;
        Ok(self.validate(value)?)
    }

    pub fn from_str<T>(&self, s: &str) -> Result<T, Error>
    where
        T: DeserializeOwned + Introspect,
    {
        let value: T = serde_json::from_str(s).inspect_err(log_decode_failure)?;
        Ok(self.validate(value)?)
    }

    pub fn from_reader<T, R>(&self, reader: R) -> Result<T, Error>
    where
        T: DeserializeOwned + Introspect,
        R: io::Read,
    {
        let value: T = serde_json::from_reader(reader).inspect_err(log_decode_failure)?;
        Ok(self.validate(value)?)
    }
}

fn log_decode_failure(error: &serde_json::Error) {
    debug!(%error, "failed to decode body");
}

/// Check `value` with default options and return it unchanged on success.
///
/// ```
/// use phi::Introspect;
///
/// #[derive(Introspect)]
/// struct Login {
///     #[phi(required)]
///     user: String,
///     remember: bool,
/// }
///
/// let error = phi::validate(Login { user: String::new(), remember: true })
///     .err()
///     .unwrap();
/// assert_eq!(error.to_string(), "missing 'user'");
/// ```
pub fn validate<T: Introspect>(value: T) -> Result<T, MissingFields> {
    Validator::default().validate(value)
}

pub fn check<T: Introspect>(value: &T) -> Result<(), MissingFields> {
    Validator::default().check(value)
}

/// Decode JSON bytes, then validate.
///
/// A decode failure is returned as [`Error::Decode`] and validation does not
/// run.
pub fn from_slice<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Introspect,
{
    Validator::default().from_slice(bytes)
}

pub fn from_str<T>(s: &str) -> Result<T, Error>
where
    T: DeserializeOwned + Introspect,
{
    Validator::default().from_str(s)
}

pub fn from_reader<T, R>(reader: R) -> Result<T, Error>
where
    T: DeserializeOwned + Introspect,
    R: io::Read,
{
    Validator::default().from_reader(reader)
}
