//! Typed access to query string parameters.

use crate::extract::short_type_name;
use crate::{FromRequest, RequestParts};
use std::fmt;
use std::str::FromStr;
use tradepost_validate::{FieldPath, ValidationError, ValidationErrors};

/// Decoded query string pairs with typed, per-parameter accessors.
///
/// Pairs are percent-decoded by the urlencoded parser. Parameters not
/// present in the query string default to absent without error; coercion
/// failures name the parameter and the expected type.
///
/// # Example
///
/// ```rust
/// use tradepost_extract::{FromRequest, QueryParams, RequestParts};
/// use http::{Method, Uri};
///
/// let parts = RequestParts::builder()
///     .method(Method::GET)
///     .uri(Uri::from_static("/items/?skip=2&limit=3"))
///     .build();
///
/// let query = QueryParams::from_request(&parts).unwrap();
/// assert_eq!(query.get_or("skip", 0_usize).unwrap(), 2);
/// assert_eq!(query.get_or("limit", 10_usize).unwrap(), 3);
/// assert_eq!(query.get::<String>("q").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl FromRequest for QueryParams {
    fn from_request(parts: &RequestParts) -> Result<Self, ValidationErrors> {
        let query = parts.query_string().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).map_err(|e| {
            ValidationError::type_mismatch(FieldPath::field("query"), "query string", e)
        })?;
        Ok(Self { pairs })
    }
}

impl QueryParams {
    /// Returns the raw value of the first occurrence of `name`.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the parameter coerced to `T`, or `None` when absent.
    pub fn get<T>(&self, name: &str) -> Result<Option<T>, ValidationError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.raw(name) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|e| {
                ValidationError::type_mismatch(FieldPath::field(name), short_type_name::<T>(), e)
            }),
        }
    }

    /// Returns the parameter coerced to `T`, rejecting an absent value.
    pub fn require<T>(&self, name: &str) -> Result<T, ValidationError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get(name)?.ok_or_else(|| {
            ValidationError::type_mismatch(
                FieldPath::field(name),
                short_type_name::<T>(),
                "value is required but missing",
            )
        })
    }

    /// Returns the parameter coerced to `T`, or `default` when absent.
    pub fn get_or<T>(&self, name: &str, default: T) -> Result<T, ValidationError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        Ok(self.get(name)?.unwrap_or(default))
    }

    /// Returns a boolean flag, or `default` when absent.
    ///
    /// Accepts the usual textual spellings case-insensitively:
    /// `true/false`, `1/0`, `yes/no`, `on/off`.
    pub fn flag(&self, name: &str, default: bool) -> Result<bool, ValidationError> {
        match self.raw(name) {
            None => Ok(default),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                other => Err(ValidationError::type_mismatch(
                    FieldPath::field(name),
                    "bool",
                    format!("'{other}' is not a boolean"),
                )),
            },
        }
    }
}
