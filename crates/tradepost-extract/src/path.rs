//! Typed access to captured path parameters.

use crate::extract::short_type_name;
use crate::RequestParts;
use std::fmt;
use std::str::FromStr;
use tradepost_validate::{FieldPath, ValidationError};

/// Extracts a single path parameter by name, coerced to `T`.
///
/// A routing layer that matched the pattern guarantees the capture exists;
/// a missing name or a failed coercion both signal a type mismatch naming
/// the parameter and the expected type.
///
/// # Example
///
/// ```rust
/// use tradepost_extract::{path_param, RequestParts};
/// use http::{Method, Uri};
///
/// let parts = RequestParts::builder()
///     .method(Method::GET)
///     .uri(Uri::from_static("/users/42"))
///     .path_param("user_id", "42")
///     .build();
///
/// let user_id: i64 = path_param(&parts, "user_id").unwrap();
/// assert_eq!(user_id, 42);
///
/// let err = path_param::<i64>(&parts, "missing").unwrap_err();
/// assert_eq!(err.field.to_string(), "missing");
/// ```
pub fn path_param<T>(parts: &RequestParts, name: &str) -> Result<T, ValidationError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = parts.path_params().get(name).ok_or_else(|| {
        ValidationError::type_mismatch(
            FieldPath::field(name),
            short_type_name::<T>(),
            "value is required but missing",
        )
    })?;

    raw.parse().map_err(|e| {
        ValidationError::type_mismatch(FieldPath::field(name), short_type_name::<T>(), e)
    })
}
