//! JSON body extraction with a post-decode validation hook.

use crate::extract::short_type_name;
use crate::{FromRequest, RequestParts};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use tradepost_validate::{FieldPath, Validate, ValidationError, ValidationErrors};

/// Maximum accepted body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Extractor that deserializes the request body as JSON into `T`.
///
/// Deserialization failures are reported as a type mismatch on the `body`
/// field. Use [`Valid`] for records that also declare constraints.
///
/// # Example
///
/// ```rust
/// use tradepost_extract::{FromRequest, Json, RequestParts};
/// use http::{Method, Uri};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Login {
///     username: String,
/// }
///
/// let parts = RequestParts::builder()
///     .method(Method::POST)
///     .uri(Uri::from_static("/login"))
///     .body(r#"{"username": "alice"}"#)
///     .build();
///
/// let Json(login) = Json::<Login>::from_request(&parts).unwrap();
/// assert_eq!(login.username, "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consumes the extractor and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for Json<T> {
    fn from_request(parts: &RequestParts) -> Result<Self, ValidationErrors> {
        let body = parts.body();

        if body.len() > MAX_BODY_SIZE {
            return Err(ValidationError::constraint(
                FieldPath::field("body"),
                format!("max_body_bytes={MAX_BODY_SIZE}"),
                format!("<body of {} bytes>", body.len()),
            )
            .into());
        }

        if body.is_empty() {
            return Err(ValidationError::type_mismatch(
                FieldPath::field("body"),
                short_type_name::<T>(),
                "request body is required",
            )
            .into());
        }

        let value: T = serde_json::from_slice(body).map_err(|e| {
            ValidationError::type_mismatch(FieldPath::field("body"), short_type_name::<T>(), e)
        })?;

        Ok(Json(value))
    }
}

/// Extractor that deserializes the body as JSON and then runs the record's
/// declared constraints, aggregating every violation.
///
/// A handler receiving a `Valid<T>` can rely on all of `T`'s invariants
/// without rechecking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valid<T>(pub T);

impl<T> Valid<T> {
    /// Consumes the extractor and returns the inner validated value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: DeserializeOwned + Validate> FromRequest for Valid<T> {
    fn from_request(parts: &RequestParts) -> Result<Self, ValidationErrors> {
        let Json(value) = Json::<T>::from_request(parts)?;
        value.validate()?;
        Ok(Valid(value))
    }
}
