//! Reusable per-field constraint checks.
//!
//! Each check is a pure function from a raw value to either the validated
//! value (or unit) or a single [`ValidationError`]. Record validators
//! compose these and aggregate the failures.

use crate::{FieldPath, ValidationError};
use url::Url;

/// Requires `value > bound` for a float field.
pub fn gt_f64(field: FieldPath, value: f64, bound: f64) -> Result<(), ValidationError> {
    if value > bound {
        Ok(())
    } else {
        Err(ValidationError::constraint(field, format!("gt={bound}"), value))
    }
}

/// Requires `value > bound` for an integer field.
pub fn gt_i64(field: FieldPath, value: i64, bound: i64) -> Result<(), ValidationError> {
    if value > bound {
        Ok(())
    } else {
        Err(ValidationError::constraint(field, format!("gt={bound}"), value))
    }
}

/// Requires `value >= bound` for an integer field.
pub fn ge_i64(field: FieldPath, value: i64, bound: i64) -> Result<(), ValidationError> {
    if value >= bound {
        Ok(())
    } else {
        Err(ValidationError::constraint(field, format!("ge={bound}"), value))
    }
}

/// Requires `value.chars().count() <= max` for a string field.
pub fn max_length(field: FieldPath, value: &str, max: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length <= max {
        Ok(())
    } else {
        Err(ValidationError::constraint(
            field,
            format!("max_length={max}"),
            format!("<string of length {length}>"),
        ))
    }
}

/// Requires `value` to parse as a well-formed absolute URL with an `http`
/// or `https` scheme.
///
/// # Example
///
/// ```rust
/// use tradepost_validate::{rules::http_url, FieldPath};
///
/// assert!(http_url(FieldPath::field("url"), "https://example.com/a.png").is_ok());
/// assert!(http_url(FieldPath::field("url"), "ftp://example.com").is_err());
/// assert!(http_url(FieldPath::field("url"), "not a url").is_err());
/// ```
pub fn http_url(field: FieldPath, value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(ValidationError::format(
            field,
            "http/https URL",
            format!("scheme '{}' is not http or https", url.scheme()),
        )),
        Err(e) => Err(ValidationError::format(field, "http/https URL", e)),
    }
}

/// Requires `value` to be one of the `accepted` literals, string-compared,
/// returning the variant mapped to the matching literal.
pub fn one_of<T: Copy>(
    field: FieldPath,
    value: &str,
    accepted: &[(&str, T)],
) -> Result<T, ValidationError> {
    accepted
        .iter()
        .find(|(literal, _)| *literal == value)
        .map(|(_, mapped)| *mapped)
        .ok_or_else(|| {
            let literals: Vec<&str> = accepted.iter().map(|(literal, _)| *literal).collect();
            ValidationError::enum_violation(field, value, &literals)
        })
}
