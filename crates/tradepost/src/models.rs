//! Data-model declarations and their declared constraints.
//!
//! Every record here is an immutable value constructed fresh per request;
//! none outlives the request it was parsed for. Constraints are checked at
//! the boundary, so a handler never observes a violating instance.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tradepost_extract::{FromRequest, Json, RequestParts};
use tradepost_validate::{
    rules, validate_each, FieldPath, Validate, ValidationError, ValidationErrors,
};

/// An image attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Must parse as a well-formed http or https URL.
    pub url: String,
    /// Display name.
    pub name: String,
}

impl Validate for Image {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(rules::http_url(FieldPath::field("url"), &self.url));
        errors.into_result()
    }
}

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Optional description, at most 300 characters.
    #[serde(default)]
    pub description: Option<String>,
    /// Price, strictly greater than zero.
    pub price: f64,
    /// Optional tax amount.
    #[serde(default)]
    pub tax: Option<f64>,
    /// Free-form tags, defaulting to empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional attached images, validated element-wise.
    #[serde(default)]
    pub image: Option<Vec<Image>>,
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(description) = &self.description {
            errors.check(rules::max_length(
                FieldPath::field("description"),
                description,
                300,
            ));
        }
        errors.check(rules::gt_f64(FieldPath::field("price"), self.price, 0.0));
        if let Some(images) = &self.image {
            if let Err(image_errors) = validate_each(&FieldPath::field("image"), images) {
                errors.merge(image_errors);
            }
        }

        errors.into_result()
    }
}

/// A user record; both fields required, no further constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Closed enumeration constraining the `/models/{model_name}` path segment.
///
/// Only the two listed literals are members; anything else is rejected
/// before dispatch with an enum violation listing the accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelName {
    /// The literal `Model Y`.
    #[serde(rename = "Model Y")]
    ModelY,
    /// The literal `Model X`.
    #[serde(rename = "Model X")]
    ModelX,
}

/// Explicit literal-to-variant lookup table, in declaration order.
const MODEL_NAME_LITERALS: [(&str, ModelName); 2] = [
    ("Model Y", ModelName::ModelY),
    ("Model X", ModelName::ModelX),
];

impl ModelName {
    /// Maps a path value onto a variant via the literal lookup table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tradepost::models::ModelName;
    ///
    /// assert_eq!(ModelName::from_literal("Model X").unwrap(), ModelName::ModelX);
    /// assert!(ModelName::from_literal("Model Z").is_err());
    /// ```
    pub fn from_literal(value: &str) -> Result<Self, ValidationError> {
        rules::one_of(FieldPath::field("model_name"), value, &MODEL_NAME_LITERALS)
    }

    /// The literal this variant serializes to.
    #[must_use]
    pub fn literal(self) -> &'static str {
        match self {
            Self::ModelY => "Model Y",
            Self::ModelX => "Model X",
        }
    }
}

/// A body that is a bare mapping of integer index to float weight.
///
/// JSON object keys are always strings on the wire, so every key must
/// coerce to an integer and every value to a float; the mapping is then
/// echoed unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct IndexWeights(pub BTreeMap<i64, f64>);

impl FromRequest for IndexWeights {
    fn from_request(parts: &RequestParts) -> Result<Self, ValidationErrors> {
        let Json(raw) = Json::<serde_json::Map<String, Value>>::from_request(parts)?;

        let mut errors = ValidationErrors::new();
        let mut weights = BTreeMap::new();
        for (key, value) in &raw {
            let field = FieldPath::field("body").child(key.clone());

            let index = errors.check(key.parse::<i64>().map_err(|e| {
                ValidationError::type_mismatch(field.clone(), "i64", e)
            }));
            let weight = errors.check(coerce_f64(value).ok_or_else(|| {
                ValidationError::type_mismatch(field.clone(), "f64", format!("got {value}"))
            }));

            if let (Some(index), Some(weight)) = (index, weight) {
                weights.insert(index, weight);
            }
        }

        errors.into_result()?;
        Ok(Self(weights))
    }
}

/// Coerces a JSON value to a float, accepting numbers and numeric strings.
fn coerce_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}
