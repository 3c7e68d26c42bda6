//! Validation error types.
//!
//! All rejections produced by the validation layer fall into a single
//! category with four kinds: [`ViolationKind::TypeMismatch`],
//! [`ViolationKind::ConstraintViolation`], [`ViolationKind::EnumViolation`],
//! and [`ViolationKind::FormatViolation`]. Every violation carries the
//! offending [`FieldPath`] and a human-readable reason, and a request's
//! violations are aggregated into one [`ValidationErrors`] value so the
//! caller gets complete feedback in a single response.

use crate::FieldPath;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Classification of a single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The input could not be coerced to the declared type.
    TypeMismatch {
        /// Name of the expected type (e.g. `i64`, `f64`, `bool`).
        expected: String,
    },
    /// The value has the right type but violates a declared constraint.
    ConstraintViolation {
        /// The constraint in declaration form (e.g. `gt=0`, `max_length=300`).
        constraint: String,
    },
    /// The value is not a member of a closed enumeration.
    EnumViolation {
        /// The accepted literal members.
        accepted: Vec<String>,
    },
    /// The value does not match a required textual format.
    FormatViolation {
        /// The format that was expected (e.g. `http/https URL`).
        format: String,
    },
}

/// A single validation failure addressed to one field.
///
/// # Example
///
/// ```rust
/// use tradepost_validate::{FieldPath, ValidationError};
///
/// let err = ValidationError::constraint(FieldPath::field("price"), "gt=0", "-3.5");
/// assert_eq!(err.to_string(), "price: value -3.5 violates gt=0");
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Location of the offending value.
    pub field: FieldPath,
    /// Failure classification.
    #[serde(flatten)]
    pub kind: ViolationKind,
    /// Human-readable explanation.
    pub reason: String,
}

impl ValidationError {
    /// Creates a type-coercion failure for `field`.
    #[must_use]
    pub fn type_mismatch(
        field: FieldPath,
        expected: impl Into<String>,
        detail: impl fmt::Display,
    ) -> Self {
        let expected = expected.into();
        Self {
            reason: format!("expected {expected}: {detail}"),
            kind: ViolationKind::TypeMismatch { expected },
            field,
        }
    }

    /// Creates a constraint failure for `field`, naming the violated
    /// constraint and the offending value.
    #[must_use]
    pub fn constraint(
        field: FieldPath,
        constraint: impl Into<String>,
        value: impl fmt::Display,
    ) -> Self {
        let constraint = constraint.into();
        Self {
            reason: format!("value {value} violates {constraint}"),
            kind: ViolationKind::ConstraintViolation { constraint },
            field,
        }
    }

    /// Creates an enum-membership failure for `field`, listing the accepted
    /// literals.
    #[must_use]
    pub fn enum_violation(
        field: FieldPath,
        value: impl fmt::Display,
        accepted: &[&str],
    ) -> Self {
        Self {
            reason: format!("'{value}' is not one of: {}", accepted.join(", ")),
            kind: ViolationKind::EnumViolation {
                accepted: accepted.iter().map(ToString::to_string).collect(),
            },
            field,
        }
    }

    /// Creates a textual-format failure for `field`.
    #[must_use]
    pub fn format(
        field: FieldPath,
        format: impl Into<String>,
        detail: impl fmt::Display,
    ) -> Self {
        let format = format.into();
        Self {
            reason: format!("not a valid {format}: {detail}"),
            kind: ViolationKind::FormatViolation { format },
            field,
        }
    }

    /// Re-roots this error under `base`, annotating nested-record failures
    /// with the field (and index) that holds them.
    #[must_use]
    pub fn under(mut self, base: &FieldPath) -> Self {
        self.field = self.field.under(base);
        self
    }
}

/// An aggregate of every violation found in one request.
///
/// Validation runs to completion over all fields of a record and collects
/// each failure here rather than stopping at the first one.
///
/// # Example
///
/// ```rust
/// use tradepost_validate::{FieldPath, ValidationError, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.push(ValidationError::constraint(FieldPath::field("price"), "gt=0", "0"));
/// errors.push(ValidationError::constraint(
///     FieldPath::field("description"),
///     "max_length=300",
///     "<361 chars>",
/// ));
///
/// assert_eq!(errors.len(), 2);
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one violation.
    pub fn push(&mut self, error: ValidationError) {
        self.violations.push(error);
    }

    /// Absorbs every violation from another aggregate.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.violations.extend(other.violations);
    }

    /// Records the failure of a fallible check, passing successes through.
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    /// Re-roots every recorded violation under `base`.
    #[must_use]
    pub fn under(self, base: &FieldPath) -> Self {
        Self {
            violations: self
                .violations
                .into_iter()
                .map(|error| error.under(base))
                .collect(),
        }
    }

    /// Returns the recorded violations in order.
    #[must_use]
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Returns the number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Converts the aggregate into a `Result`: `Ok` when empty, `Err(self)`
    /// when at least one violation was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            violations: vec![error],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
