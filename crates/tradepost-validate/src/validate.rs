//! The [`Validate`] trait and composite-field helpers.

use crate::{FieldPath, ValidationErrors};

/// A record whose declared constraints can be checked after type coercion.
///
/// Implementations run every field validator and aggregate all failures
/// into one [`ValidationErrors`] instead of short-circuiting on the first,
/// so a caller can fix every invalid field in one round trip.
///
/// # Example
///
/// ```rust
/// use tradepost_validate::{rules, FieldPath, Validate, ValidationErrors};
///
/// struct Listing {
///     price: f64,
///     note: Option<String>,
/// }
///
/// impl Validate for Listing {
///     fn validate(&self) -> Result<(), ValidationErrors> {
///         let mut errors = ValidationErrors::new();
///         errors.check(rules::gt_f64(FieldPath::field("price"), self.price, 0.0));
///         if let Some(note) = &self.note {
///             errors.check(rules::max_length(FieldPath::field("note"), note, 300));
///         }
///         errors.into_result()
///     }
/// }
///
/// let bad = Listing { price: 0.0, note: Some("x".repeat(400)) };
/// assert_eq!(bad.validate().unwrap_err().len(), 2);
/// ```
pub trait Validate {
    /// Checks every declared constraint, aggregating all violations.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Validates each element of a sequence-of-record field.
///
/// Elements validate independently in order; the first element that fails
/// any rule aborts the whole field with that element's violations, each
/// re-rooted under `field[index]`.
pub fn validate_each<T: Validate>(
    field: &FieldPath,
    items: &[T],
) -> Result<(), ValidationErrors> {
    for (index, item) in items.iter().enumerate() {
        if let Err(errors) = item.validate() {
            return Err(errors.under(&field.clone().index(index)));
        }
    }
    Ok(())
}

/// A bare sequence body validates element-wise from the root, so element
/// failures surface as `[index].field`.
impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_each(&FieldPath::root(), self)
    }
}
