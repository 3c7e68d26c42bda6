//! The [`FromRequest`] trait.

use crate::RequestParts;
use tradepost_validate::ValidationErrors;

/// A value that can be extracted and validated from matched request parts.
///
/// Every failure surfaces as [`ValidationErrors`]; extraction either
/// produces a fully typed, constraint-checked value or the request is
/// rejected before any handler runs.
pub trait FromRequest: Sized {
    /// Extracts this value from the request.
    ///
    /// # Errors
    ///
    /// Returns the aggregated violations when the input cannot be coerced
    /// or fails a declared constraint.
    fn from_request(parts: &RequestParts) -> Result<Self, ValidationErrors>;
}

/// Strips module paths from a `std::any::type_name` rendering, keeping
/// generic structure: `alloc::vec::Vec<demo::Image>` becomes `Vec<Image>`.
pub(crate) fn short_type_name<T>() -> String {
    let mut out = String::new();
    let mut segment = String::new();
    for c in std::any::type_name::<T>().chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}
