//! # Tradepost Validate
//!
//! Declarative request/response validation for the Tradepost demo service.
//!
//! Given a field's declared type and constraint set, this crate produces
//! either a validated typed value or a structured rejection. The taxonomy
//! is deliberately closed:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`ViolationKind::TypeMismatch`] | input cannot be coerced to the declared type |
//! | [`ViolationKind::ConstraintViolation`] | a numeric or length bound is violated |
//! | [`ViolationKind::EnumViolation`] | a value is outside a closed enumeration |
//! | [`ViolationKind::FormatViolation`] | a string fails syntax rules (e.g. URL) |
//!
//! Record validation runs to completion over every field and aggregates all
//! failures into a single [`ValidationErrors`], so one response is enough to
//! locate and fix every invalid field.
//!
//! ## Example
//!
//! ```rust
//! use tradepost_validate::{rules, FieldPath, Validate, ValidationErrors};
//!
//! struct Offer {
//!     price: f64,
//! }
//!
//! impl Validate for Offer {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors.check(rules::gt_f64(FieldPath::field("price"), self.price, 0.0));
//!         errors.into_result()
//!     }
//! }
//!
//! assert!(Offer { price: 12.5 }.validate().is_ok());
//! assert!(Offer { price: 0.0 }.validate().is_err());
//! ```

#![doc(html_root_url = "https://docs.rs/tradepost-validate/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod field;
pub mod rules;
mod validate;

pub use error::{ValidationError, ValidationErrors, ViolationKind};
pub use field::{FieldPath, PathSegment};
pub use validate::{validate_each, Validate};
