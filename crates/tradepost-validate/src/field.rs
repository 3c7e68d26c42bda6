//! Field paths for addressing validation failures.
//!
//! A [`FieldPath`] names the exact location of an invalid value inside a
//! request, including sequence indices for elements of composite fields
//! (e.g. `image[0].url`). Error payloads serialize the path as its display
//! form so a caller can locate every invalid field in one round trip.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named field or map key.
    Key(String),
    /// An index into a sequence field.
    Index(usize),
}

/// The location of a value inside a request.
///
/// # Example
///
/// ```rust
/// use tradepost_validate::FieldPath;
///
/// let path = FieldPath::field("image").index(0).child("url");
/// assert_eq!(path.to_string(), "image[0].url");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path addressing the whole input.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path addressing a single top-level field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Key(name.into())],
        }
    }

    /// Returns this path extended with a nested field name.
    #[must_use]
    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(name.into()));
        self
    }

    /// Returns this path extended with a sequence index.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Prefixes this path with `base`, re-rooting an error raised inside a
    /// nested record under the field that holds it.
    #[must_use]
    pub fn under(self, base: &FieldPath) -> Self {
        let mut segments = base.segments.clone();
        segments.extend(self.segments);
        Self { segments }
    }

    /// Returns true if the path addresses the whole input.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<input>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
