//! Captured path parameters.
//!
//! Parameters are stored as (name, value) pairs with a small-vector
//! optimization; routes in this service never capture more than two.

use smallvec::SmallVec;

/// Pairs stored inline before spilling to the heap.
const INLINE_CAPACITY: usize = 4;

/// Path parameters captured by a route match.
///
/// Values are percent-decoded at capture time, so `Model%20X` in the
/// request path is observed as `Model X`.
///
/// # Example
///
/// ```rust
/// use tradepost_router::Params;
///
/// let mut params = Params::new();
/// params.push("user_id", "42");
/// assert_eq!(params.get("user_id"), Some("42"));
/// assert_eq!(params.get("item_id"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    pairs: SmallVec<[(String, String); INLINE_CAPACITY]>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a captured parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameters were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the captured (name, value) pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.get("anything"), None);
    }

    #[test]
    fn test_push_and_get() {
        let mut params = Params::new();
        params.push("user_id", "7");
        params.push("item_id", "widget");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("user_id"), Some("7"));
        assert_eq!(params.get("item_id"), Some("widget"));
    }

    #[test]
    fn test_iter_preserves_capture_order() {
        let mut params = Params::new();
        params.push("a", "1");
        params.push("b", "2");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut params = Params::new();
        for i in 0..8 {
            params.push(format!("k{i}"), format!("v{i}"));
        }
        assert_eq!(params.len(), 8);
        assert_eq!(params.get("k6"), Some("v6"));
    }
}
