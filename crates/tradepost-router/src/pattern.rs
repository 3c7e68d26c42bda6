//! Path patterns.
//!
//! A pattern is an ordered list of segments, each either a static literal
//! or a named parameter (`{name}`). Empty segments are filtered during
//! parsing, so trailing slashes are normalized: `/users/` and `/users`
//! describe the same pattern.

use crate::Params;

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must match the request segment byte-for-byte.
    Static(String),
    /// Matches any single segment and captures it under the given name.
    Param(String),
}

/// A parsed path pattern such as `/users/{user_id}/items/{item_id}`.
///
/// # Example
///
/// ```rust
/// use tradepost_router::PathPattern;
///
/// let pattern = PathPattern::parse("/models/{model_name}");
/// let params = pattern.match_path("/models/Model%20X").unwrap();
/// assert_eq!(params.get("model_name"), Some("Model X"));
/// assert!(pattern.match_path("/models").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a pattern string. `{name}` segments capture parameters;
    /// everything else matches literally.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                    .map_or_else(
                        || Segment::Static(segment.to_string()),
                        |name| Segment::Param(name.to_string()),
                    )
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The pattern string as registered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Matches a request path against this pattern, capturing parameters.
    ///
    /// Captured values are percent-decoded. Returns `None` when the path
    /// has a different shape or a static segment differs.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let mut parts = path.split('/').filter(|segment| !segment.is_empty());
        let mut params = Params::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = urlencoding::decode(part).ok()?;
                    params.push(name.clone(), value.into_owned());
                }
            }
        }

        // The path must not have extra trailing segments.
        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pattern() {
        let pattern = PathPattern::parse("/users/me");
        assert!(pattern.match_path("/users/me").is_some());
        assert!(pattern.match_path("/users/other").is_none());
        assert!(pattern.match_path("/users").is_none());
        assert!(pattern.match_path("/users/me/extra").is_none());
    }

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::parse("/");
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("/users").is_none());
    }

    #[test]
    fn test_param_capture() {
        let pattern = PathPattern::parse("/users/{user_id}");
        let params = pattern.match_path("/users/42").unwrap();
        assert_eq!(params.get("user_id"), Some("42"));
    }

    #[test]
    fn test_multiple_params() {
        let pattern = PathPattern::parse("/users/{user_id}/items/{item_id}");
        let params = pattern.match_path("/users/7/items/widget").unwrap();
        assert_eq!(params.get("user_id"), Some("7"));
        assert_eq!(params.get("item_id"), Some("widget"));
    }

    #[test]
    fn test_percent_decoding_of_captures() {
        let pattern = PathPattern::parse("/models/{model_name}");
        let params = pattern.match_path("/models/Model%20X").unwrap();
        assert_eq!(params.get("model_name"), Some("Model X"));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let pattern = PathPattern::parse("/users/");
        assert!(pattern.match_path("/users").is_some());
        assert!(pattern.match_path("/users/").is_some());

        let no_slash = PathPattern::parse("/users");
        assert!(no_slash.match_path("/users/").is_some());
    }

    #[test]
    fn test_raw_preserved() {
        let pattern = PathPattern::parse("/items/{item_id}");
        assert_eq!(pattern.raw(), "/items/{item_id}");
    }
}
