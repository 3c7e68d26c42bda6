//! Request parts available to extractors.

use bytes::Bytes;
use http::{Method, Uri};
use tradepost_router::Params;

/// The already-matched parts of one request.
///
/// Extractors read path captures, the query string, and the raw body from
/// here. A `RequestParts` is constructed per request after routing and
/// never outlives it.
///
/// # Example
///
/// ```rust
/// use tradepost_extract::RequestParts;
/// use http::{Method, Uri};
///
/// let parts = RequestParts::builder()
///     .method(Method::GET)
///     .uri(Uri::from_static("/items/3?q=hello"))
///     .path_param("item_id", "3")
///     .build();
///
/// assert_eq!(parts.path(), "/items/3");
/// assert_eq!(parts.query_string(), Some("q=hello"));
/// assert_eq!(parts.path_params().get("item_id"), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestParts {
    method: Method,
    uri: Uri,
    body: Bytes,
    path_params: Params,
}

impl RequestParts {
    /// Creates request parts from a matched request.
    #[must_use]
    pub fn new(method: Method, uri: Uri, body: Bytes, path_params: Params) -> Self {
        Self {
            method,
            uri,
            body,
            path_params,
        }
    }

    /// Returns a builder, mainly for tests.
    #[must_use]
    pub fn builder() -> RequestPartsBuilder {
        RequestPartsBuilder::default()
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path portion of the request target.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// The query string, if the target carried one.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// The raw request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The path parameters captured by routing.
    #[must_use]
    pub fn path_params(&self) -> &Params {
        &self.path_params
    }
}

/// Builder for [`RequestParts`].
#[derive(Debug, Default)]
pub struct RequestPartsBuilder {
    method: Option<Method>,
    uri: Option<Uri>,
    body: Bytes,
    path_params: Params,
}

impl RequestPartsBuilder {
    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the request target.
    #[must_use]
    pub fn uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds one captured path parameter.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push(name, value);
        self
    }

    /// Builds the parts.
    ///
    /// # Panics
    ///
    /// Panics if method or uri were not set.
    #[must_use]
    pub fn build(self) -> RequestParts {
        RequestParts {
            method: self.method.expect("method is required"),
            uri: self.uri.expect("uri is required"),
            body: self.body,
            path_params: self.path_params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_accessors() {
        let parts = RequestParts::builder()
            .method(Method::POST)
            .uri(Uri::from_static("/items/"))
            .body(r#"{"name":"n"}"#)
            .build();

        assert_eq!(parts.method(), &Method::POST);
        assert_eq!(parts.path(), "/items/");
        assert_eq!(parts.query_string(), None);
        assert_eq!(parts.body().as_ref(), br#"{"name":"n"}"#);
        assert!(parts.path_params().is_empty());
    }

    #[test]
    fn test_query_string_split() {
        let parts = RequestParts::builder()
            .method(Method::GET)
            .uri(Uri::from_static("/users/1/items/a?q=fixedquery&short=true"))
            .build();

        assert_eq!(parts.path(), "/users/1/items/a");
        assert_eq!(parts.query_string(), Some("q=fixedquery&short=true"));
    }
}
