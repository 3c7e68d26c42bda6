//! The insertion-ordered route table.
//!
//! Routes are matched by scanning the table in registration order and
//! taking the first (method, pattern) entry that matches. The precedence
//! is therefore explicit and deterministic: registering `/users/me` before
//! `/users/{user_id}` makes the static route win, and registering the same
//! (method, pattern) twice makes the second entry permanently dead.

use http::Method;

use crate::{Params, PathPattern};

/// One registered route.
#[derive(Debug, Clone)]
struct Route {
    method: Method,
    pattern: PathPattern,
    operation_id: String,
}

/// A successful route match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Identifier of the operation bound to the matched route.
    pub operation_id: &'a str,
    /// Parameters captured from the request path.
    pub params: Params,
}

/// An explicit, ordered table of (method, path-pattern) → operation.
///
/// # Example
///
/// ```rust
/// use tradepost_router::RouteTable;
/// use http::Method;
///
/// let table = RouteTable::new()
///     .get("/users/me", "read_user_me")
///     .get("/users/{user_id}", "read_user");
///
/// let m = table.match_route(&Method::GET, "/users/me").unwrap();
/// assert_eq!(m.operation_id, "read_user_me");
///
/// let m = table.match_route(&Method::GET, "/users/42").unwrap();
/// assert_eq!(m.operation_id, "read_user");
/// assert_eq!(m.params.get("user_id"), Some("42"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route. Later registrations of an identical
    /// (method, pattern) pair are retained but never matched.
    #[must_use]
    pub fn register(
        mut self,
        method: Method,
        pattern: &str,
        operation_id: impl Into<String>,
    ) -> Self {
        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(pattern),
            operation_id: operation_id.into(),
        });
        self
    }

    /// Registers a GET route.
    #[must_use]
    pub fn get(self, pattern: &str, operation_id: impl Into<String>) -> Self {
        self.register(Method::GET, pattern, operation_id)
    }

    /// Registers a POST route.
    #[must_use]
    pub fn post(self, pattern: &str, operation_id: impl Into<String>) -> Self {
        self.register(Method::POST, pattern, operation_id)
    }

    /// Registers a PUT route.
    #[must_use]
    pub fn put(self, pattern: &str, operation_id: impl Into<String>) -> Self {
        self.register(Method::PUT, pattern, operation_id)
    }

    /// Matches a request against the table in registration order.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| {
                route.pattern.match_path(path).map(|params| RouteMatch {
                    operation_id: &route.operation_id,
                    params,
                })
            })
    }

    /// Returns true if any route's pattern matches the path, regardless of
    /// method. Used to distinguish 404 from 405.
    #[must_use]
    pub fn path_exists(&self, path: &str) -> bool {
        self.routes
            .iter()
            .any(|route| route.pattern.match_path(path).is_some())
    }

    /// Returns the number of registered routes, dead entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
