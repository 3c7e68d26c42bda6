//! # Tradepost Extract
//!
//! Typed extraction of already-routed request data.
//!
//! Extractors turn the matched parts of a request (path captures, query
//! string, body bytes) into fully typed, constraint-checked values before
//! a handler ever runs. All failures are reported as
//! [`tradepost_validate::ValidationErrors`]; extraction has no error
//! vocabulary of its own.
//!
//! | Extractor | Source | Description |
//! |-----------|--------|-------------|
//! | [`path_param`] | path captures | Coerce one named capture to `T` |
//! | [`QueryParams`] | query string | Decoded pairs with typed accessors |
//! | [`Json<T>`] | body | Deserialize the body as JSON |
//! | [`Valid<T>`] | body | Deserialize and run declared constraints |
//!
//! # Example
//!
//! ```rust
//! use tradepost_extract::{path_param, FromRequest, QueryParams, RequestParts};
//! use http::{Method, Uri};
//!
//! let parts = RequestParts::builder()
//!     .method(Method::GET)
//!     .uri(Uri::from_static("/users/1/items/a?short=true"))
//!     .path_param("user_id", "1")
//!     .path_param("item_id", "a")
//!     .build();
//!
//! let user_id: i64 = path_param(&parts, "user_id").unwrap();
//! let query = QueryParams::from_request(&parts).unwrap();
//! assert_eq!(user_id, 1);
//! assert!(query.flag("short", false).unwrap());
//! ```

#![doc(html_root_url = "https://docs.rs/tradepost-extract/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod extract;
mod json;
mod path;
mod query;

pub use context::{RequestParts, RequestPartsBuilder};
pub use extract::FromRequest;
pub use json::{Json, Valid};
pub use path::path_param;
pub use query::QueryParams;

// Re-export the params type extractors read from.
pub use tradepost_router::Params;
