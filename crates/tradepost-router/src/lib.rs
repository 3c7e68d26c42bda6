//! # Tradepost Router
//!
//! An explicit, insertion-ordered route table.
//!
//! Unlike tree-based routers that rank static segments above parameters,
//! this table matches strictly in registration order and takes the first
//! (method, pattern) entry that fits. The service this crate serves relies
//! on that property twice: `/users/me` is registered ahead of
//! `/users/{user_id}` so the static route wins, and `GET /users/` is
//! registered twice with the second entry deliberately dead.
//!
//! # Example
//!
//! ```rust
//! use tradepost_router::RouteTable;
//! use http::Method;
//!
//! let table = RouteTable::new()
//!     .get("/", "root")
//!     .get("/models/{model_name}", "get_model")
//!     .post("/items/", "create_item");
//!
//! let m = table.match_route(&Method::GET, "/models/Model%20X").unwrap();
//! assert_eq!(m.operation_id, "get_model");
//! assert_eq!(m.params.get("model_name"), Some("Model X"));
//! ```

#![doc(html_root_url = "https://docs.rs/tradepost-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod params;
mod pattern;
mod table;

pub use params::Params;
pub use pattern::PathPattern;
pub use table::{RouteMatch, RouteTable};
