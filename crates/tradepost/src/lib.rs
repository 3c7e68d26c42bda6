//! A small trading-post catalog service built on explicit routing,
//! extraction, and validation layers.
//!
//! The crate wires together three concerns that the sibling crates keep
//! separate:
//!
//! - `tradepost-router` resolves a (method, path) pair to an operation in
//!   strict registration order;
//! - `tradepost-extract` pulls typed values out of path captures, the
//!   query string, and the JSON body;
//! - `tradepost-validate` checks declared constraints and aggregates every
//!   violation into one report.
//!
//! [`App`] is the entry point:
//!
//! ```rust
//! use http::{Method, StatusCode};
//! use tradepost::App;
//!
//! let app = App::new();
//!
//! let response = app.handle(Method::GET, "/items/3?q=find", "");
//! assert_eq!(response.status, StatusCode::OK);
//! assert_eq!(response.body["item_id"], 3);
//!
//! let response = app.handle(Method::GET, "/models/Tesla", "");
//! assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
//! ```

#![doc(html_root_url = "https://docs.rs/tradepost/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dispatch;
pub mod handlers;
pub mod models;
mod routes;

pub use dispatch::{App, Response};
pub use routes::{ops, route_table};
