//! Request dispatch.
//!
//! [`App::handle`] is the single entry point: it resolves the route,
//! extracts and validates the operation's inputs, and shapes the outcome
//! into a [`Response`]. Unresolvable paths yield 404, resolvable paths
//! probed with the wrong method yield 405, and any extraction or
//! validation failure yields 422 with the full violation list.

use bytes::Bytes;
use http::{Method, StatusCode, Uri};
use serde::Deserialize;
use serde_json::{json, Value};
use tradepost_extract::{path_param, FromRequest, QueryParams, RequestParts, Valid};
use tradepost_router::RouteTable;
use tradepost_validate::{rules, FieldPath, Validate, ValidationErrors};

use crate::handlers;
use crate::models::{Image, IndexWeights, Item, ModelName, User};
use crate::routes::{ops, route_table};

/// The outcome of dispatching one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,
    /// JSON payload.
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    fn error(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({"error": {"code": code, "message": message.into()}}),
        }
    }

    fn bad_request() -> Self {
        Self::error(
            StatusCode::BAD_REQUEST,
            "MALFORMED_TARGET",
            "request target could not be parsed",
        )
    }

    fn not_found() -> Self {
        Self::error(StatusCode::NOT_FOUND, "NOT_FOUND", "no such route")
    }

    fn method_not_allowed() -> Self {
        Self::error(
            StatusCode::METHOD_NOT_ALLOWED,
            "METHOD_NOT_ALLOWED",
            "path exists but not for this method",
        )
    }

    fn validation_failed(errors: &ValidationErrors) -> Self {
        let mut response = Self::error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_FAILED",
            errors.to_string(),
        );
        response.body["error"]["violations"] =
            serde_json::to_value(errors).unwrap_or(Value::Null);
        response
    }
}

/// The dispatchable service: a route table plus the handler bindings.
///
/// # Example
///
/// ```rust
/// use http::{Method, StatusCode};
/// use tradepost::App;
///
/// let app = App::new();
/// let response = app.handle(Method::GET, "/users/me", "");
/// assert_eq!(response.status, StatusCode::OK);
/// assert_eq!(response.body["user_id"], "the current user");
/// ```
#[derive(Debug, Clone)]
pub struct App {
    table: RouteTable,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the service with its full route table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: route_table(),
        }
    }

    /// Dispatches one request and returns the shaped response.
    pub fn handle(&self, method: Method, target: &str, body: impl Into<Bytes>) -> Response {
        let uri = match target.parse::<Uri>() {
            Ok(uri) => uri,
            Err(error) => {
                tracing::warn!(request_target = target, %error, "malformed request target");
                return Response::bad_request();
            }
        };

        let Some(matched) = self.table.match_route(&method, uri.path()) else {
            if self.table.path_exists(uri.path()) {
                tracing::debug!(%method, path = uri.path(), "method not allowed");
                return Response::method_not_allowed();
            }
            tracing::debug!(%method, path = uri.path(), "no route");
            return Response::not_found();
        };

        tracing::debug!(
            %method,
            path = uri.path(),
            operation = matched.operation_id,
            "matched route"
        );

        let operation_id = matched.operation_id;
        let parts = RequestParts::new(method, uri, body.into(), matched.params);

        match invoke(operation_id, &parts) {
            Some(Ok(payload)) => Response::ok(payload),
            Some(Err(errors)) => {
                tracing::warn!(operation = operation_id, %errors, "request rejected");
                Response::validation_failed(&errors)
            }
            None => Response::not_found(),
        }
    }
}

/// Binds an operation identifier to its extraction and handler.
///
/// Returns `None` for an identifier the table never produces.
fn invoke(operation_id: &str, parts: &RequestParts) -> Option<Result<Value, ValidationErrors>> {
    let payload = match operation_id {
        ops::ROOT => Ok(handlers::root()),
        ops::READ_USER_ME => Ok(handlers::read_user_me()),
        ops::READ_USER => read_user(parts),
        ops::READ_USERS_DUPE => Ok(handlers::read_users_dupe()),
        ops::READ_USERS => Ok(handlers::read_users()),
        ops::GET_MODEL => get_model(parts),
        ops::LIST_ITEMS => list_items(parts),
        ops::READ_ITEMS => read_items(parts),
        ops::READ_USER_ITEM => read_user_item(parts),
        ops::CREATE_ITEM => create_item(parts),
        ops::CREATE_MULTIPLE_IMAGES => create_multiple_images(parts),
        ops::CREATE_INDEX_WEIGHTS => create_index_weights(parts),
        ops::UPDATE_ITEM => update_item(parts),
        _ => return None,
    };
    Some(payload)
}

fn read_user(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let user_id: String = path_param(parts, "user_id")?;
    Ok(handlers::read_user(&user_id))
}

fn get_model(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let raw: String = path_param(parts, "model_name")?;
    let model_name = ModelName::from_literal(&raw)?;
    Ok(handlers::get_model(model_name))
}

fn list_items(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let query = QueryParams::from_request(parts)?;

    let mut errors = ValidationErrors::new();
    let skip = errors.check(query.get_or("skip", 0_usize));
    let limit = errors.check(query.get_or("limit", 10_usize));

    match (skip, limit) {
        (Some(skip), Some(limit)) if errors.is_empty() => {
            Ok(handlers::list_items(skip, limit))
        }
        _ => Err(errors),
    }
}

fn read_items(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let query = QueryParams::from_request(parts)?;

    // Path and query failures are reported together.
    let mut errors = ValidationErrors::new();
    let item_id = errors.check(path_param::<i64>(parts, "item_id")).and_then(|id| {
        errors.check(rules::ge_i64(FieldPath::field("item_id"), id, 1).map(|()| id))
    });
    let q = errors.check(query.require::<String>("q"));

    match (item_id, q) {
        (Some(item_id), Some(q)) if errors.is_empty() => {
            Ok(handlers::read_items(item_id, &q))
        }
        _ => Err(errors),
    }
}

fn read_user_item(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let query = QueryParams::from_request(parts)?;

    let mut errors = ValidationErrors::new();
    let user_id = errors.check(path_param::<i64>(parts, "user_id"));
    let item_id = errors.check(path_param::<String>(parts, "item_id"));
    let q = errors.check(query.get::<String>("q"));
    let short = errors.check(query.flag("short", false));

    match (user_id, item_id, q, short) {
        (Some(user_id), Some(item_id), Some(q), Some(short)) if errors.is_empty() => {
            Ok(handlers::read_user_item(user_id, &item_id, q.as_deref(), short))
        }
        _ => Err(errors),
    }
}

fn create_item(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let Valid(item) = Valid::<Item>::from_request(parts)?;
    Ok(handlers::create_item(item))
}

fn create_multiple_images(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let Valid(images) = Valid::<Vec<Image>>::from_request(parts)?;
    Ok(handlers::create_multiple_images(images))
}

fn create_index_weights(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let weights = IndexWeights::from_request(parts)?;
    Ok(handlers::create_index_weights(weights))
}

/// Composite body for `PUT /items/{item_id}`: both embedded records are
/// required, and their violations are re-rooted under their field names.
#[derive(Debug, Deserialize)]
struct UpdateItemBody {
    item: Item,
    user: User,
}

impl Validate for UpdateItemBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(item_errors) = self.item.validate() {
            errors.merge(item_errors.under(&FieldPath::field("item")));
        }
        if let Err(user_errors) = self.user.validate() {
            errors.merge(user_errors.under(&FieldPath::field("user")));
        }
        errors.into_result()
    }
}

fn update_item(parts: &RequestParts) -> Result<Value, ValidationErrors> {
    let query = QueryParams::from_request(parts)?;

    let mut errors = ValidationErrors::new();
    let item_id = errors.check(path_param::<i64>(parts, "item_id")).and_then(|id| {
        errors.check(rules::gt_i64(FieldPath::field("item_id"), id, 0).map(|()| id))
    });
    let q = errors.check(query.get::<String>("q"));

    match (item_id, q) {
        (Some(item_id), Some(q)) if errors.is_empty() => {
            let Valid(body) = Valid::<UpdateItemBody>::from_request(parts)?;
            Ok(handlers::update_item(item_id, body.item, body.user, q.as_deref()))
        }
        _ => Err(errors),
    }
}
