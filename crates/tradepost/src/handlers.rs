//! The route handler set.
//!
//! Every handler is a pure function from already-validated inputs to a
//! JSON payload. Handlers share no mutable state; the only shared datum is
//! the read-only [`ITEMS_DB`] fixture. Extraction and validation run
//! upstream, so invalid input never reaches a handler and handlers raise
//! no errors.

use crate::models::{IndexWeights, Item, ModelName, User};
use serde_json::{json, Value};

/// Read-only fixture list; never mutated at runtime.
pub const ITEMS_DB: [&str; 6] = ["Foo", "Bar", "Baz", "Laz", "Bat", "Ball"];

/// `GET /`
pub fn root() -> Value {
    json!({"message": "Hello Person. We are doing a request-handling tutorial from scratch."})
}

/// `GET /users/me`
pub fn read_user_me() -> Value {
    json!({"user_id": "the current user"})
}

/// `GET /users/{user_id}`
pub fn read_user(user_id: &str) -> Value {
    json!({"user_id": user_id})
}

/// First registration for `GET /users/`; this is the payload callers see.
pub fn read_users_dupe() -> Value {
    json!(["All", "Users"])
}

/// Second registration for `GET /users/`; dead by routing precedence.
pub fn read_users() -> Value {
    json!(["One", "User"])
}

/// `GET /models/{model_name}`
///
/// The match is exhaustive over the closed enumeration, so there is no
/// fallback arm: an unmapped value cannot reach this point.
pub fn get_model(model_name: ModelName) -> Value {
    match model_name {
        ModelName::ModelX => {
            json!({"model_name": model_name, "message": "This is a meh car"})
        }
        ModelName::ModelY => {
            json!({"model_name": model_name, "message": "This is also a meh car"})
        }
    }
}

/// `GET /items/`, paging through the fixture list.
pub fn list_items(skip: usize, limit: usize) -> Value {
    let end = skip.saturating_add(limit).min(ITEMS_DB.len());
    let start = skip.min(end);
    let items: Vec<Value> = ITEMS_DB[start..end]
        .iter()
        .map(|name| json!({"item_name": name}))
        .collect();
    json!(items)
}

/// `GET /items/{item_id}`
pub fn read_items(item_id: i64, q: &str) -> Value {
    let mut payload = json!({"item_id": item_id});
    if !q.is_empty() {
        payload["q"] = json!(q);
    }
    payload
}

/// `GET /users/{user_id}/items/{item_id}`
pub fn read_user_item(user_id: i64, item_id: &str, q: Option<&str>, short: bool) -> Value {
    let mut payload = json!({"item_id": item_id, "owner_id": user_id});
    if let Some(q) = q {
        if !q.is_empty() {
            payload["q"] = json!(q);
        }
    }
    if !short {
        payload["description"] =
            json!("This is an amazing item that has a long description");
    }
    payload
}

/// `POST /items/`
pub fn create_item(item: Item) -> Value {
    let mut payload = json!({
        "name": item.name,
        "description": item.description,
        "price": item.price,
        "tax": item.tax,
        "tags": item.tags,
        "image": item.image,
    });
    // A tax of exactly zero is treated the same as an absent tax; the
    // response then carries no total_price key.
    if let Some(tax) = item.tax {
        if tax != 0.0 {
            payload["total_price"] = json!(item.price + tax);
        }
    }
    payload
}

/// `POST /images/multiple/`, echoing the validated sequence unchanged.
pub fn create_multiple_images(images: Vec<crate::models::Image>) -> Value {
    json!(images)
}

/// `POST /index-weights/`, echoing the validated mapping unchanged.
pub fn create_index_weights(weights: IndexWeights) -> Value {
    json!(weights)
}

/// `PUT /items/{item_id}`
pub fn update_item(item_id: i64, item: Item, user: User, q: Option<&str>) -> Value {
    let mut payload = json!({"item_id": item_id, "item": item, "user": user});
    if let Some(q) = q {
        if !q.is_empty() {
            payload["q"] = json!(q);
        }
    }
    payload
}
