//! The service route table.
//!
//! Registration order is load-bearing and mirrors the declaration order of
//! the operations: `/users/me` must precede `/users/{user_id}` or the
//! literal segment would be captured as a parameter, and the second
//! `GET /users/` registration is intentionally dead.

use tradepost_router::RouteTable;

/// Operation identifiers, one per registered handler.
pub mod ops {
    /// `GET /`
    pub const ROOT: &str = "root";
    /// `GET /users/me`
    pub const READ_USER_ME: &str = "read_user_me";
    /// `GET /users/{user_id}`
    pub const READ_USER: &str = "read_user";
    /// `GET /users/` (first registration; the live one)
    pub const READ_USERS_DUPE: &str = "read_users_dupe";
    /// `GET /users/` (second registration; never matched)
    pub const READ_USERS: &str = "read_users";
    /// `GET /models/{model_name}`
    pub const GET_MODEL: &str = "get_model";
    /// `GET /items/`
    pub const LIST_ITEMS: &str = "list_items";
    /// `GET /items/{item_id}`
    pub const READ_ITEMS: &str = "read_items";
    /// `GET /users/{user_id}/items/{item_id}`
    pub const READ_USER_ITEM: &str = "read_user_item";
    /// `POST /items/`
    pub const CREATE_ITEM: &str = "create_item";
    /// `POST /images/multiple/`
    pub const CREATE_MULTIPLE_IMAGES: &str = "create_multiple_images";
    /// `POST /index-weights/`
    pub const CREATE_INDEX_WEIGHTS: &str = "create_index_weights";
    /// `PUT /items/{item_id}`
    pub const UPDATE_ITEM: &str = "update_item";
}

/// Builds the full route table in declaration order.
#[must_use]
pub fn route_table() -> RouteTable {
    RouteTable::new()
        .get("/", ops::ROOT)
        .get("/users/me", ops::READ_USER_ME)
        .get("/users/{user_id}", ops::READ_USER)
        .get("/users/", ops::READ_USERS_DUPE)
        .get("/users/", ops::READ_USERS)
        .get("/models/{model_name}", ops::GET_MODEL)
        .get("/items/", ops::LIST_ITEMS)
        .get("/items/{item_id}", ops::READ_ITEMS)
        .get("/users/{user_id}/items/{item_id}", ops::READ_USER_ITEM)
        .post("/items/", ops::CREATE_ITEM)
        .post("/images/multiple/", ops::CREATE_MULTIPLE_IMAGES)
        .post("/index-weights/", ops::CREATE_INDEX_WEIGHTS)
        .put("/items/{item_id}", ops::UPDATE_ITEM)
}
