//! End-to-end request tests: every route dispatched through [`App::handle`]
//! with assertions on the exact response shapes.

use http::{Method, StatusCode};
use serde_json::{json, Value};
use tradepost::App;

fn get(target: &str) -> tradepost::Response {
    App::new().handle(Method::GET, target, "")
}

fn post(target: &str, body: &'static str) -> tradepost::Response {
    App::new().handle(Method::POST, target, body)
}

fn put(target: &str, body: &'static str) -> tradepost::Response {
    App::new().handle(Method::PUT, target, body)
}

fn violation_fields(response: &tradepost::Response) -> Vec<String> {
    response.body["error"]["violations"]
        .as_array()
        .expect("violations array")
        .iter()
        .map(|v| v["field"].as_str().expect("field string").to_owned())
        .collect()
}

#[test]
fn test_root() {
    let response = get("/");
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].is_string());
}

#[test]
fn test_read_user_me_beats_param_route() {
    let response = get("/users/me");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"user_id": "the current user"}));
}

#[test]
fn test_read_user_echoes_segment_as_string() {
    let response = get("/users/42");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"user_id": "42"}));
}

#[test]
fn test_users_collision_always_resolves_to_first_registration() {
    // The second GET /users/ registration is dead; repeated requests must
    // keep resolving identically.
    for _ in 0..3 {
        let response = get("/users/");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!(["All", "Users"]));
    }
}

#[test]
fn test_get_model_accepted_literals() {
    let response = get("/models/Model%20X");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"model_name": "Model X", "message": "This is a meh car"})
    );

    let response = get("/models/Model%20Y");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"model_name": "Model Y", "message": "This is also a meh car"})
    );
}

#[test]
fn test_get_model_rejects_outside_enumeration() {
    let response = get("/models/Tesla");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["code"], "VALIDATION_FAILED");

    let violation = &response.body["error"]["violations"][0];
    assert_eq!(violation["field"], "model_name");
    assert_eq!(violation["kind"], "enum_violation");
    assert_eq!(violation["accepted"], json!(["Model Y", "Model X"]));
}

#[test]
fn test_list_items_defaults() {
    let response = get("/items/");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {"item_name": "Foo"},
            {"item_name": "Bar"},
            {"item_name": "Baz"},
            {"item_name": "Laz"},
            {"item_name": "Bat"},
            {"item_name": "Ball"},
        ])
    );
}

#[test]
fn test_list_items_slicing() {
    let response = get("/items/?skip=2&limit=2");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{"item_name": "Baz"}, {"item_name": "Laz"}])
    );

    let response = get("/items/?skip=100");
    assert_eq!(response.body, json!([]));
}

#[test]
fn test_list_items_rejects_non_numeric_paging() {
    let response = get("/items/?skip=lots&limit=few");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["skip", "limit"]);
}

#[test]
fn test_read_items_with_required_query() {
    let response = get("/items/3?q=find");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"item_id": 3, "q": "find"}));
}

#[test]
fn test_read_items_empty_q_key_omitted() {
    let response = get("/items/3?q=");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"item_id": 3}));
}

#[test]
fn test_read_items_missing_q_is_rejected() {
    let response = get("/items/3");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["q"]);
}

#[test]
fn test_read_items_item_id_lower_bound() {
    let response = get("/items/0?q=x");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let violation = &response.body["error"]["violations"][0];
    assert_eq!(violation["field"], "item_id");
    assert_eq!(violation["constraint"], "ge=1");
}

#[test]
fn test_read_items_aggregates_path_and_query_failures() {
    // Non-numeric path segment and a missing required parameter are
    // reported together in one response.
    let response = get("/items/abc");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["item_id", "q"]);
}

#[test]
fn test_read_user_item_full_response() {
    let response = get("/users/1/items/a");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "item_id": "a",
            "owner_id": 1,
            "description": "This is an amazing item that has a long description",
        })
    );
}

#[test]
fn test_read_user_item_short_and_q() {
    let response = get("/users/1/items/a?q=look&short=true");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"item_id": "a", "owner_id": 1, "q": "look"}));

    // short=false keeps the description.
    let response = get("/users/1/items/a?q=look&short=false");
    assert_eq!(response.body["description"].as_str(), Some("This is an amazing item that has a long description"));
}

#[test]
fn test_read_user_item_rejects_non_numeric_user() {
    let response = get("/users/alice/items/a");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["user_id"]);
}

#[test]
fn test_create_item_with_tax_adds_total() {
    let response = post(
        "/items/",
        r#"{"name": "Hammer", "price": 10.0, "tax": 1.5}"#,
    );
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "name": "Hammer",
            "description": null,
            "price": 10.0,
            "tax": 1.5,
            "tags": [],
            "image": null,
            "total_price": 11.5,
        })
    );
}

#[test]
fn test_create_item_without_tax_has_no_total() {
    let response = post("/items/", r#"{"name": "Nail", "price": 0.1}"#);
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("total_price").is_none());
    assert_eq!(response.body["tax"], Value::Null);
}

#[test]
fn test_create_item_zero_tax_behaves_like_absent() {
    let response = post("/items/", r#"{"name": "Nail", "price": 0.1, "tax": 0.0}"#);
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("total_price").is_none());
    assert_eq!(response.body["tax"], json!(0.0));
}

#[test]
fn test_create_item_rejects_non_positive_price() {
    let response = post("/items/", r#"{"name": "Freebie", "price": 0.0}"#);
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let violation = &response.body["error"]["violations"][0];
    assert_eq!(violation["field"], "price");
    assert_eq!(violation["constraint"], "gt=0");
}

#[test]
fn test_create_item_aggregates_record_violations() {
    let long = "a".repeat(301);
    let body = format!(r#"{{"name": "n", "description": "{long}", "price": 0}}"#);
    let response = App::new().handle(Method::POST, "/items/", body);

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["description", "price"]);
}

#[test]
fn test_create_item_rejects_empty_body() {
    let response = post("/items/", "");
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["body"]);
}

#[test]
fn test_create_multiple_images_echoes_sequence() {
    let response = post(
        "/images/multiple/",
        r#"[{"url": "https://example.com/a.png", "name": "a"},
            {"url": "http://example.com/b.png", "name": "b"}]"#,
    );
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {"url": "https://example.com/a.png", "name": "a"},
            {"url": "http://example.com/b.png", "name": "b"},
        ])
    );
}

#[test]
fn test_create_multiple_images_rejects_bad_url_with_index() {
    let response = post(
        "/images/multiple/",
        r#"[{"url": "https://example.com/a.png", "name": "a"},
            {"url": "not a url", "name": "b"}]"#,
    );
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["[1].url"]);
}

#[test]
fn test_index_weights_echo_and_coercion() {
    let response = post("/index-weights/", r#"{"1": 10.5, "2": "3.25"}"#);
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"1": 10.5, "2": 3.25}));
}

#[test]
fn test_index_weights_rejects_non_integer_keys() {
    let response = post("/index-weights/", r#"{"first": 1.0}"#);
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["body.first"]);
}

#[test]
fn test_update_item_embeds_records_and_query() {
    let response = put(
        "/items/7?q=why",
        r#"{"item": {"name": "Hammer", "price": 10.0},
            "user": {"username": "smith", "name": "Smith"}}"#,
    );
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "item_id": 7,
            "item": {
                "name": "Hammer",
                "description": null,
                "price": 10.0,
                "tax": null,
                "tags": [],
                "image": null,
            },
            "user": {"username": "smith", "name": "Smith"},
            "q": "why",
        })
    );
}

#[test]
fn test_update_item_requires_positive_id() {
    let response = put(
        "/items/0",
        r#"{"item": {"name": "n", "price": 1.0},
            "user": {"username": "u", "name": "n"}}"#,
    );
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let violation = &response.body["error"]["violations"][0];
    assert_eq!(violation["field"], "item_id");
    assert_eq!(violation["constraint"], "gt=0");
}

#[test]
fn test_update_item_re_roots_embedded_violations() {
    let response = put(
        "/items/7",
        r#"{"item": {"name": "n", "price": 0.0},
            "user": {"username": "u", "name": "n"}}"#,
    );
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["item.price"]);
}

#[test]
fn test_update_item_missing_user_is_body_mismatch() {
    let response = put("/items/7", r#"{"item": {"name": "n", "price": 1.0}}"#);
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violation_fields(&response), vec!["body"]);
}

#[test]
fn test_unknown_path_is_404() {
    let response = get("/nothing/here");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "NOT_FOUND");
}

#[test]
fn test_known_path_wrong_method_is_405() {
    let response = get("/index-weights/");
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);

    let response = App::new().handle(Method::DELETE, "/items/3", "");
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
