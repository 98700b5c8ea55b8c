mod common;

use axum_test::TestServer;
use serde_json::json;
use shortlink::store::MappingStore;

#[tokio::test]
async fn test_shorten_generates_code() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::TEST_BASE_URL, code)
    );
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "has-dash_ok"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "has-dash_ok");
    assert_eq!(
        body["short_url"],
        format!("{}/has-dash_ok", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.post("/").json(&json!({})).await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.post("/").json(&json!({ "url": "not-a-url" })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_custom_code_too_short() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "custom_code": "ab" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_custom_code_with_space() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "custom_code": "has space" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_empty_custom_code_falls_back_to_generation() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "custom_code": "" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_shorten_custom_code_taken() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let first = server
        .post("/")
        .json(&json!({
            "url": "https://example.com/first",
            "custom_code": "taken"
        }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/")
        .json(&json!({
            "url": "https://example.com/second",
            "custom_code": "taken"
        }))
        .await;
    assert_eq!(second.status_code(), 409);

    let body = second.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");

    // The existing mapping is left unchanged
    let stored = store.lookup("taken").await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://example.com/first"));
}

#[tokio::test]
async fn test_shorten_ttl_zero_means_no_expiry() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "forever",
            "ttl": 0
        }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert!(store.lookup("forever").await.unwrap().is_some());
}
