//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use inverse_cache::{api::create_router, AppState, InverseResolver};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (AppState, Router) {
    let state = AppState::new(InverseResolver::default());
    (state.clone(), create_router(state))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn assert_matrix_close(actual: &Value, expected: &[&[f64]]) {
    let rows = actual.as_array().expect("matrix should be an array of rows");
    assert_eq!(rows.len(), expected.len());
    for (row, want) in rows.iter().zip(expected) {
        let row = row.as_array().expect("row should be an array");
        assert_eq!(row.len(), want.len());
        for (got, want) in row.iter().zip(want.iter()) {
            let got = got.as_f64().unwrap();
            assert!((got - want).abs() < 1e-12, "{} != {}", got, want);
        }
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Resolve Flow ==

#[tokio::test]
async fn test_resolve_reset_resolve_flow() {
    let (_, app) = create_test_app();

    let (status, _) = send(
        &app,
        json_request("POST", "/matrix", json!({"matrix": [[2.0, 0.0], [0.0, 2.0]]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, first) = send(&app, empty_request("GET", "/inverse")).await;
    assert_eq!(status, StatusCode::OK);
    assert_matrix_close(&first["inverse"], &[&[0.5, 0.0], &[0.0, 0.5]]);
    assert_eq!(first["cached"], json!(false));

    let (_, second) = send(&app, empty_request("GET", "/inverse")).await;
    assert_eq!(second["inverse"], first["inverse"]);
    assert_eq!(second["cached"], json!(true));

    let (status, reset) = send(&app, empty_request("POST", "/reset")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["slot"], json!("empty"));

    let (_, third) = send(&app, empty_request("GET", "/inverse")).await;
    assert_matrix_close(&third["inverse"], &[&[0.5, 0.0], &[0.0, 0.5]]);
    assert_eq!(third["cached"], json!(false));

    let (_, stats) = send(&app, empty_request("GET", "/stats")).await;
    assert_eq!(stats["hits"], json!(1));
    assert_eq!(stats["misses"], json!(2));
    assert_eq!(stats["computations"], json!(2));
    assert_eq!(stats["resets"], json!(1));
}

#[tokio::test]
async fn test_one_by_one() {
    let (_, app) = create_test_app();

    send(&app, json_request("POST", "/matrix", json!({"matrix": [[1.0]]}))).await;
    let (status, body) = send(&app, empty_request("GET", "/inverse")).await;

    assert_eq!(status, StatusCode::OK);
    assert_matrix_close(&body["inverse"], &[&[1.0]]);
}

// == Set / Get ==

#[tokio::test]
async fn test_put_replaces_and_invalidates() {
    let (state, app) = create_test_app();

    send(&app, json_request("POST", "/matrix", json!({"matrix": [[2.0]]}))).await;
    send(&app, empty_request("GET", "/inverse")).await;

    let (_, before) = send(&app, empty_request("GET", "/matrix")).await;
    assert_eq!(before["slot"], json!("populated"));

    let (status, _) = send(&app, json_request("PUT", "/matrix", json!({"matrix": [[4.0]]}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, empty_request("GET", "/matrix")).await;
    assert_eq!(after["matrix"], json!([[4.0]]));
    assert_eq!(after["slot"], json!("empty"));

    let (_, inverse) = send(&app, empty_request("GET", "/inverse")).await;
    assert_matrix_close(&inverse["inverse"], &[&[0.25]]);
    assert_eq!(state.resolver.stats().computations, 2);
}

#[tokio::test]
async fn test_get_matrix_not_found() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, empty_request("GET", "/matrix")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_put_without_matrix() {
    let (_, app) = create_test_app();

    let (status, _) = send(&app, json_request("PUT", "/matrix", json!({"matrix": [[1.0]]}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Error Cases ==

#[tokio::test]
async fn test_empty_matrix_rejected() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, json_request("POST", "/matrix", json!({"matrix": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid argument"));
}

#[tokio::test]
async fn test_singular_matrix_fails_on_resolve() {
    let (_, app) = create_test_app();

    let (status, _) = send(
        &app,
        json_request("POST", "/matrix", json!({"matrix": [[1.0, 2.0], [2.0, 4.0]]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, empty_request("GET", "/inverse")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("singular"));

    let (_, current) = send(&app, empty_request("GET", "/matrix")).await;
    assert_eq!(current["slot"], json!("empty"));

    let (_, stats) = send(&app, empty_request("GET", "/stats")).await;
    assert_eq!(stats["failures"], json!(1));
}

#[tokio::test]
async fn test_non_square_accepted_then_fails() {
    let (_, app) = create_test_app();

    let (status, _) = send(
        &app,
        json_request("POST", "/matrix", json!({"matrix": [[1.0, 2.0, 3.0]]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, empty_request("GET", "/inverse")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("square"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let (_, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/matrix")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_ragged_matrix_rejected() {
    let (_, app) = create_test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/matrix", json!({"matrix": [[1.0, 2.0], [3.0]]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid argument"));

    send(&app, json_request("POST", "/matrix", json!({"matrix": [[2.0]]}))).await;
    let (status, body) = send(
        &app,
        json_request("PUT", "/matrix", json!({"matrix": [[1.0], [2.0, 3.0]]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_non_finite_entry_fails_on_resolve() {
    let (state, app) = create_test_app();

    send(&app, json_request("POST", "/matrix", json!({"matrix": [[1.0]]}))).await;
    {
        let mut guard = state.matrix.write().await;
        let cached = guard.as_mut().unwrap();
        cached.set(inverse_cache::Matrix::from_rows(vec![vec![f64::INFINITY]]).unwrap());
    }

    let (status, body) = send(&app, empty_request("GET", "/inverse")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("non-finite"));
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert!(body.get("timestamp").is_some());
}
