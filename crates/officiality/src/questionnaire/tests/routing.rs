use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::questionnaire::Schema;

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialises")))
        .expect("request builds")
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn classify_flat_route_returns_verdict() {
    let (service, _) = build_service(Schema::Flat);
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/classify/flat",
            json!({
                "held_by_authority": true,
                "doc_type_choice": "ledger",
                "ready_for_notation": true,
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["officiality"]["is"], json!(true));
    assert_eq!(body["officiality"]["out_of_scope"], json!(false));
    assert!(body["officiality"]["reason"]
        .as_str()
        .expect("reason is text")
        .contains("Ch 2, art 10 ph 2 p. 1 FPA"));
}

#[tokio::test]
async fn classify_nested_route_returns_null_when_pending() {
    let (service, _) = build_service(Schema::Nested);
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/classify/nested",
            json!({ "held_by_authority": true }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "officiality": null }));
}

#[tokio::test]
async fn session_lifecycle_over_http() {
    let (service, _) = build_service(Schema::Nested);
    let router = router_with_service(service);

    let created = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/sessions",
            json!({ "schema": "flat" }),
        ))
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    assert_eq!(created["schema"], json!("flat"));
    assert_eq!(created["status"], json!("pending"));
    let id = created["session_id"].as_str().expect("id").to_string();

    let answered = router
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/v1/sessions/{id}"),
            json!({ "held_by_authority": true, "doc_type_choice": "memoranda", "riksdag_record": true }),
        ))
        .await
        .expect("router responds");
    assert_eq!(answered.status(), StatusCode::OK);
    let answered = json_body(answered).await;
    assert_eq!(answered["status"], json!("decided"));
    assert_eq!(answered["officiality"]["is"], Value::Null);
    assert_eq!(answered["officiality"]["out_of_scope"], json!(true));

    let reset = router
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/v1/sessions/{id}/reset"),
        ))
        .await
        .expect("router responds");
    assert_eq!(reset.status(), StatusCode::OK);
    let reset = json_body(reset).await;
    assert_eq!(reset["officiality"], Value::Null);
    assert_eq!(reset["answers"]["held_by_authority"], Value::Null);

    let deleted = router
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/api/v1/sessions/{id}")))
        .await
        .expect("router responds");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = router
        .oneshot(empty_request(Method::GET, &format!("/api/v1/sessions/{id}")))
        .await
        .expect("router responds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn start_without_body_uses_default_schema() {
    let (service, _) = build_service(Schema::Nested);
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request(Method::POST, "/api/v1/sessions"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["schema"], json!("nested"));
}

#[tokio::test]
async fn invalid_answers_are_unprocessable() {
    let (service, _) = build_service(Schema::Nested);
    let record = service.start(None).expect("session starts");
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/v1/sessions/{}", record.id.0),
            json!({ "has_arrived": "soon" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error text")
        .starts_with("invalid answer"));
}

#[tokio::test]
async fn unknown_schema_is_rejected() {
    let (service, _) = build_service(Schema::Nested);
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/sessions",
            json!({ "schema": "graph" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn misspelled_answer_keys_are_unprocessable() {
    let (service, _) = build_service(Schema::Flat);
    let record = service.start(None).expect("session starts");
    let router = router_with_service(service);

    let patched = router
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/api/v1/sessions/{}", record.id.0),
            json!({ "heldByAuthority": false }),
        ))
        .await
        .expect("router responds");
    assert_eq!(patched.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(patched).await["error"]
        .as_str()
        .expect("error text")
        .contains("heldByAuthority"));

    let classified = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/classify/nested",
            json!({ "held_by_autority": false }),
        ))
        .await
        .expect("router responds");
    assert_eq!(classified.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
