use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use math_helper::config::AppConfig;
use math_helper::routes::build_router;
use math_helper::search::SearchEngine;
use math_helper::state::AppState;

async fn call_raw(state: AppState, req: Request<Body>) -> (StatusCode, String) {
    let resp = build_router(Arc::new(state)).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn call(state: AppState, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = call_raw(state, req).await;
    (status, serde_json::from_str(&body).unwrap_or(Value::Null))
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health() {
    let req = Request::get("/api/v1/health").body(Body::empty()).unwrap();
    let (status, json) = call(AppState::default(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
}

#[tokio::test]
async fn categories_lists_all_six() {
    let req = Request::get("/api/v1/categories").body(Body::empty()).unwrap();
    let (_, json) = call(AppState::default(), req).await;
    let cats = json["categories"].as_array().unwrap();
    assert_eq!(cats.len(), 6);
    assert_eq!(cats[5], "general");
}

#[tokio::test]
async fn classify_returns_category_and_encoding() {
    let (status, json) = call(AppState::default(), post("/api/v1/classify", r#"{"problem":" 2 + 3 "}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["problem"], "2 + 3");
    assert_eq!(json["category"], "arithmetic");
    assert_eq!(json["encoded"], "2%20%2B%203");
}

#[tokio::test]
async fn advise_returns_full_record_in_engine_order() {
    let (status, json) = call(AppState::default(), post("/api/v1/advise", r#"{"problem":"sin(30 degrees)"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "trigonometry");
    assert_eq!(json["search_urls"].as_object().unwrap().len(), 4);
    assert_eq!(json["resources"].as_array().unwrap().len(), 2);

    // serde_json::Value sorts keys, so check the order on the wire.
    let (_, body) = call_raw(AppState::default(), post("/api/v1/advise", r#"{"problem":"sin(30 degrees)"}"#)).await;
    let positions: Vec<usize> = ["wolfram", "khan_academy", "mathway", "google"]
        .iter()
        .map(|k| body.find(&format!("\"{k}\":\"https://")).unwrap_or_else(|| panic!("missing {k}: {body}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {body}");
}

#[tokio::test]
async fn advise_uses_configured_engines() {
    let config = AppConfig {
        search_engines: vec![SearchEngine::new("ddg", "https://duckduckgo.com/?q=")],
        ..AppConfig::default()
    };
    let state = AppState::from_config(config).unwrap();
    let (_, json) = call(state, post("/api/v1/advise", r#"{"problem":"1/2"}"#)).await;
    assert_eq!(json["search_urls"]["ddg"], "https://duckduckgo.com/?q=1/2");
    assert!(json["search_urls"]["wolfram"].is_null());
}

#[test]
fn state_rejects_reserved_engine_id() {
    let config = AppConfig {
        search_engines: vec![SearchEngine::new("google", "https://g.example/?q=")],
        ..AppConfig::default()
    };
    assert!(AppState::from_config(config).is_err());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let (status, _) = call(AppState::default(), post("/api/v1/advise", "{")).await;
    assert!(status.is_client_error());
}
