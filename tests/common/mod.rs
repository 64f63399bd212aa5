#![allow(dead_code)]
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use swimlog::{
    db,
    routes::{self, AppState},
};
use tower::ServiceExt;

/// 메모리 DB 위에 API만 서빙하는 라우터
pub async fn test_app() -> Router {
    test_app_with_pool().await.0
}

/// 저장소를 직접 조작해야 하는 테스트용: 라우터와 같은 풀을 함께 돌려줍니다.
pub async fn test_app_with_pool() -> (Router, SqlitePool) {
    let pool = db::connect_in_memory().await.expect("in-memory pool");
    (routes::app(AppState { pool: pool.clone() }, None), pool)
}

/// 요청 하나를 보내고 상태 코드와 JSON 본문을 돌려줍니다.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn create(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/v1/practices", Some(body)).await
}

pub async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/api/v1/practices", None).await;
    assert_eq!(status, StatusCode::OK);
    body["practices"].as_array().cloned().unwrap_or_default()
}
