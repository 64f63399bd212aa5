//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수와 라우터 구성입니다.
//! - `health`: 서버 상태 확인
//! - `practices`: 연습 기록 생성/조회

pub mod health;
pub mod practices;

pub use health::*;
pub use practices::*;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// `/api/v1` 아래의 API 라우터
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/practices", get(list_practices).post(create_practice))
        .route("/health", get(health_check))
        .with_state(state)
}

/// 전체 애플리케이션 라우터
///
/// `static_dir`가 존재하면 프론트엔드 정적 파일을 함께 서빙하고,
/// 찾을 수 없는 경로는 index.html로 돌려보냅니다 (SPA 라우팅).
pub fn app(state: AppState, static_dir: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().nest("/api/v1", api_router(state));

    let router = match static_dir.filter(|dir| Path::new(dir).exists()) {
        Some(dir) => {
            tracing::info!("Serving frontend static files from {}", dir);
            let index = Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => {
            tracing::warn!("Frontend directory not found, serving API only");
            router
        }
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}
