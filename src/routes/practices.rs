//! # 연습 기록 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/practices | `list_practices` | 날짜 최신순 전체 목록 |
//! | POST | /api/v1/practices | `create_practice` | 새 연습 기록 생성 |

use crate::{error::AppError, models::*, routes::AppState, services};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

/// `GET /api/v1/practices` → `{ "practices": [...] }`
pub async fn list_practices(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let practices = services::get_practices(&state.pool).await?;
    Ok(Json(json!({ "practices": practices })))
}

/// `POST /api/v1/practices` → `201 Created` + 생성된 기록
///
/// 본문의 각 필드는 아무 JSON 값이나 올 수 있고, 검증 실패 시 400과 함께
/// 실패한 필드 목록을 돌려줍니다.
pub async fn create_practice(
    State(state): State<AppState>,
    Json(raw): Json<RawPracticeInput>,
) -> Result<(StatusCode, Json<PracticeRecord>), AppError> {
    let practice = services::create_practice(&state.pool, &raw).await?;
    Ok((StatusCode::CREATED, Json(practice)))
}
