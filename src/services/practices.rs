//! # 연습 기록 서비스
//!
//! 호출자에게 정확히 두 가지 작업만 노출합니다:
//! - `create_practice()`: 검증 → 저장
//! - `get_practices()`: 날짜 최신순 전체 조회
//!
//! 각 호출은 독립된 단일 저장소 작업이며, 캐시나 재시도는 없습니다.
//! 검증 에러와 저장소 에러는 가공하지 않고 그대로 전파합니다.

use crate::db;
use crate::error::AppError;
use crate::models::{PracticeRecord, RawPracticeInput};
use crate::services::validation::validate_create_input;
use sqlx::SqlitePool;

/// 입력을 검증한 뒤 저장하고, 생성된 기록을 반환합니다.
pub async fn create_practice(
    pool: &SqlitePool,
    raw: &RawPracticeInput,
) -> Result<PracticeRecord, AppError> {
    let input = validate_create_input(raw)?;
    let practice = db::insert_practice(pool, &input).await?;
    tracing::info!(id = practice.id, "Created swimming practice");
    Ok(practice)
}

/// 모든 연습 기록을 날짜 최신순으로 반환합니다.
pub async fn get_practices(pool: &SqlitePool) -> Result<Vec<PracticeRecord>, AppError> {
    db::list_practices(pool).await
}
