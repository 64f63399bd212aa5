//! # 연습 기록 데이터베이스 쿼리 모듈
//!
//! `swimming_practices` 테이블에 대한 저장/조회 함수들입니다.
//!
//! 도메인 표현과 저장소 표현 사이의 변환은 **이 모듈에서만** 합니다.
//! 생성 경로와 조회 경로가 같은 변환 함수를 쓰므로 두 경로의 결과가 어긋나지 않습니다.
//!
//! | 필드 | 저장소 | 도메인 |
//! |------|--------|--------|
//! | `date` | `"YYYY-MM-DD"` 문자열 | `DateTime<Utc>` (UTC 자정) |
//! | `distance_meters` | REAL (또는 문자열로 저장된 십진수) | `f64` |
//! | `notes` | NULL 또는 비어 있지 않은 문자열 | `Option<String>` |
//! | `created_at` | RFC 3339 문자열 | `DateTime<Utc>` |

use crate::error::AppError;
use crate::models::{midnight_utc, CreatePracticeInput, PracticeRecord};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

/// 저장소에서 읽은 한 행. 도메인 타입으로 바꾸기 전 상태입니다.
///
/// `distance_meters`는 SELECT에서 `CAST(... AS REAL)`로 읽습니다.
/// 십진수를 문자열로 돌려주는 저장소 값도 여기서 숫자로 고정됩니다.
#[derive(Debug, sqlx::FromRow)]
struct PracticeRow {
    id: i64,
    date: String,
    duration_minutes: i64,
    distance_meters: f64,
    notes: Option<String>,
    created_at: String,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, date, duration_minutes,
           CAST(distance_meters AS REAL) AS distance_meters,
           notes, created_at
    FROM swimming_practices
"#;

/// 도메인 날짜 → 저장소 날짜 문자열 (UTC 기준 달력 날짜, 시간 부분은 버림)
pub fn date_to_storage(date: &DateTime<Utc>) -> String {
    date.date_naive().format("%Y-%m-%d").to_string()
}

/// 저장소 날짜 문자열 → 도메인 날짜 (그 날의 UTC 자정)
pub fn date_from_storage(stored: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDate::parse_from_str(stored, "%Y-%m-%d").map(midnight_utc)
}

/// 저장소 타임스탬프 문자열 → `DateTime<Utc>`
pub fn timestamp_from_storage(stored: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(stored).map(|dt| dt.with_timezone(&Utc))
}

/// 빈 메모는 NULL로 저장합니다.
pub fn normalize_notes(notes: Option<&str>) -> Option<&str> {
    notes.filter(|text| !text.is_empty())
}

impl TryFrom<PracticeRow> for PracticeRecord {
    type Error = sqlx::Error;

    fn try_from(row: PracticeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            date: date_from_storage(&row.date).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            duration_minutes: row.duration_minutes,
            distance_meters: row.distance_meters,
            notes: row.notes,
            created_at: timestamp_from_storage(&row.created_at)
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        })
    }
}

/// 새 연습 기록을 저장하고, 저장소가 채운 값(id, created_at)이 포함된 기록을 반환합니다.
///
/// 제약 조건 위반 등으로 저장소가 쓰기를 거부하면 `AppError::Database`가 그대로 전파됩니다.
pub async fn insert_practice(
    pool: &SqlitePool,
    input: &CreatePracticeInput,
) -> Result<PracticeRecord, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO swimming_practices (date, duration_minutes, distance_meters, notes)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(date_to_storage(&input.date))
    .bind(input.duration_minutes)
    .bind(input.distance_meters)
    .bind(normalize_notes(input.notes.as_deref()))
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    // 생성 직후 조회하여 DB 기본값이 적용된 완전한 기록을 반환합니다
    get_practice(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created practice".to_string()))
}

/// ID로 연습 기록 하나를 조회합니다.
pub async fn get_practice(pool: &SqlitePool, id: i64) -> Result<Option<PracticeRecord>, AppError> {
    let row = sqlx::query_as::<_, PracticeRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(PracticeRecord::try_from).transpose()?)
}

/// 모든 연습 기록을 날짜 최신순으로 조회합니다.
///
/// 같은 날짜의 기록은 저장된 순서(id 오름차순)를 유지합니다.
/// 기록이 없으면 빈 Vec을 반환합니다.
pub async fn list_practices(pool: &SqlitePool) -> Result<Vec<PracticeRecord>, AppError> {
    let rows = sqlx::query_as::<_, PracticeRow>(&format!(
        "{SELECT_COLUMNS} ORDER BY date DESC, id ASC"
    ))
    .fetch_all(pool)
    .await?;

    let practices = rows
        .into_iter()
        .map(PracticeRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(practices)
}
