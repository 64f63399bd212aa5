//! # 수영 연습 기록 모델 정의
//!
//! ## 구조체 역할
//! - `PracticeRecord`: DB에 저장된 연습 기록 (응답용)
//! - `CreatePracticeInput`: 검증을 통과한, 아직 저장되지 않은 새 기록
//! - `RawPracticeInput`: 클라이언트가 보낸 가공 전 JSON 본문
//!
//! 입력은 `RawPracticeInput` → (강제 변환 + 검증) → `CreatePracticeInput` → (저장) → `PracticeRecord`
//! 순서로 흘러갑니다.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// 연습 기록 엔티티 — `swimming_practices` 테이블 한 행에 대응합니다.
///
/// DB에는 날짜가 `YYYY-MM-DD` 문자열로 저장되지만, 여기서는 항상
/// 해당 날짜의 UTC 자정으로 표현됩니다. 변환은 `db::practices`에서만 합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeRecord {
    /// 저장소가 부여하는 증가형 식별자
    pub id: i64,
    /// 연습 날짜 (UTC 자정)
    pub date: DateTime<Utc>,
    /// 연습 시간(분), 1 이상
    pub duration_minutes: i64,
    /// 수영 거리(미터), 0보다 큼. 소수 허용
    pub distance_meters: f64,
    /// 메모. 빈 문자열은 저장되지 않고 항상 None(null)으로 표현됩니다.
    pub notes: Option<String>,
    /// 저장 시각 (표시용, 정렬에는 사용하지 않음)
    pub created_at: DateTime<Utc>,
}

/// 검증된 생성 입력
///
/// 범위 규칙은 `validator` derive로 표현합니다.
/// 타입 변환(문자열 → 숫자 등)은 `services::validation`에서 먼저 끝난 상태입니다.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreatePracticeInput {
    /// 연습 날짜. 시간 부분은 저장 시 버려집니다.
    pub date: DateTime<Utc>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub duration_minutes: i64,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub distance_meters: f64,
    /// 빈 문자열도 이 단계에서는 허용됩니다.
    pub notes: Option<String>,
}

/// 연습 생성 요청 — `POST /api/v1/practices`의 요청 본문입니다.
///
/// 모든 필드를 `serde_json::Value`로 받는 이유: 폼에서 오는 값은
/// 문자열일 수도, 숫자일 수도 있으므로 변환 규칙을 직접 적용해야 합니다.
/// 필드가 없거나 null이면 None이 됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPracticeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
}

/// 달력 날짜를 그 날의 UTC 자정으로 바꿉니다.
///
/// 날짜만 있는 값이 시간대 때문에 하루 밀리지 않도록, 날짜 ↔ 시각 변환은 모두 이 함수를 거칩니다.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
