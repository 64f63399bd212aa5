//! # 연습 기록 보드 (화면 상태)
//!
//! 입력 폼 초안과 화면에 표시할 기록 목록을 하나의 값으로 묶어 다룹니다.
//! 전역 상태 없이, 상태를 값으로 받아 새 상태를 돌려줍니다.
//!
//! ## 흐름
//! ```text
//! PracticeBoard::load() → 목록 표시 → draft 편집 → submit()
//!   성공: 새 기록을 목록 맨 앞에 추가, draft 초기화
//!   실패: 로그만 남기고 이전 상태 유지
//! ```
//!
//! 새 기록은 날짜와 관계없이 맨 앞에 붙습니다. 과거 날짜를 나중에 입력하면
//! 서버의 정렬 순서와 달라질 수 있으며, 다시 `load()`하면 맞춰집니다.

use crate::models::{PracticeRecord, RawPracticeInput};
use crate::services::{pace, practices};
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::SqlitePool;

/// 입력 폼 초안
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeDraft {
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub distance_meters: f64,
    pub notes: Option<String>,
}

impl PracticeDraft {
    /// 빈 초안: 오늘 날짜, 0분, 0미터, 메모 없음
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            date: today,
            duration_minutes: 0,
            distance_meters: 0.0,
            notes: None,
        }
    }

    /// 생성 요청 본문으로 변환합니다. 빈 메모도 그대로 보냅니다.
    pub fn to_raw(&self) -> RawPracticeInput {
        RawPracticeInput {
            date: Some(Value::from(self.date.format("%Y-%m-%d").to_string())),
            duration_minutes: Some(Value::from(self.duration_minutes)),
            distance_meters: Some(Value::from(self.distance_meters)),
            notes: self.notes.clone().map(Value::from),
        }
    }
}

/// 목록에 표시할 카드 한 장
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeCard {
    pub id: i64,
    /// 예: "Monday, January 15, 2024"
    pub date_label: String,
    pub duration_minutes: i64,
    pub distance_meters: f64,
    /// 100m당 페이스 (예: "3:00")
    pub pace: String,
    pub notes: Option<String>,
    /// 기록한 날짜 (예: "2024-01-15")
    pub logged_on: String,
}

impl From<&PracticeRecord> for PracticeCard {
    fn from(practice: &PracticeRecord) -> Self {
        Self {
            id: practice.id,
            date_label: practice.date.format("%A, %B %-d, %Y").to_string(),
            duration_minutes: practice.duration_minutes,
            distance_meters: practice.distance_meters,
            pace: pace::format_pace(practice.distance_meters, practice.duration_minutes),
            notes: practice.notes.clone(),
            logged_on: practice.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// 화면 하나가 소유하는 상태: 기록 목록 + 입력 초안
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeBoard {
    pub practices: Vec<PracticeRecord>,
    pub draft: PracticeDraft,
}

impl PracticeBoard {
    pub fn new(practices: Vec<PracticeRecord>, today: NaiveDate) -> Self {
        Self {
            practices,
            draft: PracticeDraft::fresh(today),
        }
    }

    /// 저장된 기록을 불러옵니다. 실패하면 로그를 남기고 빈 목록으로 시작합니다.
    pub async fn load(pool: &SqlitePool, today: NaiveDate) -> Self {
        let practices = practices::get_practices(pool).await.unwrap_or_else(|e| {
            tracing::error!("Failed to load practices: {}", e);
            Vec::new()
        });
        Self::new(practices, today)
    }

    /// 현재 초안을 제출합니다.
    ///
    /// 성공하면 새 기록을 맨 앞에 추가하고 초안을 `today` 기준으로 초기화합니다.
    /// 실패하면 로그만 남기고 상태를 그대로 돌려줍니다.
    pub async fn submit(self, pool: &SqlitePool, today: NaiveDate) -> Self {
        match practices::create_practice(pool, &self.draft.to_raw()).await {
            Ok(created) => self.with_created(created, today),
            Err(e) => {
                tracing::error!("Failed to create practice: {}", e);
                self
            }
        }
    }

    /// 생성된 기록을 맨 앞에 추가한 새 상태
    pub fn with_created(mut self, created: PracticeRecord, today: NaiveDate) -> Self {
        self.practices.insert(0, created);
        self.draft = PracticeDraft::fresh(today);
        self
    }

    pub fn cards(&self) -> Vec<PracticeCard> {
        self.practices.iter().map(PracticeCard::from).collect()
    }

    pub fn total_sessions(&self) -> usize {
        self.practices.len()
    }
}
