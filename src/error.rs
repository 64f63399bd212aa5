//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 에러는 크게 두 종류입니다:
//! - **검증 에러**(`ValidationError`): 입력이 필드 규칙을 통과하지 못함. 저장소에 도달하지 않습니다.
//! - **저장소 에러**(`AppError::Database`): 검증은 통과했지만 DB가 읽기/쓰기를 거부함.
//!
//! 두 에러 모두 DB 계층 → 서비스 계층 → 핸들러까지 그대로 전파되며,
//! `IntoResponse` 구현에서 HTTP 응답으로 변환됩니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// 검증에 실패한 필드 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 필드 이름 (예: "duration_minutes")
    pub field: String,
    /// 실패 이유
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 입력 검증 실패. 실패한 필드를 모두 담습니다 (첫 실패에서 멈추지 않음).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 특정 필드가 실패 목록에 있는지 확인합니다.
    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입력 검증 실패 (HTTP 400)
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// 저장소 에러 (HTTP 500)
    /// 저장된 값을 해석하지 못한 경우도 `sqlx::Error::Decode`로 여기에 담깁니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    /// 내부 에러(Database, Internal)는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::Validation(ref err) => {
                tracing::debug!("Validation failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    "Invalid practice input".to_string(),
                    Some(err.fields.clone()),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        // 결과: { "error": { "code": "...", "message": "...", "fields": [...] } }
        let body = match fields {
            Some(fields) => json!({
                "error": { "code": code, "message": message, "fields": fields }
            }),
            None => json!({
                "error": { "code": code, "message": message }
            }),
        };

        (status, Json(body)).into_response()
    }
}
