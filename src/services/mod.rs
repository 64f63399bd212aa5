//! # 서비스 계층
//!
//! 라우트 핸들러와 DB 계층 사이의 비즈니스 로직입니다.
//! - `validation`: 가공 전 입력 → 검증된 생성 입력
//! - `practices`: 생성/조회 두 가지 작업
//! - `pace`: 100m당 페이스 표시 값
//! - `board`: 화면 상태 (초안 + 목록)

pub mod board;
pub mod pace;
pub mod practices;
pub mod validation;

pub use practices::*;
