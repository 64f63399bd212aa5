//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체들을 정의합니다.
//! - `practice`: 수영 연습 기록과 생성 입력

pub mod practice;

pub use practice::*;
