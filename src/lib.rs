//! # swimlog
//!
//! 수영 연습 기록(날짜, 시간, 거리, 메모)을 저장하고 날짜 최신순으로 조회하는 백엔드입니다.
//!
//! 계층 구조:
//! - `models`: 연습 기록과 입력 구조체
//! - `services::validation`: 입력 강제 변환 + 검증
//! - `db`: 저장소 ↔ 도메인 변환과 SQL (SQLite)
//! - `services`: 생성/조회 작업, 화면 상태, 페이스 계산
//! - `routes`: HTTP 핸들러와 라우터

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
