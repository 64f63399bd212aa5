//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 서비스 계층(services/)이 이 모듈의 함수를 호출합니다.
//!
//! - `practices`: 수영 연습 기록 저장/조회 및 저장소 ↔ 도메인 변환

pub mod practices;

pub use practices::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// 연결 풀을 만들고 마이그레이션을 실행합니다.
///
/// 데이터베이스 파일이 없으면 새로 만듭니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// 메모리 DB 풀 (테스트용)
///
/// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로, 연결을 하나로 고정하고
/// 유휴 연결이 닫히지 않게 합니다.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
