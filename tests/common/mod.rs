use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use hrms_lite::config::Config;
use hrms_lite::db;

/// In-memory database for one test. A single connection keeps the
/// `:memory:` database alive for the lifetime of the pool.
pub async fn setup_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    db::create_schema(&pool).await.expect("failed to create schema");

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        api_prefix: "/api".to_string(),
    }
}

pub fn employee_json(code: &str, name: &str, email: &str, department: &str) -> serde_json::Value {
    serde_json::json!({
        "employee_code": code,
        "full_name": name,
        "email": email,
        "department": department,
    })
}
