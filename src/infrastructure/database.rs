//! 数据库基础设施

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{error, info};

/// 建立连接池
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(5)
        .acquire_timeout(Duration::from_secs(8))
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// 清空 products 表并重置自增序列。
/// 失败只记录日志不中断启动（首次启动表可能还不存在）。
pub async fn reset_products(pool: &PgPool) {
    info!("Clearing products table");

    if let Err(e) = sqlx::query("TRUNCATE TABLE products RESTART IDENTITY CASCADE")
        .execute(pool)
        .await
    {
        error!("Error clearing products table: {}", e);
    }
}

/// 确保 products 表及索引存在。
/// 建表失败是致命错误，由调用方终止启动。
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Creating database tables...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 主键自带索引，其余三列单独建
    for stmt in [
        "CREATE INDEX IF NOT EXISTS idx_products_name ON products (name)",
        "CREATE INDEX IF NOT EXISTS idx_products_description ON products (description)",
        "CREATE INDEX IF NOT EXISTS idx_products_price ON products (price)",
    ] {
        sqlx::query(stmt).execute(pool).await?;
    }

    info!("Database tables created successfully");
    Ok(())
}
