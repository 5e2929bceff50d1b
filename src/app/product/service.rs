//! 产品业务服务
//!
//! 每个操作只做一次数据库往返，连接由连接池按请求获取，
//! 无论正常返回还是出错都会自动归还。不跨操作开事务。

use sqlx::postgres::PgPool;
use tracing::{info, warn};

use super::model::{CreateProduct, Product, ProductChanges};
use crate::core::error::AppError;

/// id 不存在时固定的提示文案
const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

impl ProductService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: CreateProduct) -> Result<Product, AppError> {
        info!("Creating product: {}", payload.name);

        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .fetch_one(&self.db)
        .await?;

        info!("Product created: {}", product.id);
        Ok(product)
    }

    pub async fn read(&self, id: i32) -> Result<Product, AppError> {
        info!("Reading product: {}", id);

        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!("Product read: {}", product.id);
        Ok(product)
    }

    pub async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, AppError> {
        info!("Updating product: {}", id);

        // 所有字段都被忽略时退化为一次读取，行不存在仍然是 404
        if changes.is_empty() {
            return self.read(id).await;
        }

        // 动态拼 SET 子句，占位符编号与 bind 顺序一致
        let mut set_clauses = Vec::new();
        let mut param = 1;
        if changes.name.is_some() {
            set_clauses.push(format!("name = ${}", param));
            param += 1;
        }
        if changes.description.is_some() {
            set_clauses.push(format!("description = ${}", param));
            param += 1;
        }
        if changes.price.is_some() {
            set_clauses.push(format!("price = ${}", param));
            param += 1;
        }
        let sql = format!(
            "UPDATE products SET {} WHERE id = ${} RETURNING *",
            set_clauses.join(", "),
            param
        );

        let mut query = sqlx::query_as::<_, Product>(&sql);
        if let Some(name) = &changes.name {
            query = query.bind(name);
        }
        if let Some(description) = &changes.description {
            query = query.bind(description);
        }
        if let Some(price) = changes.price {
            query = query.bind(price);
        }

        let product = query
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!("Product updated: {}", product.id);
        Ok(product)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        info!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        info!("Product deleted: {}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    warn!("Product not found: {}", id);
    AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
}
