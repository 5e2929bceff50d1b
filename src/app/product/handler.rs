//! 产品处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use super::model::{CreateProduct, Product, UpdateProduct};
use super::service::ProductService;
use crate::core::error::AppError;

/// 应用共享状态，除连接池句柄外不含任何可变状态
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.create(payload).await?;
    Ok(Json(product))
}

pub async fn read_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.read(id).await?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProduct>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.update(id, payload.into_changes()).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    state.products.delete(id).await?;
    Ok(Json(json!({ "detail": "Product deleted" })))
}
