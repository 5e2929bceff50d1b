//! 产品模块

pub mod handler;
pub mod model;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};

use handler::AppState;

/// 产品路由
///
/// 创建走 `/products/`（带尾部斜杠），单个产品的读改删走 `/products/:id`。
/// 路径和方法是对外契约，不能改动。
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/products/", post(handler::create_product))
        .route(
            "/products/:id",
            get(handler::read_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .with_state(state)
}
