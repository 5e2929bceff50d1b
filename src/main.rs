//! 产品服务入口
//!
//! 启动顺序：日志 → 配置 → 连接池 → 可选清库（软失败）→ 建表（硬失败）→ HTTP 服务

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use product_service::app::product;
use product_service::app::product::{handler::AppState, service::ProductService};
use product_service::core::middleware::request_logging;
use product_service::infrastructure::{config::Config, database, logger::Logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::init();

    let config = Config::from_env()?;

    let pool = database::connect(&config.database_url).await?;

    // 清库是破坏性操作，必须显式打开；失败只告警，不影响启动
    if config.reset_on_startup {
        database::reset_products(&pool).await;
    }

    // 没有表就无法处理任何请求，建表失败直接退出
    database::ensure_schema(&pool).await?;

    let state = AppState {
        products: ProductService::new(pool),
    };

    let app = Router::new()
        .merge(product::routes(state))
        .layer(middleware::from_fn(request_logging))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server_addr).await?;

    info!("🚀 Product service running on http://{}", config.server_addr);
    info!("📖 API 端点:");
    info!("   POST   /products/     - 创建产品");
    info!("   GET    /products/:id  - 获取产品");
    info!("   PUT    /products/:id  - 更新产品");
    info!("   DELETE /products/:id  - 删除产品");

    axum::serve(listener, app).await?;

    Ok(())
}
