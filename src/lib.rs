//! # 产品服务
//!
//! 基于 Axum + SQLx 的产品 CRUD 服务，对单张 products 表
//! 做增删改查的轻量封装：
//! - 请求解析 + 结构体到行的直接映射
//! - 每个操作只做一次数据库往返
//! - 启动时可选清库（默认关闭），随后确保表结构存在

pub mod app;
pub mod core;
pub mod infrastructure;
