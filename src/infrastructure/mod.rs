//! 基础设施模块

pub mod config;
pub mod database;
pub mod logger;
