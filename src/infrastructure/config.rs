//! 配置基础设施
//!
//! 全部配置来自环境变量，进程启动时读取一次。

use std::env;
use std::fmt;

/// 服务配置
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL 连接串，必须由环境提供，不允许硬编码
    pub database_url: String,
    /// HTTP 监听地址
    pub server_addr: String,
    /// 启动时是否清空 products 表并重置 id 序列。
    /// 破坏性操作，默认关闭，必须显式打开。
    pub reset_on_startup: bool,
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    MissingDatabaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDatabaseUrl => write!(f, "DATABASE_URL must be set"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let reset_on_startup = parse_flag(env::var("RESET_ON_STARTUP").ok().as_deref());

        Ok(Self {
            database_url,
            server_addr,
            reset_on_startup,
        })
    }
}

/// 解析开关型环境变量，未设置或无法识别都按关闭处理
fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_defaults_to_off() {
        assert!(!parse_flag(None));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("nonsense")));
    }

    #[test]
    fn flag_accepts_common_truthy_spellings() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("yes")));
        assert!(parse_flag(Some(" on ")));
    }
}
