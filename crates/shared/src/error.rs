//! 统一错误处理模块
//!
//! 定义基础设施层共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum PlatformError {
    // ==================== 数据库错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    // ==================== 配置错误 ====================
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_source() {
        let err = PlatformError::from(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("数据库错误"));

        let err = PlatformError::from(config::ConfigError::NotFound("review".to_string()));
        assert!(err.to_string().contains("review"));
    }
}
