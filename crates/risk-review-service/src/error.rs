//! 风控审核服务错误类型
//!
//! 本服务只做读取：截止日期解析失败在服务内部吸收，
//! 数据层错误原样向上传播，不做重试。

use thiserror::Error;

/// 风控审核服务错误类型
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ReviewError>;
