//! HTTP 请求处理器

pub mod health;
pub mod unreviewed_users;

use axum::http::Uri;

use crate::error::AdminError;

/// 未匹配任何路由时返回统一的错误响应体
pub async fn not_found(uri: Uri) -> AdminError {
    AdminError::NotFound(uri.path().to_string())
}
