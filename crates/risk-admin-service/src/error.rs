//! 后台服务错误类型定义

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use risk_review::ReviewError;

/// 后台服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("参数验证失败: {0}")]
    Validation(String),
    #[error("资源不存在: {0}")]
    NotFound(String),

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl AdminError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从查询服务的错误转换
impl From<ReviewError> for AdminError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::Database(e) => Self::Database(e),
            ReviewError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn all_error_variants() -> Vec<(AdminError, StatusCode, &'static str)> {
        vec![
            (AdminError::Validation("page must be an integer".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            (AdminError::NotFound("/api/admin/nope".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (AdminError::Database(sqlx::Error::PoolTimedOut), StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            (AdminError::Internal("unexpected state".into()), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        ]
    }

    #[test]
    fn test_all_variants_status_code() {
        for (error, expected_status, label) in all_error_variants() {
            assert_eq!(error.status_code(), expected_status, "状态码不匹配: variant={label}");
        }
    }

    #[test]
    fn test_all_variants_error_code() {
        for (error, _status, expected_code) in all_error_variants() {
            assert_eq!(error.error_code(), expected_code);
        }
    }

    #[test]
    fn test_from_review_error() {
        let err: AdminError = ReviewError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, AdminError::Database(_)));

        let err: AdminError = ReviewError::Internal("boom".into()).into();
        assert!(matches!(err, AdminError::Internal(ref m) if m == "boom"));
    }

    async fn body_json(error: AdminError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_system_errors_are_masked() {
        let (status, body) =
            body_json(AdminError::Internal("connection string leaked".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("leaked"));
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_validation_message_is_shown() {
        let (status, body) = body_json(AdminError::Validation("page 不是整数".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("page 不是整数"));
    }
}
