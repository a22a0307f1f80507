//! 应用状态定义

use std::sync::Arc;

use risk_review::RiskReviewService;
use risk_shared::database::Database;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 未审核用户查询服务
    pub review: Arc<RiskReviewService>,
    /// 就绪探针使用；内存模式下为空
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(review: Arc<RiskReviewService>, database: Database) -> Self {
        Self {
            review,
            database: Some(database),
        }
    }

    /// 不连接数据库的状态，用于测试和本地演示
    pub fn without_database(review: Arc<RiskReviewService>) -> Self {
        Self {
            review,
            database: None,
        }
    }
}
