//! 审核查询条件与聚合结果行

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserRiskState;

/// 余额聚合的筛选条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCriteria {
    pub risk_state: UserRiskState,
    /// 注册时间下界（含）
    pub created_since: DateTime<Utc>,
    /// 未结算余额合计必须严格大于该值
    pub minimum_balance_cents: i64,
}

impl ReviewCriteria {
    /// 未审核用户的筛选条件
    pub fn not_reviewed(created_since: DateTime<Utc>, minimum_balance_cents: i64) -> Self {
        Self {
            risk_state: UserRiskState::NotReviewed,
            created_since,
            minimum_balance_cents,
        }
    }
}

/// 按用户聚合后的未结算余额行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UnpaidBalanceTotal {
    pub id: i64,
    pub external_id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_balance_cents: i64,
}
