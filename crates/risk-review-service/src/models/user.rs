//! 用户实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户风控状态
///
/// 由独立的人工审核流程设置，本服务只关心 `NotReviewed`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum UserRiskState {
    /// 未审核
    #[default]
    NotReviewed,
    /// 审核通过
    Compliant,
    FlaggedForFraud,
    FlaggedForTosViolation,
    SuspendedForFraud,
    SuspendedForTosViolation,
    /// 观察期
    OnProbation,
}

/// 用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// 对外暴露的用户标识，后台详情页 URL 使用它
    pub external_id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub user_risk_state: UserRiskState,
    pub created_at: DateTime<Utc>,
}

/// 展示名称：优先非空白的 name，其次 username，都没有时为空串
pub fn display_name(name: Option<&str>, username: Option<&str>) -> String {
    [name, username]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(display_name(Some("Ada"), Some("ada99")), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(display_name(Some("   "), Some("ada99")), "ada99");
        assert_eq!(display_name(None, Some("ada99")), "ada99");
        assert_eq!(display_name(None, None), "");
    }

    #[test]
    fn test_risk_state_serialization() {
        let json = serde_json::to_string(&UserRiskState::NotReviewed).unwrap();
        assert_eq!(json, "\"not_reviewed\"");
        let json = serde_json::to_string(&UserRiskState::SuspendedForTosViolation).unwrap();
        assert_eq!(json, "\"suspended_for_tos_violation\"");
    }
}
