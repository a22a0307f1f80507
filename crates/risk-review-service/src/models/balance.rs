//! 余额实体

use serde::{Deserialize, Serialize};

/// 余额结算状态
///
/// 标记为已支付后只会被外部打款流程修改
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum BalanceState {
    /// 未结算
    #[default]
    Unpaid,
    /// 打款处理中
    Processing,
    /// 已支付
    Paid,
    /// 已没收
    Forfeited,
}

/// 用户余额（金额以最小货币单位计，可为负）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub id: i64,
    pub user_id: i64,
    pub amount_cents: i64,
    pub state: BalanceState,
}

impl Balance {
    pub fn is_unpaid(&self) -> bool {
        self.state == BalanceState::Unpaid
    }
}
