//! 销售记录

use serde::{Deserialize, Serialize};

/// 订单状态，只有 `Successful` 计入销售收入
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum PurchaseState {
    #[default]
    InProgress,
    Successful,
    Failed,
    NotCharged,
}

/// 订单
///
/// `success_balance_id` 指向卖家因该订单入账的余额
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub seller_id: i64,
    pub success_balance_id: Option<i64>,
    pub state: PurchaseState,
}

impl Purchase {
    pub fn is_successful(&self) -> bool {
        self.state == PurchaseState::Successful
    }
}
