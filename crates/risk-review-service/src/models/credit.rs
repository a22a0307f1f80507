//! 通用入账

use serde::{Deserialize, Serialize};

/// 不属于销售或分成的通用入账（如人工补偿）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub id: i64,
    pub balance_id: Option<i64>,
}
