//! 推广关系与分成记录

use serde::{Deserialize, Serialize};

/// 推广关系类型
///
/// 数据库中以 `affiliates.type` 字符串区分；合作者（Collaborator）是一种
/// 分成条款不同的推广关系，收入来源分类需要单独标出。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffiliateKind {
    DirectAffiliate,
    GlobalAffiliate,
    Collaborator,
    /// 未识别的类型标签，保留原值
    Other(String),
}

impl AffiliateKind {
    /// 从 `affiliates.type` 列解析
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "DirectAffiliate" => Self::DirectAffiliate,
            "GlobalAffiliate" => Self::GlobalAffiliate,
            "Collaborator" => Self::Collaborator,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Collaborator)
    }
}

/// 推广关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliate {
    pub id: i64,
    /// 类型标签缺失的历史数据不参与分类
    pub kind: Option<AffiliateKind>,
}

/// 推广分成记录
///
/// 通过 `success_balance_id` 关联到推广者的余额，表示分成已成功入账
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateCredit {
    pub id: i64,
    pub affiliate_id: i64,
    pub success_balance_id: Option<i64>,
}
