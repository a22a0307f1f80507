//! 收入来源标签

use serde::{Deserialize, Serialize};

use super::AffiliateKind;

/// 收入来源
///
/// 各标签相互独立，同一用户可以同时具备多个；枚举顺序即展示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueSource {
    /// 作为卖家的成功销售
    Sales,
    /// 合作者分成
    Collaborator,
    /// 非合作者的推广分成
    Affiliate,
    /// 通用入账
    Credit,
}

/// 某个用户未结算余额的来源证据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevenueEvidence {
    pub has_sales: bool,
    /// 未结算分成涉及的推广关系类型（可重复、无序）
    pub affiliate_kinds: Vec<AffiliateKind>,
    pub has_credits: bool,
}

impl RevenueSource {
    /// 根据证据给出标签，按展示顺序排列
    pub fn classify(evidence: &RevenueEvidence) -> Vec<RevenueSource> {
        let has_collaborator = evidence
            .affiliate_kinds
            .iter()
            .any(AffiliateKind::is_collaborator);
        let has_affiliate = evidence
            .affiliate_kinds
            .iter()
            .any(|kind| !kind.is_collaborator());

        [
            (evidence.has_sales, Self::Sales),
            (has_collaborator, Self::Collaborator),
            (has_affiliate, Self::Affiliate),
            (evidence.has_credits, Self::Credit),
        ]
        .into_iter()
        .filter_map(|(present, source)| present.then_some(source))
        .collect()
    }
}
