//! 内存仓储
//!
//! 使用 DashMap 保存只读实体，实现与 PostgreSQL 仓储相同的聚合和分类语义。
//! 适用于测试和本地开发环境。

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::traits::{BalanceRepositoryTrait, RevenueSourceRepositoryTrait};
use crate::error::Result;
use crate::models::{
    Affiliate, AffiliateCredit, AffiliateKind, Balance, Credit, Purchase, ReviewCriteria,
    UnpaidBalanceTotal, User,
};

/// 内存审核数据集
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    sequence: AtomicI64,
    users: DashMap<i64, User>,
    balances: DashMap<i64, Balance>,
    purchases: DashMap<i64, Purchase>,
    affiliates: DashMap<i64, Affiliate>,
    affiliate_credits: DashMap<i64, AffiliateCredit>,
    credits: DashMap<i64, Credit>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配一个全局递增 ID（所有表共用）
    pub fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// 插入或覆盖数据（以 id 为键）
    pub fn insert_user(&self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn insert_balance(&self, balance: Balance) {
        self.balances.insert(balance.id, balance);
    }

    pub fn insert_purchase(&self, purchase: Purchase) {
        self.purchases.insert(purchase.id, purchase);
    }

    pub fn insert_affiliate(&self, affiliate: Affiliate) {
        self.affiliates.insert(affiliate.id, affiliate);
    }

    pub fn insert_affiliate_credit(&self, credit: AffiliateCredit) {
        self.affiliate_credits.insert(credit.id, credit);
    }

    pub fn insert_credit(&self, credit: Credit) {
        self.credits.insert(credit.id, credit);
    }

    /// 某用户所有未结算余额的 ID
    fn unpaid_balance_ids(&self, user_id: i64) -> HashSet<i64> {
        self.balances
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.is_unpaid())
            .map(|entry| entry.id)
            .collect()
    }

    /// 全量聚合：分组求和 → 阈值过滤 → 排序
    fn aggregate(&self, criteria: &ReviewCriteria) -> Vec<UnpaidBalanceTotal> {
        let mut totals: HashMap<i64, i64> = HashMap::new();
        for balance in self.balances.iter().filter(|b| b.is_unpaid()) {
            *totals.entry(balance.user_id).or_default() += balance.amount_cents;
        }

        let mut rows: Vec<UnpaidBalanceTotal> = totals
            .into_iter()
            .filter(|(_, total)| *total > criteria.minimum_balance_cents)
            .filter_map(|(user_id, total)| {
                let user = self.users.get(&user_id)?;
                let qualifies = user.user_risk_state == criteria.risk_state
                    && user.created_at >= criteria.created_since;
                qualifies.then(|| UnpaidBalanceTotal {
                    id: user.id,
                    external_id: user.external_id.clone(),
                    name: user.name.clone(),
                    username: user.username.clone(),
                    email: user.email.clone(),
                    created_at: user.created_at,
                    total_balance_cents: total,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total_balance_cents
                .cmp(&a.total_balance_cents)
                .then(a.id.cmp(&b.id))
        });
        rows
    }
}

#[async_trait]
impl BalanceRepositoryTrait for InMemoryReviewStore {
    async fn count_unreviewed(&self, criteria: &ReviewCriteria) -> Result<i64> {
        Ok(self.aggregate(criteria).len() as i64)
    }

    async fn list_unreviewed(
        &self,
        criteria: &ReviewCriteria,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UnpaidBalanceTotal>> {
        Ok(self
            .aggregate(criteria)
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

#[async_trait]
impl RevenueSourceRepositoryTrait for InMemoryReviewStore {
    async fn has_unpaid_sales(&self, user_id: i64) -> Result<bool> {
        let balance_ids = self.unpaid_balance_ids(user_id);
        Ok(self.purchases.iter().any(|p| {
            p.is_successful()
                && p.seller_id == user_id
                && p.success_balance_id.is_some_and(|id| balance_ids.contains(&id))
        }))
    }

    async fn unpaid_affiliate_kinds(&self, user_id: i64) -> Result<Vec<AffiliateKind>> {
        let balance_ids = self.unpaid_balance_ids(user_id);
        let mut kinds: Vec<AffiliateKind> = Vec::new();
        for credit in self.affiliate_credits.iter() {
            if !credit
                .success_balance_id
                .is_some_and(|id| balance_ids.contains(&id))
            {
                continue;
            }
            let kind = self
                .affiliates
                .get(&credit.affiliate_id)
                .and_then(|a| a.kind.clone());
            if let Some(kind) = kind {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        Ok(kinds)
    }

    async fn has_unpaid_credits(&self, user_id: i64) -> Result<bool> {
        let balance_ids = self.unpaid_balance_ids(user_id);
        Ok(self
            .credits
            .iter()
            .any(|c| c.balance_id.is_some_and(|id| balance_ids.contains(&id))))
    }
}
