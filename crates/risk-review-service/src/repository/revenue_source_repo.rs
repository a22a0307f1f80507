//! 收入来源证据仓储

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::traits::RevenueSourceRepositoryTrait;
use crate::error::Result;
use crate::models::{AffiliateKind, BalanceState, PurchaseState};

/// 收入来源证据仓储
///
/// 每个方法都是一次 EXISTS / DISTINCT 查询，由调用方按行依次调用
pub struct RevenueSourceRepository {
    pool: PgPool,
}

impl RevenueSourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevenueSourceRepositoryTrait for RevenueSourceRepository {
    #[instrument(skip(self))]
    async fn has_unpaid_sales(&self, user_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM balances b
                JOIN purchases p ON p.purchase_success_balance_id = b.id
                WHERE b.user_id = $1
                  AND b.state = $2
                  AND p.purchase_state = $3
                  AND p.seller_id = b.user_id
            )
            "#,
        )
        .bind(user_id)
        .bind(BalanceState::Unpaid)
        .bind(PurchaseState::Successful)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn unpaid_affiliate_kinds(&self, user_id: i64) -> Result<Vec<AffiliateKind>> {
        let tags: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT a.type
            FROM balances b
            JOIN affiliate_credits ac ON ac.affiliate_credit_success_balance_id = b.id
            JOIN affiliates a ON a.id = ac.affiliate_id
            WHERE b.user_id = $1
              AND b.state = $2
              AND a.type IS NOT NULL
            "#,
        )
        .bind(user_id)
        .bind(BalanceState::Unpaid)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags
            .iter()
            .map(|tag| AffiliateKind::from_type_tag(tag))
            .collect())
    }

    #[instrument(skip(self))]
    async fn has_unpaid_credits(&self, user_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM balances b
                JOIN credits c ON c.balance_id = b.id
                WHERE b.user_id = $1
                  AND b.state = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(BalanceState::Unpaid)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
