//! 未结算余额聚合仓储
//!
//! 先按用户分组求和，再用 HAVING 过滤阈值：单笔余额很小但合计超过阈值的用户不能漏掉

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::traits::BalanceRepositoryTrait;
use crate::error::Result;
use crate::models::{BalanceState, ReviewCriteria, UnpaidBalanceTotal};

/// 未结算余额聚合仓储
pub struct BalanceRepository {
    pool: PgPool,
}

impl BalanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BalanceRepositoryTrait for BalanceRepository {
    #[instrument(skip(self))]
    async fn count_unreviewed(&self, criteria: &ReviewCriteria) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM (
                SELECT u.id
                FROM users u
                JOIN balances b ON b.user_id = u.id
                WHERE u.user_risk_state = $1
                  AND u.created_at >= $2
                  AND b.state = $3
                GROUP BY u.id
                HAVING SUM(b.amount_cents) > $4
            ) qualifying
            "#,
        )
        .bind(criteria.risk_state)
        .bind(criteria.created_since)
        .bind(BalanceState::Unpaid)
        .bind(criteria.minimum_balance_cents)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn list_unreviewed(
        &self,
        criteria: &ReviewCriteria,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UnpaidBalanceTotal>> {
        // SUM(bigint) 在 PostgreSQL 中返回 numeric，显式转回 bigint
        let rows = sqlx::query_as::<_, UnpaidBalanceTotal>(
            r#"
            SELECT
                u.id,
                u.external_id,
                u.name,
                u.username,
                u.email,
                u.created_at,
                SUM(b.amount_cents)::BIGINT AS total_balance_cents
            FROM users u
            JOIN balances b ON b.user_id = u.id
            WHERE u.user_risk_state = $1
              AND u.created_at >= $2
              AND b.state = $3
            GROUP BY u.id
            HAVING SUM(b.amount_cents) > $4
            ORDER BY total_balance_cents DESC, u.id ASC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(criteria.risk_state)
        .bind(criteria.created_since)
        .bind(BalanceState::Unpaid)
        .bind(criteria.minimum_balance_cents)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
