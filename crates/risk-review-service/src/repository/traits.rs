//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AffiliateKind, ReviewCriteria, UnpaidBalanceTotal};

/// 未结算余额聚合接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BalanceRepositoryTrait: Send + Sync {
    /// 满足条件的用户数（分组、阈值过滤之后、分页之前）
    async fn count_unreviewed(&self, criteria: &ReviewCriteria) -> Result<i64>;

    /// 按未结算余额合计降序、用户 ID 升序返回一页
    async fn list_unreviewed(
        &self,
        criteria: &ReviewCriteria,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UnpaidBalanceTotal>>;
}

/// 收入来源证据查询接口
///
/// 所有查询都限定在该用户的未结算余额范围内
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RevenueSourceRepositoryTrait: Send + Sync {
    /// 是否存在以该用户为卖家的成功订单入账
    async fn has_unpaid_sales(&self, user_id: i64) -> Result<bool>;

    /// 成功入账的分成记录所属推广关系类型（去重）
    async fn unpaid_affiliate_kinds(&self, user_id: i64) -> Result<Vec<AffiliateKind>>;

    /// 是否存在通用入账
    async fn has_unpaid_credits(&self, user_id: i64) -> Result<bool>;
}
