//! 未审核用户查询服务
//!
//! 组合余额聚合和收入来源分类，为运营后台输出分页的待审核用户列表。
//! 一次请求内依次执行：解析截止日期、统计总数、查询当前页、逐行分类。

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use risk_shared::config::ReviewConfig;
use risk_shared::observability::metrics;

use crate::error::Result;
use crate::models::{RevenueSource, ReviewCriteria, UnpaidBalanceTotal, display_name};
use crate::repository::{BalanceRepositoryTrait, RevenueSourceRepositoryTrait};
use crate::service::classifier::RevenueSourceClassifier;
use crate::service::cutoff::{CutoffOrigin, resolve_cutoff};
use crate::service::dto::{
    PageInfo, PageRequest, UnreviewedUserSummary, UnreviewedUsersPage, UnreviewedUsersRequest,
};

/// 查询口径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSettings {
    pub minimum_balance_cents: i64,
    pub default_cutoff_years: u32,
    pub records_per_page: i64,
    pub max_per_page: i64,
    pub admin_user_path_prefix: String,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self::from(&ReviewConfig::default())
    }
}

impl From<&ReviewConfig> for ReviewSettings {
    fn from(config: &ReviewConfig) -> Self {
        Self {
            minimum_balance_cents: config.minimum_balance_cents,
            default_cutoff_years: config.default_cutoff_years,
            records_per_page: config.records_per_page.max(1),
            max_per_page: config.max_per_page.max(1),
            admin_user_path_prefix: config.admin_user_path_prefix.trim_end_matches('/').to_string(),
        }
    }
}

impl ReviewSettings {
    /// 规范化分页参数
    ///
    /// 页码小于 1 按 1 处理；每页条数缺省或小于 1 用默认值，超过上限截断
    pub fn page_request(&self, page: Option<i64>, per_page: Option<i64>) -> PageRequest {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let per_page = per_page
            .filter(|n| *n >= 1)
            .unwrap_or(self.records_per_page)
            .min(self.max_per_page);

        PageRequest { page, per_page }
    }

    fn admin_url(&self, external_id: &str) -> String {
        format!("{}/{}", self.admin_user_path_prefix, external_id)
    }
}

/// 未审核用户风控查询服务
///
/// 无状态，可通过 `Arc` 在请求间共享
pub struct RiskReviewService {
    balances: Arc<dyn BalanceRepositoryTrait>,
    classifier: RevenueSourceClassifier,
    settings: ReviewSettings,
}

impl RiskReviewService {
    pub fn new(
        balances: Arc<dyn BalanceRepositoryTrait>,
        revenue_sources: Arc<dyn RevenueSourceRepositoryTrait>,
        settings: ReviewSettings,
    ) -> Self {
        Self {
            balances,
            classifier: RevenueSourceClassifier::new(revenue_sources),
            settings,
        }
    }

    /// 查询一页待审核用户
    ///
    /// `today` 由调用方传入，用于计算默认截止日期
    #[instrument(skip(self))]
    pub async fn list_unreviewed_users(
        &self,
        request: &UnreviewedUsersRequest,
        today: NaiveDate,
    ) -> Result<UnreviewedUsersPage> {
        let started = Instant::now();
        let result = self.query(request, today).await;
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(page) => metrics::record_review_query("success", page.users.len(), elapsed),
            Err(e) => {
                warn!(error = %e, "unreviewed users query failed");
                metrics::record_review_query("error", 0, elapsed);
            }
        }

        result
    }

    async fn query(
        &self,
        request: &UnreviewedUsersRequest,
        today: NaiveDate,
    ) -> Result<UnreviewedUsersPage> {
        let cutoff = resolve_cutoff(
            request.cutoff_date.as_deref(),
            today,
            self.settings.default_cutoff_years,
        );
        if cutoff.origin == CutoffOrigin::FallbackFromInvalid {
            warn!(
                raw = ?request.cutoff_date,
                fallback = %cutoff.date,
                "unparseable cutoff date, falling back to default"
            );
            metrics::record_invalid_cutoff();
        }

        let paging = self.settings.page_request(request.page, request.per_page);
        let criteria =
            ReviewCriteria::not_reviewed(cutoff.starts_at(), self.settings.minimum_balance_cents);

        let total_count = self.balances.count_unreviewed(&criteria).await?;

        let rows = if paging.offset() >= total_count {
            Vec::new()
        } else {
            self.balances
                .list_unreviewed(&criteria, paging.per_page, paging.offset())
                .await?
        };

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let revenue_sources = self.classifier.classify(row.id).await?;
            users.push(self.summarize(row, revenue_sources));
        }

        info!(
            cutoff = %cutoff.date,
            page = paging.page,
            per_page = paging.per_page,
            total_count,
            returned = users.len(),
            "unreviewed users listed"
        );

        Ok(UnreviewedUsersPage {
            users,
            pagination: PageInfo::new(paging, total_count),
            total_count,
            cutoff,
        })
    }

    fn summarize(
        &self,
        row: UnpaidBalanceTotal,
        revenue_sources: Vec<RevenueSource>,
    ) -> UnreviewedUserSummary {
        UnreviewedUserSummary {
            admin_url: self.settings.admin_url(&row.external_id),
            name: display_name(row.name.as_deref(), row.username.as_deref()),
            id: row.id,
            external_id: row.external_id,
            email: row.email,
            unpaid_balance_cents: row.total_balance_cents,
            revenue_sources,
            created_at: row.created_at,
        }
    }
}
