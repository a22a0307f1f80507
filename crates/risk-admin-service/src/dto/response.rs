//! 响应体定义

use chrono::SecondsFormat;
use serde::Serialize;

use risk_review::RevenueSource;
use risk_review::service::{PageInfo, UnreviewedUserSummary};
use risk_review::UnreviewedUsersPage;

/// API 统一响应
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 未审核用户列表
#[derive(Debug, Serialize)]
pub struct UnreviewedUsersResponse {
    pub users: Vec<UnreviewedUserDto>,
    pub pagination: PaginationDto,
    /// 分页前满足条件的用户总数
    pub total_count: i64,
    /// 实际使用的截止日期（YYYY-MM-DD）
    pub cutoff_date: String,
}

/// 单个待审核用户
#[derive(Debug, Serialize)]
pub struct UnreviewedUserDto {
    pub id: i64,
    pub external_id: String,
    pub name: String,
    pub email: Option<String>,
    pub unpaid_balance_cents: i64,
    pub revenue_sources: Vec<RevenueSource>,
    pub admin_url: String,
    /// UTC，精确到秒，如 `2025-10-18T12:00:00Z`
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct PaginationDto {
    pub page: i64,
    pub per_page: i64,
    pub pages: i64,
    pub count: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

impl From<UnreviewedUserSummary> for UnreviewedUserDto {
    fn from(user: UnreviewedUserSummary) -> Self {
        Self {
            id: user.id,
            external_id: user.external_id,
            name: user.name,
            email: user.email,
            unpaid_balance_cents: user.unpaid_balance_cents,
            revenue_sources: user.revenue_sources,
            admin_url: user.admin_url,
            created_at: user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

impl From<PageInfo> for PaginationDto {
    fn from(info: PageInfo) -> Self {
        Self {
            page: info.page,
            per_page: info.per_page,
            pages: info.pages,
            count: info.count,
            prev: info.prev,
            next: info.next,
        }
    }
}

impl From<UnreviewedUsersPage> for UnreviewedUsersResponse {
    fn from(page: UnreviewedUsersPage) -> Self {
        Self {
            users: page.users.into_iter().map(Into::into).collect(),
            pagination: page.pagination.into(),
            total_count: page.total_count,
            cutoff_date: page.cutoff.date.format("%Y-%m-%d").to_string(),
        }
    }
}
