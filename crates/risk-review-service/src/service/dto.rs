//! 服务层数据传输对象
//!
//! 与 HTTP 载荷解耦，由后台服务负责序列化格式

use chrono::{DateTime, Utc};

use crate::models::RevenueSource;
use crate::service::cutoff::ResolvedCutoff;

/// 未审核用户查询请求
///
/// 各字段均为调用方原始输入，规范化在服务内完成
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnreviewedUsersRequest {
    pub cutoff_date: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// 规范化后的分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// 单个待审核用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreviewedUserSummary {
    pub id: i64,
    pub external_id: String,
    /// 展示名：name 为空时取 username，都为空则为空串
    pub name: String,
    pub email: Option<String>,
    pub unpaid_balance_cents: i64,
    pub revenue_sources: Vec<RevenueSource>,
    pub admin_url: String,
    pub created_at: DateTime<Utc>,
}

/// 分页信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: i64,
    pub per_page: i64,
    /// 总页数，空结果也算一页
    pub pages: i64,
    /// 满足条件的总记录数
    pub count: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

impl PageInfo {
    pub fn new(request: PageRequest, count: i64) -> Self {
        let pages = if count <= 0 {
            1
        } else {
            (count + request.per_page - 1) / request.per_page
        };

        Self {
            page: request.page,
            per_page: request.per_page,
            pages,
            count,
            prev: (request.page > 1).then(|| request.page - 1),
            next: (request.page < pages).then(|| request.page + 1),
        }
    }
}

/// 一页查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreviewedUsersPage {
    pub users: Vec<UnreviewedUserSummary>,
    pub pagination: PageInfo,
    /// 分页前满足条件的用户总数
    pub total_count: i64,
    pub cutoff: ResolvedCutoff,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: i64, per_page: i64) -> PageRequest {
        PageRequest { page, per_page }
    }

    #[test]
    fn test_offset() {
        assert_eq!(page(1, 100).offset(), 0);
        assert_eq!(page(3, 25).offset(), 50);
        assert_eq!(page(i64::MAX, 1000).offset(), i64::MAX);
    }

    #[test]
    fn test_page_info_empty_result_is_one_page() {
        let info = PageInfo::new(page(1, 100), 0);
        assert_eq!(info.pages, 1);
        assert_eq!(info.prev, None);
        assert_eq!(info.next, None);
    }

    #[test]
    fn test_page_info_middle_page() {
        let info = PageInfo::new(page(2, 10), 25);
        assert_eq!(info.pages, 3);
        assert_eq!(info.prev, Some(1));
        assert_eq!(info.next, Some(3));
    }

    #[test]
    fn test_page_info_past_the_end() {
        let info = PageInfo::new(page(9, 10), 25);
        assert_eq!(info.pages, 3);
        assert_eq!(info.prev, Some(8));
        assert_eq!(info.next, None);
    }
}
