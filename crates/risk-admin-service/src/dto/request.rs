//! 请求参数定义

use serde::Deserialize;

use risk_review::UnreviewedUsersRequest;

/// 未审核用户列表查询参数
///
/// `page` / `per_page` 必须是整数，否则由提取器拒绝；取值范围在服务层规范化
#[derive(Debug, Default, Deserialize)]
pub struct UnreviewedUsersParams {
    /// 截止日期，无法解析时按默认值处理
    pub cutoff_date: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl From<UnreviewedUsersParams> for UnreviewedUsersRequest {
    fn from(params: UnreviewedUsersParams) -> Self {
        Self {
            cutoff_date: params.cutoff_date,
            page: params.page,
            per_page: params.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_into_request() {
        let params = UnreviewedUsersParams {
            cutoff_date: Some("2022-01-01".to_string()),
            page: Some(2),
            per_page: None,
        };
        let request: UnreviewedUsersRequest = params.into();

        assert_eq!(request.cutoff_date.as_deref(), Some("2022-01-01"));
        assert_eq!(request.page, Some(2));
        assert_eq!(request.per_page, None);
    }
}
