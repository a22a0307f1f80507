//! 未审核用户风控排查 API 处理器

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Utc;
use tracing::instrument;

use crate::{
    dto::{ApiResponse, UnreviewedUsersParams, UnreviewedUsersResponse},
    error::AdminError,
    state::AppState,
};

/// 查询未审核且未结算余额超过阈值的用户
///
/// GET /api/admin/unreviewed-users
///
/// 按未结算余额合计降序返回一页，附带收入来源和实际使用的截止日期
#[instrument(skip(state))]
pub async fn list_unreviewed_users(
    State(state): State<AppState>,
    params: Result<Query<UnreviewedUsersParams>, QueryRejection>,
) -> Result<Json<ApiResponse<UnreviewedUsersResponse>>, AdminError> {
    let Query(params) = params.map_err(|e| AdminError::Validation(e.body_text()))?;

    let page = state
        .review
        .list_unreviewed_users(&params.into(), Utc::now().date_naive())
        .await?;

    Ok(Json(ApiResponse::success(page.into())))
}
