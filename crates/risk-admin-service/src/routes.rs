//! 路由配置模块

use axum::{Router, middleware, routing::get};

use risk_shared::observability::middleware as obs_middleware;

use crate::{handlers, middleware::security_headers, state::AppState};

/// 后台 API 路由，挂载在 `/api/admin` 下
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/unreviewed-users",
        get(handlers::unreviewed_users::list_unreviewed_users),
    )
}

/// 完整应用路由：业务 API、探针和公共中间件
///
/// CORS 由进程入口按环境配置后叠加
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/admin", api_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
