//! 存活与就绪探针

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::warn;

use crate::state::AppState;

const SERVICE_NAME: &str = "risk-admin-service";

/// 存活探针：服务进程正常即返回 ok
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// 就绪探针：检查数据库连接是否可用
///
/// 数据库不可用时返回 503，编排系统据此摘除流量
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database = match &state.database {
        Some(db) => match db.health_check().await {
            Ok(()) => "ok",
            Err(e) => {
                warn!(error = %e, "Readiness database check failed");
                "fail"
            }
        },
        None => "skipped",
    };

    readiness_report(database)
}

fn readiness_report(database: &'static str) -> (StatusCode, Json<Value>) {
    let (status, label) = if database == "fail" {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    } else {
        (StatusCode::OK, "ok")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": SERVICE_NAME,
            "checks": {
                "database": database
            }
        })),
    )
}
