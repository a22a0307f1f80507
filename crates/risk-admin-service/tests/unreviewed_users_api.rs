//! 未审核用户 API 路由测试
//!
//! 使用内存仓储构造完整路由，通过 `tower::ServiceExt::oneshot` 发送请求，
//! 验证查询参数处理、响应载荷和错误响应体。

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use risk_admin_service::{routes, state::AppState};
use risk_review::models::{Balance, BalanceState, Purchase, PurchaseState, User, UserRiskState};
use risk_review::{InMemoryReviewStore, ReviewSettings, RiskReviewService};

// ==================== 辅助函数 ====================

fn seeded_store() -> Arc<InMemoryReviewStore> {
    let store = Arc::new(InMemoryReviewStore::new());

    // (注册天数, 未结算金额)
    for (age_days, amount) in [(365, 5000), (365, 500), (3 * 365 + 10, 9000), (30, 2500)] {
        let user_id = store.next_id();
        store.insert_user(User {
            id: user_id,
            external_id: format!("ext-{user_id}"),
            name: None,
            username: Some(format!("seller{user_id}")),
            email: Some(SafeEmail().fake()),
            user_risk_state: UserRiskState::NotReviewed,
            created_at: Utc::now() - Duration::days(age_days),
        });

        let balance_id = store.next_id();
        store.insert_balance(Balance {
            id: balance_id,
            user_id,
            amount_cents: amount,
            state: BalanceState::Unpaid,
        });
        store.insert_purchase(Purchase {
            id: store.next_id(),
            seller_id: user_id,
            success_balance_id: Some(balance_id),
            state: PurchaseState::Successful,
        });
    }

    store
}

fn app() -> axum::Router {
    let store = seeded_store();
    let review = RiskReviewService::new(store.clone(), store, ReviewSettings::default());
    routes::app_router(AppState::without_database(Arc::new(review)))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn external_ids(body: &Value) -> Vec<String> {
    body["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["external_id"].as_str().unwrap().to_string())
        .collect()
}

// ==================== 测试 ====================

#[tokio::test]
async fn test_default_query() {
    let (status, body) = get("/api/admin/unreviewed-users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    // 1 年前 5000、30 天前 2500 入选；500 不过阈值；3 年前的用户早于默认截止日期
    assert_eq!(data["total_count"], 2);
    assert_eq!(external_ids(&body), vec!["ext-1", "ext-10"]);

    let expected_cutoff = (Utc::now().date_naive() - chrono::Months::new(24))
        .format("%Y-%m-%d")
        .to_string();
    assert_eq!(data["cutoff_date"], expected_cutoff);

    let first = &data["users"][0];
    assert_eq!(first["name"], "seller1");
    assert_eq!(first["unpaid_balance_cents"], 5000);
    assert_eq!(first["revenue_sources"], serde_json::json!(["sales"]));
    assert_eq!(first["admin_url"], "/admin/users/ext-1");
    assert!(first["created_at"].as_str().unwrap().ends_with('Z'));

    assert_eq!(data["pagination"]["page"], 1);
    assert_eq!(data["pagination"]["per_page"], 100);
    assert_eq!(data["pagination"]["pages"], 1);
}

#[tokio::test]
async fn test_older_cutoff_includes_three_year_old_account() {
    let cutoff = (Utc::now().date_naive() - chrono::Months::new(48)).format("%Y-%m-%d");
    let (status, body) = get(&format!("/api/admin/unreviewed-users?cutoff_date={cutoff}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_count"], 3);
    assert_eq!(external_ids(&body), vec!["ext-7", "ext-1", "ext-10"]);
}

#[tokio::test]
async fn test_malformed_cutoff_matches_default() {
    let (_, default_body) = get("/api/admin/unreviewed-users").await;
    let (status, body) = get("/api/admin/unreviewed-users?cutoff_date=not-a-date").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cutoff_date"], default_body["data"]["cutoff_date"]);
    assert_eq!(external_ids(&body), external_ids(&default_body));
}

#[tokio::test]
async fn test_paging_parameters() {
    let (_, first) = get("/api/admin/unreviewed-users?page=1&per_page=1").await;
    let (_, second) = get("/api/admin/unreviewed-users?page=2&per_page=1").await;

    assert_eq!(external_ids(&first), vec!["ext-1"]);
    assert_eq!(external_ids(&second), vec!["ext-10"]);
    assert_eq!(first["data"]["pagination"]["next"], 2);
    assert_eq!(second["data"]["pagination"]["prev"], 1);
    assert!(second["data"]["pagination"]["next"].is_null());
}

#[tokio::test]
async fn test_page_out_of_range_is_empty() {
    let (status, body) = get("/api/admin/unreviewed-users?page=99").await;

    assert_eq!(status, StatusCode::OK);
    assert!(external_ids(&body).is_empty());
    assert_eq!(body["data"]["total_count"], 2);
}

#[tokio::test]
async fn test_non_integer_page_is_rejected() {
    let (status, body) = get("/api/admin/unreviewed-users?page=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let (status, body) = get("/api/admin/nothing-here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_and_readiness_endpoints() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"], "skipped");
}

#[tokio::test]
async fn test_response_carries_request_id_and_security_headers() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/admin/unreviewed-users")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}
