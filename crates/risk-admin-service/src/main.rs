//! 风控审核后台服务
//!
//! 提供未审核用户风控排查的 REST API。

use std::sync::Arc;

use axum::http::HeaderValue;
use risk_admin_service::{routes, state::AppState};
use risk_review::{BalanceRepository, ReviewSettings, RevenueSourceRepository, RiskReviewService};
use risk_shared::{config::AppConfig, database::Database, observability};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("risk-admin-service")?;

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config).await?;

    info!("Starting risk-admin-service on {}", config.server_addr());

    let db = Database::connect(&config.database).await?;

    let review = Arc::new(RiskReviewService::new(
        Arc::new(BalanceRepository::new(db.pool().clone())),
        Arc::new(RevenueSourceRepository::new(db.pool().clone())),
        ReviewSettings::from(&config.review),
    ));
    info!(
        minimum_balance_cents = config.review.minimum_balance_cents,
        default_cutoff_years = config.review.default_cutoff_years,
        "RiskReviewService initialized"
    );

    let state = AppState::new(review, db.clone());
    let app = routes::app_router(state)
        .layer(cors_layer(config.is_production()))
        .layer(CompressionLayer::new());

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");

    Ok(())
}

/// CORS 配置：通过 RISK_CORS_ORIGINS 环境变量控制允许的来源
///
/// 默认只允许本地开发地址
fn cors_layer(production: bool) -> CorsLayer {
    let allowed_origins = std::env::var("RISK_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3001,http://localhost:5173".to_string());

    if allowed_origins == "*" {
        if production {
            warn!("RISK_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "注册 Ctrl+C 处理器失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "注册 SIGTERM 处理器失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
