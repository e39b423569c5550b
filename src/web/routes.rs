//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::api, types::AppState};

/// 创建 API 路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/translate", post(api::translate))
        .route("/api/translate/blocked-countries", post(api::blocked_countries))
        .route("/api/health", get(api::health))
}
