//! Analysis API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/analysis/trending-keywords",
        get(handler::trending_keywords),
    )
}
