//! Trending API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Static segment wins over the /api/alerts/{id} param route
    Router::new().route("/api/alerts/trending", get(handler::trending))
}
