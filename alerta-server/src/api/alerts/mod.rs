//! Alert API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/alerts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_active).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/resolve", post(handler::resolve))
        .route(
            "/{id}/like",
            post(handler::like).delete(handler::unlike).get(handler::has_liked),
        )
        .route(
            "/{id}/comments",
            get(handler::list_comments).post(handler::add_comment),
        )
}
