//! Upload Routes
//!
//! Image upload endpoint for authenticated users. Stored files are
//! served by the static `/images` route mounted in the server core.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/images", post(handler::upload))
}
