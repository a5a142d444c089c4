//! Trending API Handlers

use axum::{Json, extract::State};

use shared::models::Alert;

use crate::core::ServerState;
use crate::db::repository::AlertRepository;
use crate::trend::rank_active_alerts;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /api/alerts/trending - 按互动热度排序的活跃警报
///
/// An empty city is a valid state: no active alerts yields 200 with an
/// empty list, never an error.
pub async fn trending(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Alert>>>> {
    let repo = AlertRepository::new(state.get_db());
    let alerts: Vec<Alert> = repo
        .find_active()
        .await?
        .into_iter()
        .map(Alert::from)
        .collect();

    Ok(ok(rank_active_alerts(alerts)))
}
