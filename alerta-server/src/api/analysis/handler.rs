//! Analysis API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::AlertRepository;
use crate::utils::{ApiResponse, AppResult, ok};

/// Trending keyword response
#[derive(Debug, Serialize)]
pub struct TrendingKeywordsResponse {
    pub keywords: Vec<String>,
    /// How many alert descriptions were fed into the extraction
    pub analyzed_count: usize,
}

/// GET /api/analysis/trending-keywords - 活跃警报的趋势关键词
///
/// No active descriptions yields an empty keyword list without ever
/// calling the generative-text service.
pub async fn trending_keywords(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<TrendingKeywordsResponse>>> {
    let repo = AlertRepository::new(state.get_db());
    let descriptions = repo.active_descriptions().await?;

    let extractor = state.get_keyword_extractor();
    let keywords = extractor.extract(&descriptions).await?;

    Ok(ok(TrendingKeywordsResponse {
        keywords,
        analyzed_count: descriptions.len(),
    }))
}
