//! Category API 模块
//!
//! Read-only: the category set is closed and compiled in.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use shared::models::{ALERT_CATEGORIES, AlertCategory};

use crate::core::ServerState;
use crate::utils::{ApiResponse, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(list))
}

/// Category with display metadata
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: AlertCategory,
    pub label: &'static str,
    pub color: &'static str,
}

/// GET /api/categories - 分类及展示元数据
async fn list() -> Json<ApiResponse<Vec<CategoryInfo>>> {
    let categories = ALERT_CATEGORIES
        .iter()
        .map(|&category| {
            let display = category.display();
            CategoryInfo {
                category,
                label: display.label,
                color: display.color,
            }
        })
        .collect();
    ok(categories)
}
