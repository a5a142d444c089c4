//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`auth`] - 认证相关接口
//! - [`alerts`] - 警报管理接口 (创建/查询/解决/点赞/评论)
//! - [`trending`] - 热门警报排行接口
//! - [`analysis`] - 趋势关键词分析接口
//! - [`upload`] - 图片上传接口
//! - [`categories`] - 分类元数据接口

pub mod alerts;
pub mod analysis;
pub mod auth;
pub mod categories;
pub mod health;
pub mod trending;
pub mod upload;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

/// Merge all resource routers into the application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(alerts::router())
        .merge(trending::router())
        .merge(analysis::router())
        .merge(upload::router())
        .merge(categories::router())
}
