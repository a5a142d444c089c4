//! Alert API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{Alert, AlertCreate, Comment, CommentCreate};
use shared::util::now_millis;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::AlertRecord;
use crate::db::repository::{AlertRepository, CommentRepository, LikeRepository, RepoError};
use crate::utils::validation::{
    MAX_COMMENT_LEN, MAX_DESCRIPTION_LEN, MAX_URL_LEN, validate_coordinates,
    validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, ok, ok_with_message};

/// POST /api/alerts - 创建警报
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AlertCreate>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    validate_coordinates(payload.latitude, payload.longitude)?;

    let repo = AlertRepository::new(state.get_db());
    let alert = repo
        .create(payload, &user.id, user.display_name.clone())
        .await?;

    tracing::info!(
        alert_id = ?alert.id,
        category = ?alert.category,
        "alert created"
    );

    Ok(ok(alert.into()))
}

/// GET /api/alerts - 获取所有活跃警报
pub async fn list_active(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Alert>>>> {
    let repo = AlertRepository::new(state.get_db());
    let alerts = repo.find_active().await?;
    Ok(ok(alerts.into_iter().map(Alert::from).collect()))
}

/// GET /api/alerts/:id - 获取单个警报
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    let alert = require_alert(&state, &id).await?;
    Ok(ok(alert.into()))
}

/// POST /api/alerts/:id/resolve - 标记解决 (仅创建者)
pub async fn resolve(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    let alert = require_alert(&state, &id).await?;

    if alert.creator_id != user.id {
        tracing::warn!(alert_id = %id, user_id = %user.id, "resolve denied for non-creator");
        return Err(AppError::forbidden("Only the creator can resolve an alert"));
    }
    if alert.is_resolved {
        return Err(AppError::with_message(
            ErrorCode::AlertAlreadyResolved,
            "Alert is already resolved",
        ));
    }

    let repo = AlertRepository::new(state.get_db());
    let updated = repo.mark_resolved(&id).await?;

    tracing::info!(alert_id = %id, "alert resolved by creator");

    Ok(ok_with_message(updated.into(), "Alert resolved"))
}

/// POST /api/alerts/:id/like - 点赞
pub async fn like(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    require_active_alert(&state, &id).await?;

    let likes = LikeRepository::new(state.get_db());
    match likes.like(&id, &user.id).await {
        Ok(_) => {}
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::with_message(
                ErrorCode::AlreadyLiked,
                "Alert already liked",
            ));
        }
        Err(e) => return Err(e.into()),
    }

    let alert = require_alert(&state, &id).await?;
    Ok(ok(alert.into()))
}

/// DELETE /api/alerts/:id/like - 取消点赞
pub async fn unlike(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    require_alert(&state, &id).await?;

    let likes = LikeRepository::new(state.get_db());
    let removed = likes.unlike(&id, &user.id).await?;
    if !removed {
        tracing::debug!(alert_id = %id, user_id = %user.id, "unlike without existing like");
    }

    let alert = require_alert(&state, &id).await?;
    Ok(ok(alert.into()))
}

/// GET /api/alerts/:id/like - 是否已点赞
pub async fn has_liked(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    require_alert(&state, &id).await?;
    let likes = LikeRepository::new(state.get_db());
    let liked = likes.has_liked(&id, &user.id).await?;
    Ok(ok(liked))
}

/// GET /api/alerts/:id/comments - 评论列表 (最早在前)
pub async fn list_comments(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Comment>>>> {
    require_alert(&state, &id).await?;
    let comments = CommentRepository::new(state.get_db());
    let list = comments.find_by_alert(&id).await?;
    Ok(ok(list.into_iter().map(Comment::from).collect()))
}

/// POST /api/alerts/:id/comments - 发表评论
pub async fn add_comment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<CommentCreate>,
) -> AppResult<Json<ApiResponse<Comment>>> {
    validate_required_text(&payload.text, "text", MAX_COMMENT_LEN)?;
    require_active_alert(&state, &id).await?;

    let display_name = user
        .display_name
        .clone()
        .unwrap_or_else(|| user.email.clone());

    let comments = CommentRepository::new(state.get_db());
    let comment = comments
        .create(&id, &user.id, &display_name, None, payload.text)
        .await?;

    Ok(ok(comment.into()))
}

/// Fetch an alert or fail with a 404-mapped error.
async fn require_alert(state: &ServerState, id: &str) -> AppResult<AlertRecord> {
    let repo = AlertRepository::new(state.get_db());
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Alert {} not found", id)))
}

/// Fetch an alert and reject interactions with resolved or expired ones.
async fn require_active_alert(state: &ServerState, id: &str) -> AppResult<AlertRecord> {
    let alert = require_alert(state, id).await?;
    if alert.is_resolved {
        return Err(AppError::with_message(
            ErrorCode::AlertAlreadyResolved,
            "Alert is already resolved",
        ));
    }
    if alert.expires_at <= now_millis() {
        return Err(AppError::with_message(
            ErrorCode::AlertExpired,
            "Alert has expired",
        ));
    }
    Ok(alert)
}
