//! Auth API Handlers
//!
//! Email/password sign-up and sign-in. Both failure paths of sign-in
//! (unknown email, wrong password) return the same error code and do
//! comparable argon2 work, so responses do not leak which part failed.

use axum::{Json, extract::State};

use shared::models::{AuthResponse, SignInRequest, SignUpRequest, UserProfile};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::models::UserProfileRecord;
use crate::db::repository::UserProfileRepository;
use crate::utils::validation::{
    MAX_DISPLAY_NAME_LEN, validate_email, validate_optional_text, validate_password,
};
use crate::utils::{ApiResponse, AppError, AppResult, ok};

/// POST /api/auth/signup - 注册
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<SignUpRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    validate_optional_text(&req.display_name, "display_name", MAX_DISPLAY_NAME_LEN)?;

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let repo = UserProfileRepository::new(state.get_db());
    let profile = repo
        .create(req.email.to_lowercase(), req.display_name, password_hash)
        .await?;

    tracing::info!(email = %profile.email, "user signed up");

    issue_token(&state, profile)
}

/// POST /api/auth/signin - 登录
pub async fn signin(
    State(state): State<ServerState>,
    Json(req): Json<SignInRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let repo = UserProfileRepository::new(state.get_db());
    let profile = repo.find_by_email(&req.email.to_lowercase()).await?;

    let Some(profile) = profile else {
        // Burn the same argon2 work as a real verification
        let _ = password::hash_password(&req.password);
        return Err(AppError::invalid_credentials());
    };

    let Some(stored_hash) = profile.password_hash.clone() else {
        let _ = password::hash_password(&req.password);
        return Err(AppError::invalid_credentials());
    };

    let valid = password::verify_password(&stored_hash, &req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !valid {
        tracing::warn!(email = %req.email, "sign-in with wrong password");
        return Err(AppError::invalid_credentials());
    }

    tracing::info!(email = %profile.email, "user signed in");

    issue_token(&state, profile)
}

/// GET /api/auth/me - 当前用户资料
///
/// The token subject is the profile record id. Creates the profile row
/// lazily if a valid token arrives before one exists.
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let repo = UserProfileRepository::new(state.get_db());
    let profile = match repo.find_by_id(&user.id).await? {
        Some(profile) => profile,
        None => {
            repo.get_or_create(&user.email, user.display_name.clone(), None)
                .await?
        }
    };
    Ok(ok(profile.into()))
}

fn issue_token(
    state: &ServerState,
    profile: UserProfileRecord,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let user_id = profile
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &profile.email, profile.display_name.clone())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(ok(AuthResponse {
        token,
        user: profile.into(),
    }))
}
