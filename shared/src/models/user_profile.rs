//! User Profile Model

use serde::{Deserialize, Serialize};

/// User profile entity (API-facing)
///
/// Created lazily on first sign-in if absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Unix millis
    #[serde(default)]
    pub created_at: i64,
}

/// Sign-up payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Auth response: token + profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
