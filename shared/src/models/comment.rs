//! Comment Model

use serde::{Deserialize, Serialize};

/// Comment entity (API-facing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub alert_id: String,
    pub user_id: String,
    pub user_display_name: String,
    pub user_photo_url: Option<String>,
    pub text: String,
    /// Unix millis, assigned server-side
    pub created_at: i64,
}

/// Create comment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreate {
    pub text: String,
}
