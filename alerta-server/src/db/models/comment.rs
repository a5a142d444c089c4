//! Comment Record Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::Comment;

use super::serde_helpers;

/// Comment record as stored in the `comment` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Owning alert, stored as a record link
    #[serde(with = "serde_helpers::record_id")]
    pub alert_id: RecordId,
    pub user_id: String,
    pub user_display_name: String,
    pub user_photo_url: Option<String>,
    pub text: String,
    /// Unix millis, server-assigned
    pub created_at: i64,
}

impl From<CommentRecord> for Comment {
    fn from(r: CommentRecord) -> Self {
        Comment {
            id: r.id.map(|id| id.to_string()),
            alert_id: r.alert_id.to_string(),
            user_id: r.user_id,
            user_display_name: r.user_display_name,
            user_photo_url: r.user_photo_url,
            text: r.text,
            created_at: r.created_at,
        }
    }
}
