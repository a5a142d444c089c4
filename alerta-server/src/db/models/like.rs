//! Like Record Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::Like;

use super::serde_helpers;

/// Like record as stored in the `alert_like` table
///
/// The record key is deterministic (`{alert_key}_{user_key}`), which
/// makes the (alert, user) pair unique at the storage layer: creating
/// the same key twice fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRecord {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub alert_id: RecordId,
    pub user_id: String,
    /// Unix millis, server-assigned
    pub created_at: i64,
}

impl From<LikeRecord> for Like {
    fn from(r: LikeRecord) -> Self {
        Like {
            id: r.id.map(|id| id.to_string()),
            alert_id: r.alert_id.to_string(),
            user_id: r.user_id,
            created_at: r.created_at,
        }
    }
}
