//! Alert Record Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{Alert, AlertCategory};

use super::serde_helpers;

pub type AlertId = RecordId;

/// Alert record as stored in the `alert` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<AlertId>,
    pub creator_id: String,
    pub creator_display_name: Option<String>,
    pub category: AlertCategory,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Unix millis, server-assigned
    pub created_at: i64,
    /// Unix millis, created_at + 14d, fixed at creation
    pub expires_at: i64,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
}

impl From<AlertRecord> for Alert {
    fn from(r: AlertRecord) -> Self {
        Alert {
            id: r.id.map(|id| id.to_string()),
            creator_id: r.creator_id,
            creator_display_name: r.creator_display_name,
            category: r.category,
            description: r.description,
            image_url: r.image_url,
            latitude: r.latitude,
            longitude: r.longitude,
            created_at: r.created_at,
            expires_at: r.expires_at,
            is_resolved: r.is_resolved,
            likes_count: r.likes_count,
            comments_count: r.comments_count,
        }
    }
}
