//! User Profile Record Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::UserProfile;

use super::serde_helpers;

/// User profile record as stored in the `user_profile` table
///
/// Carries the Argon2 password hash; the hash never crosses the API
/// boundary (the conversion to [`UserProfile`] drops it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileRecord {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Argon2 PHC string; None for profiles created for federated
    /// sign-ins that never set a local password
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Unix millis
    #[serde(default)]
    pub created_at: i64,
}

impl From<UserProfileRecord> for UserProfile {
    fn from(r: UserProfileRecord) -> Self {
        UserProfile {
            id: r.id.map(|id| id.to_string()),
            email: r.email,
            display_name: r.display_name,
            photo_url: r.photo_url,
            created_at: r.created_at,
        }
    }
}
