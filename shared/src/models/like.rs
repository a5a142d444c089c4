//! Like Model

use serde::{Deserialize, Serialize};

/// Like entity (API-facing)
///
/// At most one like exists per (alert, user) pair. The record id is
/// deterministic (`{alert_id}_{user_id}`) so a second like for the
/// same pair is rejected at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: Option<String>,
    pub alert_id: String,
    pub user_id: String,
    /// Unix millis, assigned server-side
    pub created_at: i64,
}
