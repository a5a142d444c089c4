//! Alert Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::AlertCreate;
use shared::util::{ALERT_TTL_MS, now_millis};

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::AlertRecord;

const TABLE: &str = "alert";

#[derive(Clone)]
pub struct AlertRepository {
    base: BaseRepository,
}

impl AlertRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new alert
    ///
    /// `created_at` is assigned here (server time); `expires_at` is
    /// fixed to `created_at + 14d` and never recomputed.
    pub async fn create(
        &self,
        data: AlertCreate,
        creator_id: &str,
        creator_display_name: Option<String>,
    ) -> RepoResult<AlertRecord> {
        let created_at = now_millis();
        let record = AlertRecord {
            id: None,
            creator_id: creator_id.to_string(),
            creator_display_name,
            category: data.category,
            description: data.description,
            image_url: data.image_url,
            latitude: data.latitude,
            longitude: data.longitude,
            created_at,
            expires_at: created_at + ALERT_TTL_MS,
            is_resolved: false,
            likes_count: 0,
            comments_count: 0,
        };

        let created: Option<AlertRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create alert".to_string()))
    }

    /// Find alert by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<AlertRecord>> {
        let record_id = parse_id(TABLE, id)?;
        let alert: Option<AlertRecord> = self.base.db().select(record_id).await?;
        Ok(alert)
    }

    /// Find all active alerts
    ///
    /// "Now" is captured once per call so no record straddles the
    /// expiry boundary mid-query.
    pub async fn find_active(&self) -> RepoResult<Vec<AlertRecord>> {
        self.find_active_at(now_millis()).await
    }

    /// Find all alerts that are unresolved and unexpired at `now`
    ///
    /// The ORDER BY is the tie-break base order for the trend ranking;
    /// the authoritative total order is computed client-side by
    /// [`crate::trend::rank_active_alerts`].
    pub async fn find_active_at(&self, now: i64) -> RepoResult<Vec<AlertRecord>> {
        let alerts: Vec<AlertRecord> = self
            .base
            .db()
            .query(
                "SELECT * FROM alert \
                 WHERE is_resolved = false AND expires_at > $now \
                 ORDER BY likes_count DESC, comments_count DESC, created_at DESC",
            )
            .bind(("now", now))
            .await?
            .take(0)?;
        Ok(alerts)
    }

    /// Collect the non-empty descriptions of all active alerts
    ///
    /// Input batch for the trending-keyword extraction. Empty
    /// descriptions carry no signal and are filtered out here.
    pub async fn active_descriptions(&self) -> RepoResult<Vec<String>> {
        let alerts = self.find_active().await?;
        Ok(alerts
            .into_iter()
            .filter_map(|a| a.description)
            .filter(|d| !d.trim().is_empty())
            .collect())
    }

    /// Mark an alert as resolved
    ///
    /// The caller is responsible for the creator-only ownership check.
    pub async fn mark_resolved(&self, id: &str) -> RepoResult<AlertRecord> {
        let record_id = parse_id(TABLE, id)?;
        let updated: Option<AlertRecord> = self
            .base
            .db()
            .query("UPDATE $alert SET is_resolved = true RETURN AFTER")
            .bind(("alert", record_id))
            .await?
            .take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Alert {} not found", id)))
    }
}
