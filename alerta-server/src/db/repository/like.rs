//! Like Repository
//!
//! Enforces the one-like-per-(alert, user) invariant through a
//! deterministic record key, and keeps the denormalized `likes_count`
//! in step with the like records inside a single transaction.

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::util::now_millis;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::LikeRecord;

const TABLE: &str = "alert_like";

#[derive(Clone)]
pub struct LikeRepository {
    base: BaseRepository,
}

impl LikeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Deterministic like id for an (alert, user) pair
    fn like_id(alert_id: &RecordId, user_id: &str) -> RecordId {
        let user_key = user_id.rsplit(':').next().unwrap_or(user_id);
        RecordId::from_table_key(TABLE, format!("{}_{}", alert_id.key(), user_key))
    }

    /// Like an alert
    ///
    /// Creating the like record and bumping `likes_count` happen in
    /// one transaction: if the like already exists, the CREATE fails
    /// and the counter update rolls back with it.
    pub async fn like(&self, alert_id: &str, user_id: &str) -> RepoResult<LikeRecord> {
        let alert = parse_id("alert", alert_id)?;
        let like_id = Self::like_id(&alert, user_id);

        let mut result = self
            .base
            .db()
            .query(
                "BEGIN TRANSACTION; \
                 CREATE $like_id CONTENT { \
                     alert_id: $alert, \
                     user_id: $user, \
                     created_at: $now \
                 }; \
                 UPDATE $alert SET likes_count += 1; \
                 COMMIT TRANSACTION;",
            )
            .bind(("like_id", like_id))
            .bind(("alert", alert))
            .bind(("user", user_id.to_string()))
            .bind(("now", now_millis()))
            .await?;

        let created: Option<LikeRecord> = result.take(0).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("already exists") {
                RepoError::Duplicate(format!("Alert {} already liked by {}", alert_id, user_id))
            } else {
                RepoError::Database(msg)
            }
        })?;

        created.ok_or_else(|| RepoError::Database("Failed to create like".to_string()))
    }

    /// Remove a like
    ///
    /// Returns `false` if no like existed for the pair. The delete and
    /// the counter update run in one transaction, and the decrement is
    /// derived from what the DELETE actually removed, so two racing
    /// unlikes for the same pair can only subtract once. The counter
    /// never goes below zero.
    pub async fn unlike(&self, alert_id: &str, user_id: &str) -> RepoResult<bool> {
        let alert = parse_id("alert", alert_id)?;
        let like_id = Self::like_id(&alert, user_id);

        let mut result = self
            .base
            .db()
            .query(
                "BEGIN TRANSACTION; \
                 LET $removed = (DELETE $like_id RETURN BEFORE); \
                 UPDATE $alert SET likes_count = math::max([likes_count - array::len($removed), 0]); \
                 RETURN array::len($removed); \
                 COMMIT TRANSACTION;",
            )
            .bind(("like_id", like_id))
            .bind(("alert", alert))
            .await?;

        let last = result.num_statements() - 1;
        let removed: Option<i64> = result.take(last)?;
        Ok(removed.unwrap_or(0) > 0)
    }

    /// Whether the user has liked the alert
    pub async fn has_liked(&self, alert_id: &str, user_id: &str) -> RepoResult<bool> {
        let alert = parse_id("alert", alert_id)?;
        let like_id = Self::like_id(&alert, user_id);
        let existing: Option<LikeRecord> = self.base.db().select(like_id).await?;
        Ok(existing.is_some())
    }
}
