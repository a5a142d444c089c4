//! Comment Repository

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::util::now_millis;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::CommentRecord;

const TABLE: &str = "comment";

#[derive(Clone)]
pub struct CommentRepository {
    base: BaseRepository,
}

impl CommentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Add a comment to an alert
    ///
    /// Inserting the comment and bumping `comments_count` happen in
    /// one transaction so the denormalized counter cannot drift.
    pub async fn create(
        &self,
        alert_id: &str,
        user_id: &str,
        user_display_name: &str,
        user_photo_url: Option<String>,
        text: String,
    ) -> RepoResult<CommentRecord> {
        let alert = parse_id("alert", alert_id)?;

        let mut result = self
            .base
            .db()
            .query(
                "BEGIN TRANSACTION; \
                 CREATE type::table($table) CONTENT { \
                     alert_id: $alert, \
                     user_id: $user, \
                     user_display_name: $display_name, \
                     user_photo_url: $photo_url, \
                     text: $text, \
                     created_at: $now \
                 }; \
                 UPDATE $alert SET comments_count += 1; \
                 COMMIT TRANSACTION;",
            )
            .bind(("table", TABLE))
            .bind(("alert", alert))
            .bind(("user", user_id.to_string()))
            .bind(("display_name", user_display_name.to_string()))
            .bind(("photo_url", user_photo_url))
            .bind(("text", text))
            .bind(("now", now_millis()))
            .await?;

        let created: Option<CommentRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create comment".to_string()))
    }

    /// List comments for an alert, oldest first
    pub async fn find_by_alert(&self, alert_id: &str) -> RepoResult<Vec<CommentRecord>> {
        let alert: RecordId = parse_id("alert", alert_id)?;
        let comments: Vec<CommentRecord> = self
            .base
            .db()
            .query("SELECT * FROM comment WHERE alert_id = $alert ORDER BY created_at ASC")
            .bind(("alert", alert))
            .await?
            .take(0)?;
        Ok(comments)
    }
}
