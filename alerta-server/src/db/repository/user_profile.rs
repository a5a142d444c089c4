//! User Profile Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::util::now_millis;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::UserProfileRecord;

const TABLE: &str = "user_profile";

#[derive(Clone)]
pub struct UserProfileRepository {
    base: BaseRepository,
}

impl UserProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find profile by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<UserProfileRecord>> {
        let record_id = parse_id(TABLE, id)?;
        let profile: Option<UserProfileRecord> = self.base.db().select(record_id).await?;
        Ok(profile)
    }

    /// Find profile by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserProfileRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user_profile WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let profiles: Vec<UserProfileRecord> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    /// Create a profile with a local password hash
    pub async fn create(
        &self,
        email: String,
        display_name: Option<String>,
        password_hash: String,
    ) -> RepoResult<UserProfileRecord> {
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Profile for '{}' already exists",
                email
            )));
        }

        let record = UserProfileRecord {
            id: None,
            email,
            display_name,
            photo_url: None,
            password_hash: Some(password_hash),
            created_at: now_millis(),
        };

        let created: Option<UserProfileRecord> =
            self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create profile".to_string()))
    }

    /// Get the profile for an email, creating it if absent
    ///
    /// Profiles are created lazily on first sign-in: a token holder
    /// without a profile row gets one on first authenticated touch.
    pub async fn get_or_create(
        &self,
        email: &str,
        display_name: Option<String>,
        photo_url: Option<String>,
    ) -> RepoResult<UserProfileRecord> {
        if let Some(existing) = self.find_by_email(email).await? {
            return Ok(existing);
        }

        let record = UserProfileRecord {
            id: None,
            email: email.to_string(),
            display_name,
            photo_url,
            password_hash: None,
            created_at: now_millis(),
        };

        let created: Option<UserProfileRecord> =
            self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create profile".to_string()))
    }
}
