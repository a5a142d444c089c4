//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod alert;
pub mod comment;
pub mod like;
pub mod user_profile;

// Re-exports
pub use alert::AlertRepository;
pub use comment::CommentRepository;
pub use like::LikeRepository;
pub use user_profile::UserProfileRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse an id into a [`RecordId`] for the given table
///
/// Accepts either the full `"table:key"` form (from API paths) or a
/// bare key.
pub fn parse_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if id.contains(':') {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid id: {}", id)))?;
        if record_id.table() != table {
            return Err(RepoError::Validation(format!(
                "Id {} does not belong to table {}",
                id, table
            )));
        }
        Ok(record_id)
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
