//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod alert;
pub mod comment;
pub mod like;
pub mod user_profile;

// Re-exports
pub use alert::{AlertId, AlertRecord};
pub use comment::CommentRecord;
pub use like::LikeRecord;
pub use user_profile::UserProfileRecord;
