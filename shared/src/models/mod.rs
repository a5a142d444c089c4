//! Domain Models

pub mod alert;
pub mod comment;
pub mod like;
pub mod user_profile;

// Re-exports
pub use alert::{ALERT_CATEGORIES, Alert, AlertCategory, AlertCreate, CategoryDisplay};
pub use comment::{Comment, CommentCreate};
pub use like::Like;
pub use user_profile::{AuthResponse, SignInRequest, SignUpRequest, UserProfile};
