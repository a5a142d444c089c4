//! Unified error handling
//!
//! - [`ErrorCode`] — u16 error codes, banded by category
//! - [`AppError`] — application error with code + message + details
//! - HTTP rendering via `IntoResponse` ([`types`])

pub mod codes;
pub mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
