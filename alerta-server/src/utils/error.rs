//! 统一错误处理
//!
//! 从 shared 重新导出应用级错误类型，并提供仓储层与 HTTP 层的错误转换。
//!
//! # 错误码规范
//!
//! | 区段 | 分类 |
//! |------|------|
//! | 0xxx | 通用 (0 成功) |
//! | 1xxx | 认证 |
//! | 2xxx | 权限 |
//! | 3xxx | 警报业务 |
//! | 4xxx | 趋势分析 |
//! | 9xxx | 系统 |

use axum::Json;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::ai::AiError;
use crate::db::repository::RepoError;

/// Success response helper
pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Success response helper with custom message
pub fn ok_with_message<T>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok_with_message(data, message))
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(resource) => AppError::not_found(resource),
            RepoError::Duplicate(resource) => AppError::already_exists(resource),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Schema { .. } | AiError::Empty => AppError::with_message(
                ErrorCode::AnalysisSchemaInvalid,
                "Analysis service returned an unexpected response",
            ),
            AiError::Http(_) | AiError::Service { .. } => AppError::with_message(
                ErrorCode::AnalysisUnavailable,
                "Analysis service is unavailable",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_not_found_maps_to_not_found() {
        let err: AppError = RepoError::NotFound("alert".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn ai_schema_error_maps_to_schema_code() {
        let err: AppError = AiError::Schema {
            raw: "{}".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::AnalysisSchemaInvalid);
    }

    #[test]
    fn ai_service_error_maps_to_unavailable() {
        let err: AppError = AiError::Service {
            status: 503,
            body: "overloaded".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::AnalysisUnavailable);
    }
}
