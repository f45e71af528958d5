//! HTTP Error Handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, ErrorKind};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errno = i32::from(status.as_u16());

        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno, error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno, error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno, error = %msg, "Internal server error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(errno, message))).into_response()
    }
}

/// 按错误分类映射为 HTTP 错误
///
/// 存储失败的细节只写日志，不返回给客户端
impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e.kind() {
            ErrorKind::NotFound => ApiError::NotFound(e.to_string()),
            ErrorKind::InvalidData => ApiError::BadRequest(e.to_string()),
            ErrorKind::StoreOperationFailed => {
                tracing::error!(error = %e, "Store operation failed");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

/// 请求体缺失或不是合法 JSON
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RepositoryError;

    #[test]
    fn test_kind_to_status() {
        let not_found: ApiError = ApplicationError::not_found("Book", 1).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid: ApiError = ApplicationError::invalid_data("rating", "bad rating").into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let failed: ApiError = ApplicationError::store("save book")(
            RepositoryError::DatabaseError("disk full".to_string()),
        )
        .into();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_failure_is_opaque() {
        let failed: ApiError = ApplicationError::store("save book")(
            RepositoryError::DatabaseError("disk full".to_string()),
        )
        .into();

        match failed {
            ApiError::Internal(msg) => assert!(!msg.contains("disk full")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_data_keeps_field_message() {
        let err: ApiError = ApplicationError::invalid_data("title", "title is required").into();
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "title is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
