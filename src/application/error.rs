//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，以及边界层使用的错误分类

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::book::BookError;

/// 错误分类
///
/// 边界层（HTTP 等）只根据分类映射到传输层状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 资源不存在，调用方可恢复，不重试
    NotFound,
    /// 输入数据无效，调用方可修正，不重试
    InvalidData,
    /// 存储失败，对调用方不透明，本层不重试
    StoreOperationFailed,
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 输入校验失败（字段级）
    #[error("{message}")]
    InvalidData {
        field: &'static str,
        message: String,
    },

    /// 存储操作失败
    #[error("Store operation '{operation}' failed: {source}")]
    StoreOperationFailed {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建字段校验错误
    pub fn invalid_data(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidData {
            field,
            message: message.into(),
        }
    }

    /// 包装存储错误，记录失败的操作名
    ///
    /// 用法: `.map_err(ApplicationError::store("save book"))`
    pub fn store(operation: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::StoreOperationFailed { operation, source }
    }

    /// 错误分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidData { .. } => ErrorKind::InvalidData,
            Self::StoreOperationFailed { .. } => ErrorKind::StoreOperationFailed,
        }
    }
}

impl From<BookError> for ApplicationError {
    fn from(err: BookError) -> Self {
        Self::invalid_data(err.field(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            ApplicationError::not_found("Book", 1).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ApplicationError::invalid_data("rating", "bad").kind(),
            ErrorKind::InvalidData
        );
        let err = ApplicationError::store("delete book")(RepositoryError::DatabaseError(
            "disk I/O error".to_string(),
        ));
        assert_eq!(err.kind(), ErrorKind::StoreOperationFailed);
    }

    #[test]
    fn test_store_failure_keeps_operation_and_cause() {
        let err = ApplicationError::store("save review")(RepositoryError::DatabaseError(
            "FOREIGN KEY constraint failed".to_string(),
        ));

        match &err {
            ApplicationError::StoreOperationFailed { operation, .. } => {
                assert_eq!(*operation, "save review")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("save review"));
        assert!(err
            .source()
            .map(|s| s.to_string().contains("FOREIGN KEY"))
            .unwrap_or(false));
    }

    #[test]
    fn test_book_error_becomes_invalid_data() {
        let err: ApplicationError = BookError::RatingOutOfRange(7).into();

        match err {
            ApplicationError::InvalidData { field, message } => {
                assert_eq!(field, "rating");
                assert_eq!(message, "rating must be between 1 and 5, got 7");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApplicationError::not_found("Book", 999).to_string(),
            "Book not found: 999"
        );
    }
}
