//! Book Context - Errors

use thiserror::Error;

/// 字段级校验错误
///
/// 每个变体都带有出错字段名，应用层据此构造 InvalidData
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("{field} is required")]
    Blank { field: &'static str },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

impl BookError {
    /// 出错的字段名
    pub fn field(&self) -> &'static str {
        match self {
            BookError::Blank { field } | BookError::TooLong { field, .. } => field,
            BookError::RatingOutOfRange(_) => "rating",
        }
    }
}
