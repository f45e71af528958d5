//! Review Commands

use crate::domain::book::BookId;

/// 添加书评命令
///
/// 字段为原始输入，在处理器内再次校验
#[derive(Debug, Clone)]
pub struct AddReview {
    pub book_id: BookId,
    pub reviewer: String,
    pub comment: String,
    pub rating: i64,
}
