//! Review Queries

use crate::domain::book::BookId;

/// 列出书籍的所有书评
#[derive(Debug, Clone)]
pub struct ListReviewsForBook {
    pub book_id: BookId,
}
