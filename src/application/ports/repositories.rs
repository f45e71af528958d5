//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::book::{Book, BookId, NewBook, NewReview, Review, ReviewId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Book Records
// ============================================================================

/// 新书记录（ID 由存储分配）
#[derive(Debug, Clone)]
pub struct NewBookRecord {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub created_at: DateTime<Utc>,
}

impl From<&NewBook> for NewBookRecord {
    fn from(book: &NewBook) -> Self {
        Self {
            title: book.title().as_str().to_string(),
            author: book.author().as_str().to_string(),
            genre: book.genre().as_str().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// 书籍实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Review Records
// ============================================================================

/// 新书评记录（ID 由存储分配）
#[derive(Debug, Clone)]
pub struct NewReviewRecord {
    pub book_id: BookId,
    pub reviewer: String,
    pub comment: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

impl NewReviewRecord {
    pub fn new(book_id: BookId, review: &NewReview) -> Self {
        Self {
            book_id,
            reviewer: review.reviewer().as_str().to_string(),
            comment: review.comment().as_str().to_string(),
            rating: i64::from(review.rating().value()),
            created_at: Utc::now(),
        }
    }
}

/// 书评实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub book_id: BookId,
    pub reviewer: String,
    pub comment: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Record -> Domain
// ============================================================================

/// 存储中的数据不满足领域约束时视为序列化错误
impl TryFrom<ReviewRecord> for Review {
    type Error = RepositoryError;

    fn try_from(record: ReviewRecord) -> Result<Self, Self::Error> {
        let review = NewReview::new(record.reviewer, record.comment, record.rating).map_err(|e| {
            RepositoryError::SerializationError(format!("stored review {}: {}", record.id, e))
        })?;

        Ok(Review::restore(
            record.id,
            record.book_id,
            review,
            record.created_at,
        ))
    }
}

impl BookRecord {
    /// 与书评记录一起装配为 Book 聚合
    pub fn into_book(self, reviews: Vec<ReviewRecord>) -> Result<Book, RepositoryError> {
        let details = NewBook::new(self.title, self.author, self.genre).map_err(|e| {
            RepositoryError::SerializationError(format!("stored book {}: {}", self.id, e))
        })?;

        let reviews = reviews
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Book::restore(self.id, details, self.created_at, reviews))
    }
}

// ============================================================================
// Book Repository
// ============================================================================

/// Book Repository Port
///
/// 聚合级写操作（建书、级联删书、添加书评）必须各自在一个事务内完成，
/// 并发读者不能观察到部分结果
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 保存新书，返回分配了 ID 的记录
    async fn save_book(&self, book: &NewBookRecord) -> Result<BookRecord, RepositoryError>;

    /// 根据 ID 查找书籍
    async fn find_book_by_id(&self, id: BookId) -> Result<Option<BookRecord>, RepositoryError>;

    /// 获取所有书籍（按 ID 升序）
    async fn find_all_books(&self) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 删除书籍，并在同一事务内删除其所有书评
    async fn delete_book_by_id(&self, id: BookId) -> Result<(), RepositoryError>;

    /// 书籍是否存在
    async fn exists_book_by_id(&self, id: BookId) -> Result<bool, RepositoryError>;

    /// 保存新书评，返回分配了 ID 的记录
    ///
    /// 所属书籍在写入时已不存在则返回错误
    async fn save_review(&self, review: &NewReviewRecord) -> Result<ReviewRecord, RepositoryError>;

    /// 获取书籍的所有书评（按创建顺序）
    async fn find_reviews_by_book_id(
        &self,
        book_id: BookId,
    ) -> Result<Vec<ReviewRecord>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_record(id: i64, rating: i64) -> ReviewRecord {
        ReviewRecord {
            id: ReviewId::new(id),
            book_id: BookId::new(1),
            reviewer: "A".to_string(),
            comment: "Great".to_string(),
            rating,
            created_at: Utc::now(),
        }
    }

    fn book_record() -> BookRecord {
        BookRecord {
            id: BookId::new(1),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_book() {
        let book = book_record()
            .into_book(vec![review_record(1, 5), review_record(2, 3)])
            .unwrap();

        assert_eq!(book.title().as_str(), "Dune");
        assert_eq!(book.review_count(), 2);
        assert_eq!(book.average_rating(), 4.0);
    }

    #[test]
    fn test_corrupt_review_is_serialization_error() {
        let err = book_record()
            .into_book(vec![review_record(1, 11)])
            .unwrap_err();

        assert!(matches!(err, RepositoryError::SerializationError(_)));
    }

    #[test]
    fn test_new_review_record_from_draft() {
        let draft = NewReview::new("B", "OK", 3).unwrap();
        let record = NewReviewRecord::new(BookId::new(4), &draft);

        assert_eq!(record.book_id, BookId::new(4));
        assert_eq!(record.reviewer, "B");
        assert_eq!(record.comment, "OK");
        assert_eq!(record.rating, 3);
    }
}
