//! Book Context - Entities

use chrono::{DateTime, Utc};

use super::{BookError, BookId, Comment, Rating, ReviewId, ReviewerName};

/// 待持久化的书评（已校验，尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    reviewer: ReviewerName,
    comment: Comment,
    rating: Rating,
}

impl NewReview {
    /// 校验原始输入
    ///
    /// 校验顺序: reviewer -> comment -> rating，返回第一个错误
    pub fn new(
        reviewer: impl Into<String>,
        comment: impl Into<String>,
        rating: i64,
    ) -> Result<Self, BookError> {
        Ok(Self {
            reviewer: ReviewerName::new(reviewer)?,
            comment: Comment::new(comment)?,
            rating: Rating::new(rating)?,
        })
    }

    pub fn reviewer(&self) -> &ReviewerName {
        &self.reviewer
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

/// 书评 - Book 聚合内的实体
///
/// 不变量:
/// - book_id 在持久化后不可为空，且指向创建时存在的 Book
/// - rating 始终在 [1, 5]
/// - 不能脱离所属 Book 单独更新或删除
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: ReviewId,
    book_id: BookId,
    reviewer: ReviewerName,
    comment: Comment,
    rating: Rating,
    created_at: DateTime<Utc>,
}

impl Review {
    /// 由已分配的 ID 与已校验的字段重建
    pub fn restore(
        id: ReviewId,
        book_id: BookId,
        review: NewReview,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            book_id,
            reviewer: review.reviewer,
            comment: review.comment,
            rating: review.rating,
            created_at,
        }
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn reviewer(&self) -> &ReviewerName {
        &self.reviewer
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
