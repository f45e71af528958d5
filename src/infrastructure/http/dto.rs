//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::book::{Book, BookId, Review};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

/// 缺失的字段按空字符串处理，由领域校验报告具体字段
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub average_rating: f64,
    pub reviews: Vec<ReviewResponse>,
    pub created_at: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().value(),
            title: book.title().as_str().to_string(),
            author: book.author().as_str().to_string(),
            genre: book.genre().as_str().to_string(),
            average_rating: book.average_rating(),
            reviews: book.reviews().iter().map(ReviewResponse::from).collect(),
            created_at: book.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AverageRatingResponse {
    pub book_id: i64,
    pub average_rating: f64,
}

impl AverageRatingResponse {
    pub fn new(book_id: BookId, average_rating: f64) -> Self {
        Self {
            book_id: book_id.value(),
            average_rating,
        }
    }
}

// ============================================================================
// Review DTOs
// ============================================================================

/// rating 缺失时为 0，会被领域校验拒绝
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(default)]
    pub reviewer: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating: i64,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub book_id: i64,
    pub reviewer: String,
    pub comment: String,
    pub rating: u8,
    pub created_at: String,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id().value(),
            book_id: review.book_id().value(),
            reviewer: review.reviewer().as_str().to_string(),
            comment: review.comment().as_str().to_string(),
            rating: review.rating().value(),
            created_at: review.created_at().to_rfc3339(),
        }
    }
}
