//! Book Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{Author, BookError, BookId, Genre, Review, Title};

/// 待持久化的书籍（已校验，尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title: Title,
    author: Author,
    genre: Genre,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Result<Self, BookError> {
        Ok(Self {
            title: Title::new(title)?,
            author: Author::new(author)?,
            genre: Genre::new(genre)?,
        })
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn genre(&self) -> &Genre {
        &self.genre
    }
}

/// Book 聚合根
///
/// 不变量:
/// - id 创建后不可变
/// - reviews 按创建顺序排列，且全部属于本书
/// - 删除 Book 时其 Review 一并删除（由存储层事务保证）
///
/// Review 不持有指向 Book 的引用，只保存 book_id；
/// `reviews` 在读取时由存储层按 book_id 查询后装配。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
    genre: Genre,
    reviews: Vec<Review>,
    created_at: DateTime<Utc>,
}

impl Book {
    /// 由存储记录重建聚合
    pub fn restore(
        id: BookId,
        details: NewBook,
        created_at: DateTime<Utc>,
        mut reviews: Vec<Review>,
    ) -> Self {
        // 只保留属于本书的书评
        reviews.retain(|review| review.book_id() == id);

        Self {
            id,
            title: details.title,
            author: details.author,
            genre: details.genre,
            reviews,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 当前书评集合的平均评分
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.reviews)
    }
}

/// 平均评分 = sum(rating) / count
///
/// 没有书评时返回 0.0（不是 NaN）
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    let sum: u64 = reviews
        .iter()
        .map(|review| u64::from(review.rating().value()))
        .sum();

    sum as f64 / reviews.len() as f64
}
