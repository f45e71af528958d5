//! In-Memory Book Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{
    BookRecord, BookRepositoryPort, NewBookRecord, NewReviewRecord, RepositoryError, ReviewRecord,
};
use crate::domain::book::{BookId, ReviewId};

/// 一本书及其书评，存放在同一个 map 条目里
///
/// 条目级锁保证删书级联与追加书评的原子性
struct BookEntry {
    book: BookRecord,
    reviews: Vec<ReviewRecord>,
}

/// 内存书籍仓储
pub struct InMemoryBookRepository {
    books: DashMap<BookId, BookEntry>,
    next_book_id: AtomicI64,
    next_review_id: AtomicI64,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            next_book_id: AtomicI64::new(1),
            next_review_id: AtomicI64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 当前存储的书评总数
    pub fn review_count(&self) -> usize {
        self.books.iter().map(|entry| entry.reviews.len()).sum()
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn save_book(&self, book: &NewBookRecord) -> Result<BookRecord, RepositoryError> {
        let id = BookId::new(self.next_book_id.fetch_add(1, Ordering::SeqCst));
        let record = BookRecord {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            created_at: book.created_at,
        };

        self.books.insert(
            id,
            BookEntry {
                book: record.clone(),
                reviews: Vec::new(),
            },
        );
        tracing::debug!(book_id = %id, "Book stored in memory");

        Ok(record)
    }

    async fn find_book_by_id(&self, id: BookId) -> Result<Option<BookRecord>, RepositoryError> {
        Ok(self.books.get(&id).map(|entry| entry.book.clone()))
    }

    async fn find_all_books(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let mut books: Vec<BookRecord> = self
            .books
            .iter()
            .map(|entry| entry.book.clone())
            .collect();
        books.sort_by_key(|book| book.id);
        Ok(books)
    }

    async fn delete_book_by_id(&self, id: BookId) -> Result<(), RepositoryError> {
        if let Some((_, entry)) = self.books.remove(&id) {
            tracing::debug!(
                book_id = %id,
                reviews = entry.reviews.len(),
                "Book removed from memory"
            );
        }
        Ok(())
    }

    async fn exists_book_by_id(&self, id: BookId) -> Result<bool, RepositoryError> {
        Ok(self.books.contains_key(&id))
    }

    async fn save_review(&self, review: &NewReviewRecord) -> Result<ReviewRecord, RepositoryError> {
        let mut entry = self
            .books
            .get_mut(&review.book_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("book {}", review.book_id)))?;

        let record = ReviewRecord {
            id: ReviewId::new(self.next_review_id.fetch_add(1, Ordering::SeqCst)),
            book_id: review.book_id,
            reviewer: review.reviewer.clone(),
            comment: review.comment.clone(),
            rating: review.rating,
            created_at: review.created_at,
        };
        entry.reviews.push(record.clone());

        Ok(record)
    }

    async fn find_reviews_by_book_id(
        &self,
        book_id: BookId,
    ) -> Result<Vec<ReviewRecord>, RepositoryError> {
        Ok(self
            .books
            .get(&book_id)
            .map(|entry| entry.reviews.clone())
            .unwrap_or_default())
    }
}
