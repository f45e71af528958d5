//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::application::queries::{GetAverageRating, GetBook, ListBooks};
use crate::domain::book::{average_rating, Book, Review};

/// 读取书评并装配聚合
async fn load_book(
    book_repo: &dyn BookRepositoryPort,
    record: BookRecord,
) -> Result<Book, ApplicationError> {
    let reviews = book_repo
        .find_reviews_by_book_id(record.id)
        .await
        .map_err(ApplicationError::store("find reviews by book id"))?;

    record
        .into_book(reviews)
        .map_err(ApplicationError::store("load book"))
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        let record = self
            .book_repo
            .find_book_by_id(query.book_id)
            .await
            .map_err(ApplicationError::store("find book by id"))?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id))?;

        load_book(self.book_repo.as_ref(), record).await
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 按 ID 升序返回所有书籍（含书评），没有书时返回空列表
    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<Book>, ApplicationError> {
        let records = self
            .book_repo
            .find_all_books()
            .await
            .map_err(ApplicationError::store("find all books"))?;

        let mut books = Vec::with_capacity(records.len());
        for record in records {
            books.push(load_book(self.book_repo.as_ref(), record).await?);
        }

        Ok(books)
    }
}

/// GetAverageRating Handler
///
/// 每次调用都从存储重新读取书评计算，不缓存
pub struct GetAverageRatingHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetAverageRatingHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetAverageRating) -> Result<f64, ApplicationError> {
        let book_id = query.book_id;

        let exists = self
            .book_repo
            .exists_book_by_id(book_id)
            .await
            .map_err(ApplicationError::store("check book exists"))?;
        if !exists {
            return Err(ApplicationError::not_found("Book", book_id));
        }

        let reviews = self
            .book_repo
            .find_reviews_by_book_id(book_id)
            .await
            .map_err(ApplicationError::store("find reviews by book id"))?
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApplicationError::store("load reviews"))?;

        let average = average_rating(&reviews);
        tracing::debug!(
            book_id = %book_id,
            reviews = reviews.len(),
            average = average,
            "Average rating computed"
        );

        Ok(average)
    }
}
