//! 测试辅助：可注入故障的仓储

use async_trait::async_trait;

use crate::application::ports::{
    BookRecord, BookRepositoryPort, NewBookRecord, NewReviewRecord, RepositoryError, ReviewRecord,
};
use crate::domain::book::BookId;
use crate::infrastructure::memory::InMemoryBookRepository;

/// 读操作转发给内存仓储，写操作（或全部操作）返回数据库错误
pub struct FlakyBookRepository {
    pub inner: InMemoryBookRepository,
    fail_reads: bool,
}

impl FlakyBookRepository {
    /// 只让写操作失败
    pub fn failing_writes(inner: InMemoryBookRepository) -> Self {
        Self {
            inner,
            fail_reads: false,
        }
    }

    /// 所有操作都失败
    pub fn failing_all() -> Self {
        Self {
            inner: InMemoryBookRepository::new(),
            fail_reads: true,
        }
    }

    fn failure() -> RepositoryError {
        RepositoryError::DatabaseError("database is locked".to_string())
    }

    fn check_read(&self) -> Result<(), RepositoryError> {
        if self.fail_reads {
            return Err(Self::failure());
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepositoryPort for FlakyBookRepository {
    async fn save_book(&self, _book: &NewBookRecord) -> Result<BookRecord, RepositoryError> {
        Err(Self::failure())
    }

    async fn find_book_by_id(&self, id: BookId) -> Result<Option<BookRecord>, RepositoryError> {
        self.check_read()?;
        self.inner.find_book_by_id(id).await
    }

    async fn find_all_books(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        self.check_read()?;
        self.inner.find_all_books().await
    }

    async fn delete_book_by_id(&self, _id: BookId) -> Result<(), RepositoryError> {
        Err(Self::failure())
    }

    async fn exists_book_by_id(&self, id: BookId) -> Result<bool, RepositoryError> {
        self.check_read()?;
        self.inner.exists_book_by_id(id).await
    }

    async fn save_review(&self, _review: &NewReviewRecord) -> Result<ReviewRecord, RepositoryError> {
        Err(Self::failure())
    }

    async fn find_reviews_by_book_id(
        &self,
        book_id: BookId,
    ) -> Result<Vec<ReviewRecord>, RepositoryError> {
        self.check_read()?;
        self.inner.find_reviews_by_book_id(book_id).await
    }
}
