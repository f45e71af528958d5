//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook};
use crate::application::error::ApplicationError;
use crate::application::ports::{BookRepositoryPort, NewBookRecord};
use crate::domain::book::{Book, NewBook};

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 校验字段后保存，返回带有新 ID、书评为空的 Book
    ///
    /// 不检查书名+作者是否重复
    pub async fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let details = NewBook::new(command.title, command.author, command.genre)?;

        let record = self
            .book_repo
            .save_book(&NewBookRecord::from(&details))
            .await
            .map_err(ApplicationError::store("save book"))?;

        tracing::info!(
            book_id = %record.id,
            title = %details.title(),
            "Book created"
        );

        Ok(Book::restore(record.id, details, record.created_at, Vec::new()))
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 删除书籍及其全部书评（存储层单事务完成）
    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let book_id = command.book_id;

        // 检查书籍是否存在
        let exists = self
            .book_repo
            .exists_book_by_id(book_id)
            .await
            .map_err(ApplicationError::store("check book exists"))?;
        if !exists {
            return Err(ApplicationError::not_found("Book", book_id));
        }

        self.book_repo
            .delete_book_by_id(book_id)
            .await
            .map_err(ApplicationError::store("delete book"))?;

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ErrorKind;
    use crate::application::testing::FlakyBookRepository;
    use crate::domain::book::BookId;
    use crate::infrastructure::memory::InMemoryBookRepository;

    fn create_dune() -> CreateBook {
        CreateBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_book() {
        let repo = InMemoryBookRepository::new().arc();
        let handler = CreateBookHandler::new(repo.clone());

        let book = handler.handle(create_dune()).await.unwrap();

        assert_eq!(book.id(), BookId::new(1));
        assert_eq!(book.title().as_str(), "Dune");
        assert_eq!(book.author().as_str(), "Herbert");
        assert_eq!(book.genre().as_str(), "SciFi");
        assert!(book.reviews().is_empty());
        assert!(repo.exists_book_by_id(book.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_book_allows_duplicates() {
        let repo = InMemoryBookRepository::new().arc();
        let handler = CreateBookHandler::new(repo.clone());

        let first = handler.handle(create_dune()).await.unwrap();
        let second = handler.handle(create_dune()).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.find_all_books().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_book_invalid_data_is_not_persisted() {
        let repo = InMemoryBookRepository::new().arc();
        let handler = CreateBookHandler::new(repo.clone());

        let mut command = create_dune();
        command.title = "   ".to_string();
        let err = handler.handle(command).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(matches!(
            err,
            ApplicationError::InvalidData { field: "title", .. }
        ));
        assert!(repo.find_all_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_book_store_failure() {
        let repo = Arc::new(FlakyBookRepository::failing_all());
        let handler = CreateBookHandler::new(repo);

        let err = handler.handle(create_dune()).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::StoreOperationFailed {
                operation: "save book",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_book_is_not_found() {
        let handler = DeleteBookHandler::new(InMemoryBookRepository::new().arc());

        let err = handler
            .handle(DeleteBook {
                book_id: BookId::new(42),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_book() {
        let repo = InMemoryBookRepository::new().arc();
        let book = CreateBookHandler::new(repo.clone())
            .handle(create_dune())
            .await
            .unwrap();

        DeleteBookHandler::new(repo.clone())
            .handle(DeleteBook { book_id: book.id() })
            .await
            .unwrap();

        assert!(!repo.exists_book_by_id(book.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_store_failure_is_wrapped_once() {
        let inner = InMemoryBookRepository::new();
        let book = inner
            .save_book(&NewBookRecord::from(
                &NewBook::new("Dune", "Herbert", "SciFi").unwrap(),
            ))
            .await
            .unwrap();
        let handler = DeleteBookHandler::new(Arc::new(FlakyBookRepository::failing_writes(inner)));

        let err = handler
            .handle(DeleteBook { book_id: book.id })
            .await
            .unwrap_err();

        match err {
            ApplicationError::StoreOperationFailed { operation, source } => {
                assert_eq!(operation, "delete book");
                assert!(source.to_string().contains("database is locked"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
