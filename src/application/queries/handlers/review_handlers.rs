//! Review Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::application::queries::ListReviewsForBook;
use crate::domain::book::Review;

/// ListReviewsForBook Handler
pub struct ListReviewsForBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListReviewsForBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 按创建顺序返回书评；书籍存在但没有书评时返回空列表
    pub async fn handle(&self, query: ListReviewsForBook) -> Result<Vec<Review>, ApplicationError> {
        let book_id = query.book_id;

        // 验证书籍存在
        let exists = self
            .book_repo
            .exists_book_by_id(book_id)
            .await
            .map_err(ApplicationError::store("check book exists"))?;
        if !exists {
            return Err(ApplicationError::not_found("Book", book_id));
        }

        self.book_repo
            .find_reviews_by_book_id(book_id)
            .await
            .map_err(ApplicationError::store("find reviews by book id"))?
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApplicationError::store("load reviews"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::{
        AddReviewHandler, CreateBookHandler, DeleteBookHandler,
    };
    use crate::application::commands::{AddReview, CreateBook, DeleteBook};
    use crate::application::error::ErrorKind;
    use crate::domain::book::BookId;
    use crate::infrastructure::memory::InMemoryBookRepository;

    async fn dune(repo: Arc<dyn BookRepositoryPort>) -> BookId {
        CreateBookHandler::new(repo)
            .handle(CreateBook {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                genre: "SciFi".to_string(),
            })
            .await
            .unwrap()
            .id()
    }

    #[tokio::test]
    async fn test_lists_reviews_in_creation_order() {
        let repo: Arc<dyn BookRepositoryPort> = InMemoryBookRepository::new().arc();
        let book_id = dune(repo.clone()).await;
        let add = AddReviewHandler::new(repo.clone());
        let first = add
            .handle(AddReview {
                book_id,
                reviewer: "A".to_string(),
                comment: "Great".to_string(),
                rating: 5,
            })
            .await
            .unwrap();
        let second = add
            .handle(AddReview {
                book_id,
                reviewer: "B".to_string(),
                comment: "OK".to_string(),
                rating: 3,
            })
            .await
            .unwrap();

        let reviews = ListReviewsForBookHandler::new(repo)
            .handle(ListReviewsForBook { book_id })
            .await
            .unwrap();

        assert_eq!(reviews, vec![first, second]);
    }

    #[tokio::test]
    async fn test_book_without_reviews_returns_empty() {
        let repo: Arc<dyn BookRepositoryPort> = InMemoryBookRepository::new().arc();
        let book_id = dune(repo.clone()).await;

        let reviews = ListReviewsForBookHandler::new(repo)
            .handle(ListReviewsForBook { book_id })
            .await
            .unwrap();

        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_missing_book_is_not_found() {
        let handler = ListReviewsForBookHandler::new(InMemoryBookRepository::new().arc());

        let err = handler
            .handle(ListReviewsForBook {
                book_id: BookId::new(999),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_reviews_gone_after_book_deleted() {
        let memory = InMemoryBookRepository::new().arc();
        let repo: Arc<dyn BookRepositoryPort> = memory.clone();
        let book_id = dune(repo.clone()).await;
        let other_id = dune(repo.clone()).await;
        let add = AddReviewHandler::new(repo.clone());
        for target in [book_id, book_id, other_id] {
            add.handle(AddReview {
                book_id: target,
                reviewer: "A".to_string(),
                comment: "Great".to_string(),
                rating: 4,
            })
            .await
            .unwrap();
        }

        DeleteBookHandler::new(repo.clone())
            .handle(DeleteBook { book_id })
            .await
            .unwrap();

        let err = ListReviewsForBookHandler::new(repo)
            .handle(ListReviewsForBook { book_id })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        // 只剩另一本书的书评
        assert_eq!(memory.review_count(), 1);
    }
}
