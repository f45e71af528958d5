//! Review Command Handlers

use std::sync::Arc;

use crate::application::commands::AddReview;
use crate::application::error::ApplicationError;
use crate::application::ports::{BookRepositoryPort, NewReviewRecord};
use crate::domain::book::{NewReview, Review};

/// AddReview Handler
pub struct AddReviewHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl AddReviewHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 为已存在的书籍添加书评
    ///
    /// 1. 校验 reviewer / comment / rating（失败时不访问存储）
    /// 2. 确认书籍存在
    /// 3. 写入书评（外键指向书籍，存储层原子完成）
    pub async fn handle(&self, command: AddReview) -> Result<Review, ApplicationError> {
        let book_id = command.book_id;
        let draft = NewReview::new(command.reviewer, command.comment, command.rating)?;

        let exists = self
            .book_repo
            .exists_book_by_id(book_id)
            .await
            .map_err(ApplicationError::store("check book exists"))?;
        if !exists {
            return Err(ApplicationError::not_found("Book", book_id));
        }

        // 书籍在检查之后被并发删除时，存储层的错误原样包装为 StoreOperationFailed
        let record = self
            .book_repo
            .save_review(&NewReviewRecord::new(book_id, &draft))
            .await
            .map_err(ApplicationError::store("save review"))?;

        tracing::info!(
            book_id = %book_id,
            review_id = %record.id,
            rating = draft.rating().value(),
            "Review added"
        );

        Ok(Review::restore(record.id, book_id, draft, record.created_at))
    }
}
