//! Application State
//!
//! 持有存储端口和所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddReviewHandler, CreateBookHandler, DeleteBookHandler,
    // Query handlers
    GetAverageRatingHandler, GetBookHandler, ListBooksHandler, ListReviewsForBookHandler,
    // Ports
    BookRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,
    pub delete_book_handler: DeleteBookHandler,
    pub add_review_handler: AddReviewHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
    pub get_average_rating_handler: GetAverageRatingHandler,
    pub list_reviews_handler: ListReviewsForBookHandler,
}

impl AppState {
    /// 所有处理器共享同一个存储
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self {
            book_repo: book_repo.clone(),

            create_book_handler: CreateBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),
            add_review_handler: AddReviewHandler::new(book_repo.clone()),

            get_book_handler: GetBookHandler::new(book_repo.clone()),
            list_books_handler: ListBooksHandler::new(book_repo.clone()),
            get_average_rating_handler: GetAverageRatingHandler::new(book_repo.clone()),
            list_reviews_handler: ListReviewsForBookHandler::new(book_repo),
        }
    }
}
