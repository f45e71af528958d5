//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookRepositoryPort）
//! - commands: CQRS 命令及处理器（建书、删书、添加书评）
//! - queries: CQRS 查询及处理器（书籍详情、列表、平均评分、书评列表）
//! - error: 应用层错误定义与分类

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    AddReview,
    CreateBook,
    DeleteBook,
    // Handlers
    handlers::{AddReviewHandler, CreateBookHandler, DeleteBookHandler},
};

pub use error::{ApplicationError, ErrorKind};

pub use ports::{
    BookRecord, BookRepositoryPort, NewBookRecord, NewReviewRecord, RepositoryError, ReviewRecord,
};

pub use queries::{
    GetAverageRating,
    GetBook,
    ListBooks,
    ListReviewsForBook,
    // Handlers
    handlers::{GetAverageRatingHandler, GetBookHandler, ListBooksHandler, ListReviewsForBookHandler},
};
