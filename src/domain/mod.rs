//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Book Context: 书籍与书评（Book 聚合根拥有其 Review）

pub mod book;
