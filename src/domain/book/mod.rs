//! Book Context - 书籍限界上下文
//!
//! 职责:
//! - Book 聚合根管理
//! - Review 实体（只能通过所属 Book 创建）
//! - 字段校验（值对象构造即校验）
//! - 平均评分计算

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{average_rating, Book, NewBook};
pub use entities::{NewReview, Review};
pub use errors::BookError;
pub use value_objects::{Author, BookId, Comment, Genre, Rating, ReviewId, ReviewerName, Title};
