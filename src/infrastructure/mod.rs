//! Infrastructure Layer - 基础设施层
//!
//! 提供存储端口的具体实现和 HTTP 边界

pub mod http;
pub mod memory;
pub mod persistence;

pub use memory::InMemoryBookRepository;
pub use persistence::SqliteBookRepository;
