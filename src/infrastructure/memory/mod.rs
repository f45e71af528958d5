//! In-Memory Implementations
//!
//! 仓储端口的内存实现（测试与无持久化运行）

mod book_repo;

pub use book_repo::InMemoryBookRepository;
