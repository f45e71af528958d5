//! Shelf - 书籍与书评服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 书籍聚合与书评
//!
//! 应用层 (application/):
//! - Ports: 存储端口（BookRepositoryPort）
//! - Commands: 建书、删书、添加书评
//! - Queries: 书籍详情、列表、平均评分、书评列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 内存存储
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
