//! Configuration Module
//!
//! 配置来源（优先级从高到低）：
//! - 环境变量
//! - 配置文件（TOML 格式）
//! - 默认值

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig, StoreBackend};
