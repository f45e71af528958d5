//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                         GET     健康检查
//! - /api/books                        POST    创建书籍
//! - /api/books                        GET     列出所有书籍
//! - /api/books/:id                    GET     获取书籍详情（含书评）
//! - /api/books/:id                    DELETE  删除书籍及其书评
//! - /api/books/:id/average-rating     GET     获取平均评分
//! - /api/books/:id/reviews            POST    添加书评
//! - /api/books/:id/reviews            GET     列出书评

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/books", book_routes())
}

/// Book 路由
///
/// 同一位置的路径参数必须同名
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::create_book).get(handlers::list_books))
        .route("/:id", get(handlers::get_book).delete(handlers::delete_book))
        .route("/:id/average-rating", get(handlers::get_average_rating))
        .route(
            "/:id/reviews",
            post(handlers::add_review).get(handlers::list_reviews),
        )
}
