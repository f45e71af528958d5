//! Book HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBook, DeleteBook, GetAverageRating, GetBook, ListBooks};
use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{
    ApiResponse, AverageRatingResponse, BookResponse, CreateBookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建书籍
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let Json(req) = payload?;

    let book = state
        .create_book_handler
        .handle(CreateBook {
            title: req.title,
            author: req.author,
            genre: req.genre,
        })
        .await?;

    Ok(Json(ApiResponse::success(BookResponse::from(&book))))
}

/// 获取书籍详情（含书评）
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let Path(id) = path?;

    let book = state
        .get_book_handler
        .handle(GetBook {
            book_id: BookId::new(id),
        })
        .await?;

    Ok(Json(ApiResponse::success(BookResponse::from(&book))))
}

/// 列出所有书籍
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BookResponse>>>, ApiError> {
    let books = state.list_books_handler.handle(ListBooks).await?;

    Ok(Json(ApiResponse::success(
        books.iter().map(BookResponse::from).collect(),
    )))
}

/// 删除书籍，书评一并删除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    state
        .delete_book_handler
        .handle(DeleteBook {
            book_id: BookId::new(id),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 获取平均评分
pub async fn get_average_rating(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<AverageRatingResponse>>, ApiError> {
    let Path(id) = path?;
    let book_id = BookId::new(id);

    let average = state
        .get_average_rating_handler
        .handle(GetAverageRating { book_id })
        .await?;

    Ok(Json(ApiResponse::success(AverageRatingResponse::new(
        book_id, average,
    ))))
}
