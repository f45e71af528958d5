//! Review HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{AddReview, ListReviewsForBook};
use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{ApiResponse, CreateReviewRequest, ReviewResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 为书籍添加书评
pub async fn add_review(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    let Path(id) = path?;
    let Json(req) = payload?;

    let review = state
        .add_review_handler
        .handle(AddReview {
            book_id: BookId::new(id),
            reviewer: req.reviewer,
            comment: req.comment,
            rating: req.rating,
        })
        .await?;

    Ok(Json(ApiResponse::success(ReviewResponse::from(&review))))
}

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, ApiError> {
    let Path(id) = path?;

    let reviews = state
        .list_reviews_handler
        .handle(ListReviewsForBook {
            book_id: BookId::new(id),
        })
        .await?;

    Ok(Json(ApiResponse::success(
        reviews.iter().map(ReviewResponse::from).collect(),
    )))
}
