/*
 * Responsibility
 * - GET / (疎通用の固定メッセージ)
 * - どの route にも一致しない場合の fallback (404)
 */
use axum::{http::StatusCode, response::IntoResponse};

use crate::error::AppError;

pub const WELCOME_MESSAGE: &str = "Welcome to Boruto API!";

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, WELCOME_MESSAGE)
}

pub async fn not_found() -> AppError {
    AppError::PageNotFound
}
