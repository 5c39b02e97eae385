/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / body)
 * - RepoError を統一的に変換
 *
 * 注意
 * - PageNotFound は JSON ではなく plain text で返す (クライアントとの既存契約)
 * - InvalidPageFormat は ApiResponse envelope で返す
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::heroes::ApiResponse;
use crate::repos::RepoError;

/// Body shared by out-of-range pages and the global fallback. Must stay identical.
pub const PAGE_NOT_FOUND_BODY: &str = "Page not Found.";
pub const INVALID_PAGE_MESSAGE: &str = "Only Numbers Allowed.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("page not found")]
    PageNotFound,
    #[error("page must be a number")]
    InvalidPageFormat,
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::PageNotFound => (StatusCode::NOT_FOUND, PAGE_NOT_FOUND_BODY).into_response(),
            AppError::InvalidPageFormat => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(INVALID_PAGE_MESSAGE)),
            )
                .into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::failure("Internal Server Error.")),
            )
                .into_response(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::PageNotFound { .. } => AppError::PageNotFound,
            // A repo with an empty page should never have been built.
            RepoError::EmptyPage { index } => {
                tracing::error!(index, "hero repository holds an empty page");
                AppError::Internal
            }
        }
    }
}
