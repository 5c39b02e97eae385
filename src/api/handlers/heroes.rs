/*
 * Responsibility
 * - GET /boruto/heroes?page=N (ページ取得)
 * - GET /boruto/heroes/search?name=Q (名前検索, 失敗しない)
 * - page の parse は extractor, 範囲チェックは repo, HTTP 変換は AppError に任せる
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::heroes::ApiResponse,
        extractors::{PageNumber, SearchName},
    },
    error::AppError,
    state::AppState,
};

pub async fn get_all_heroes(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
) -> Result<Json<ApiResponse>, AppError> {
    let page = state.heroes.get_all_heroes(page).map_err(|e| {
        tracing::debug!(error = %e, "page lookup failed");
        AppError::from(e)
    })?;
    tracing::debug!(page = page.page, count = page.heroes.len(), "serving hero page");

    Ok(Json(ApiResponse::from_page(page)))
}

pub async fn search_heroes(
    State(state): State<AppState>,
    SearchName(name): SearchName,
) -> Json<ApiResponse> {
    let heroes = state.heroes.search_heroes(&name);
    tracing::debug!(%name, count = heroes.len(), "hero search");

    Json(ApiResponse::from_search(heroes))
}
