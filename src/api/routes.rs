/*
 * Responsibility
 * - URL 構造を定義
 * - /, /boruto/heroes, /boruto/heroes/search
 * - /images と fallback は app.rs 側で組み立てる (config が必要なため)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    heroes::{get_all_heroes, search_heroes},
    root::root,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/boruto/heroes", get(get_all_heroes))
        .route("/boruto/heroes/search", get(search_heroes))
}
