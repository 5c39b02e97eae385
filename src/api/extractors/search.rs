/*
 * Responsibility
 * - Query の `name` を検索語として受け取る
 * - 未指定 → "" (空検索), 複数指定 → 最初の値
 * - 失敗しない (Rejection = Infallible)
 */
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::query::first_value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchName(pub String);

impl<S> FromRequestParts<S> for SearchName
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            first_value(parts, state, "name").await.unwrap_or_default(),
        ))
    }
}
