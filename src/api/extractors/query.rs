/*
 * Responsibility
 * - query string を (key, value) の列として読み、指定 key の最初の値だけを返す
 * - 同じ key が複数あってもエラーにしない (先勝ち)
 */
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

pub async fn first_value<S>(parts: &mut Parts, state: &S, key: &str) -> Option<String>
where
    S: Send + Sync,
{
    // Decoding into pairs is lossy (form_urlencoded), so a rejection here is unexpected;
    // treat it as "parameter absent".
    let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .ok()?;

    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
