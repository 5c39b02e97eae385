/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 各 module は `apply(router, ...) -> Router` の形に揃える
 */
pub mod cors;
pub mod default_headers;
pub mod http;
