/*
 * Responsibility
 * - HTTP 層の公開ポイント (routes() の re-export など)
 */
pub mod dto;
mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
