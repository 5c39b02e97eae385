/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - HTTP への変換は error::AppError 側で行う (repo は status code を知らない)
 */
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("page {page} not found")]
    PageNotFound { page: i64 },
    #[error("page at index {index} has no heroes")]
    EmptyPage { index: usize },
}
