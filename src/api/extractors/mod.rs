/**
 * Responsibility
 * - handler が受け取る入力型 (extractor) の公開
 */
mod page;
mod query;
mod search;

pub use page::PageNumber;
pub use search::SearchName;
