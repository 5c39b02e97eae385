/*
 * Responsibility
 * - Query の `page` を 1-indexed のページ番号として受け取る
 * - 未指定 → 1, 32bit 整数でない → AppError::InvalidPageFormat (400)
 * - 複数指定 → 最初の値を使う
 * - 範囲チェックはしない (repo の責務, 範囲外は 404)
 */
use axum::{extract::FromRequestParts, http::request::Parts};

use super::query::first_value;
use crate::error::AppError;

pub const DEFAULT_PAGE: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(pub i64);

// Page numbers are 32-bit on the wire: anything wider is "not a number", not "no such page".
fn parse_page(raw: Option<&str>) -> Result<i64, AppError> {
    match raw {
        None => Ok(DEFAULT_PAGE),
        Some(raw) => raw.parse::<i32>().map(i64::from).map_err(|_| {
            tracing::debug!(raw, "rejected non-numeric page");
            AppError::InvalidPageFormat
        }),
    }
}

impl<S> FromRequestParts<S> for PageNumber
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = first_value(parts, state, "page").await;
        parse_page(raw.as_deref()).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(parse_page(None).unwrap(), 1);
    }

    #[test]
    fn numbers_pass_through_unchecked() {
        assert_eq!(parse_page(Some("3")).unwrap(), 3);
        assert_eq!(parse_page(Some("0")).unwrap(), 0);
        assert_eq!(parse_page(Some("-7")).unwrap(), -7);
        assert_eq!(parse_page(Some("2147483647")).unwrap(), i64::from(i32::MAX));
    }

    #[test]
    fn non_numbers_are_invalid_format() {
        for raw in ["invalid", "", "1.5", " 2", "3000000000", "-2147483649"] {
            assert!(matches!(
                parse_page(Some(raw)),
                Err(AppError::InvalidPageFormat)
            ));
        }
    }
}
