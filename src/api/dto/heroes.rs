/*
 * Responsibility
 * - heroes 系 response の共通 envelope (ApiResponse)
 * - repo の結果 (HeroPage / 検索結果) → envelope への変換
 * - JSON のフィールド名は camelCase (prevPage / nextPage)
 */
use serde::{Deserialize, Serialize};

use crate::repos::{Hero, HeroPage};

pub const OK_MESSAGE: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    // Always serialized; `null` means there is no such page.
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
    pub heroes: Vec<Hero>,
}

impl ApiResponse {
    pub fn from_page(page: HeroPage) -> Self {
        Self {
            success: true,
            message: OK_MESSAGE.to_string(),
            prev_page: page.prev_page,
            next_page: page.next_page,
            heroes: page.heroes,
        }
    }

    /// Search results are never paginated, so both markers stay `null`.
    pub fn from_search(heroes: Vec<Hero>) -> Self {
        Self {
            success: true,
            message: OK_MESSAGE.to_string(),
            prev_page: None,
            next_page: None,
            heroes,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            prev_page: None,
            next_page: None,
            heroes: Vec::new(),
        }
    }
}
