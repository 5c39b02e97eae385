/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - heroes: 起動時に組み立てた読み取り専用の HeroRepository
 * - Clone 前提で持つ (内部は Arc なので clone は cheap)
 */
use std::sync::Arc;

use crate::repos::HeroRepository;

#[derive(Clone)]
pub struct AppState {
    pub heroes: Arc<dyn HeroRepository>,
}

impl AppState {
    pub fn new(heroes: Arc<dyn HeroRepository>) -> Self {
        Self { heroes }
    }
}
