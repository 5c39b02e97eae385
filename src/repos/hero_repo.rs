/*
 * Responsibility
 * - hero カタログの読み取り (ページ取得 / 名前検索)
 * - HeroRepository trait を境界にして、handler からは実装を意識させない
 * - データは起動時に一度だけ組み立て、以降は一切変更しない (lock 不要)
 */
use serde::{Deserialize, Serialize};

use crate::repos::{error::RepoError, hero_data};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub image: String,
}

impl Hero {
    pub fn new(id: u32, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}

/// One page of the catalog together with its neighbours.
///
/// `prev_page` / `next_page` are `None` when there is no adjacent page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPage {
    pub page: usize,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
    pub heroes: Vec<Hero>,
}

/// Read-only access to the hero catalog.
///
/// Implementations are shared across request tasks behind an `Arc`, so they must be
/// `Send + Sync` and must not mutate after construction.
pub trait HeroRepository: Send + Sync + 'static {
    fn total_pages(&self) -> usize;

    // `page` is 1-indexed. Anything outside [1, total_pages] is `PageNotFound`.
    fn get_all_heroes(&self, page: i64) -> Result<HeroPage, RepoError>;

    // Case-insensitive substring match on `name`, in catalog order.
    // An empty query matches nothing.
    fn search_heroes(&self, query: &str) -> Vec<Hero>;
}

#[derive(Debug, Clone)]
pub struct StaticHeroRepo {
    pages: Vec<Vec<Hero>>,
}

impl StaticHeroRepo {
    /// The built-in Boruto catalog.
    pub fn boruto() -> Result<Self, RepoError> {
        Self::from_pages(hero_data::boruto_pages())
    }

    /// Build a repository over arbitrary pages (fixtures etc.).
    ///
    /// Every page must hold at least one hero and there must be at least one page.
    pub fn from_pages(pages: Vec<Vec<Hero>>) -> Result<Self, RepoError> {
        if pages.is_empty() {
            return Err(RepoError::EmptyPage { index: 0 });
        }
        if let Some(index) = pages.iter().position(Vec::is_empty) {
            return Err(RepoError::EmptyPage { index });
        }
        Ok(Self { pages })
    }

    pub fn hero_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

impl HeroRepository for StaticHeroRepo {
    fn total_pages(&self) -> usize {
        self.pages.len()
    }

    fn get_all_heroes(&self, page: i64) -> Result<HeroPage, RepoError> {
        let total = self.total_pages();
        let current = usize::try_from(page)
            .ok()
            .filter(|p| (1..=total).contains(p))
            .ok_or(RepoError::PageNotFound { page })?;

        Ok(HeroPage {
            page: current,
            prev_page: (current > 1).then(|| current - 1),
            next_page: (current < total).then(|| current + 1),
            heroes: self.pages[current - 1].clone(),
        })
    }

    fn search_heroes(&self, query: &str) -> Vec<Hero> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.pages
            .iter()
            .flatten()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(heroes: &[Hero]) -> Vec<&str> {
        heroes.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn first_page_has_no_prev() {
        let repo = StaticHeroRepo::boruto().unwrap();
        let page = repo.get_all_heroes(1).unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.heroes[0].name, "Boruto Uzumaki");
    }

    #[test]
    fn last_page_has_no_next() {
        let repo = StaticHeroRepo::boruto().unwrap();
        let page = repo.get_all_heroes(5).unwrap();

        assert_eq!(page.prev_page, Some(4));
        assert_eq!(page.next_page, None);
        assert_eq!(
            names(&page.heroes),
            ["Jiraiya", "Tsunade", "Gaara", "Orochimaru"]
        );
    }

    #[test]
    fn middle_page_links_both_ways() {
        let repo = StaticHeroRepo::boruto().unwrap();
        let page = repo.get_all_heroes(3).unwrap();

        assert_eq!(page.prev_page, Some(2));
        assert_eq!(page.next_page, Some(4));
    }

    #[test]
    fn out_of_range_pages_are_not_found() {
        let repo = StaticHeroRepo::boruto().unwrap();

        for page in [0, -1, 6, i64::MAX, i64::MIN] {
            assert_eq!(
                repo.get_all_heroes(page),
                Err(RepoError::PageNotFound { page })
            );
        }
    }

    #[test]
    fn single_page_repo_has_no_neighbours() {
        let repo = StaticHeroRepo::from_pages(vec![vec![Hero::new(1, "Mitsuki", "/m.jpg")]])
            .unwrap();
        let page = repo.get_all_heroes(1).unwrap();

        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page, None);
        assert!(repo.get_all_heroes(2).is_err());
    }

    #[test]
    fn from_pages_rejects_empty_input() {
        assert_eq!(
            StaticHeroRepo::from_pages(vec![]).unwrap_err(),
            RepoError::EmptyPage { index: 0 }
        );
        assert_eq!(
            StaticHeroRepo::from_pages(vec![vec![Hero::new(1, "Gaara", "/g.jpg")], vec![]])
                .unwrap_err(),
            RepoError::EmptyPage { index: 1 }
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let repo = StaticHeroRepo::boruto().unwrap();

        assert_eq!(names(&repo.search_heroes("sasuke")), ["Sasuke Uchiha"]);
        assert_eq!(names(&repo.search_heroes("SASUKE")), ["Sasuke Uchiha"]);
        assert_eq!(
            names(&repo.search_heroes("sa")),
            ["Sarada Uchiha", "Sasuke Uchiha", "Konohamaru Sarutobi"]
        );
    }

    #[test]
    fn search_keeps_catalog_order_across_pages() {
        let repo = StaticHeroRepo::boruto().unwrap();

        assert_eq!(
            names(&repo.search_heroes("uzumaki")),
            ["Boruto Uzumaki", "Naruto Uzumaki", "Himawari Uzumaki"]
        );
    }

    #[test]
    fn empty_or_unknown_query_finds_nothing() {
        let repo = StaticHeroRepo::boruto().unwrap();

        assert!(repo.search_heroes("").is_empty());
        assert!(repo.search_heroes("unknown").is_empty());
    }

    #[test]
    fn hero_count_covers_all_pages() {
        assert_eq!(StaticHeroRepo::boruto().unwrap().hero_count(), 20);
    }
}
