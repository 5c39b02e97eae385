/*
 * Responsibility
 * - 起動時に一度だけ読み込む hero カタログ (固定データ)
 * - ページ分割もここで決める (1 ページ 4 件, 全 5 ページ)
 */
use crate::repos::hero_repo::Hero;

const PAGE_SIZE: usize = 4;

// (id, name, image) in master order.
const CATALOG: &[(u32, &str, &str)] = &[
    (1, "Boruto Uzumaki", "/images/boruto.jpg"),
    (2, "Sarada Uchiha", "/images/sarada.jpg"),
    (3, "Mitsuki", "/images/mitsuki.jpg"),
    (4, "Kawaki", "/images/kawaki.jpg"),
    (5, "Naruto Uzumaki", "/images/naruto.jpg"),
    (6, "Sasuke Uchiha", "/images/sasuke.jpg"),
    (7, "Hinata Hyuga", "/images/hinata.jpg"),
    (8, "Himawari Uzumaki", "/images/himawari.jpg"),
    (9, "Shikadai Nara", "/images/shikadai.jpg"),
    (10, "Inojin Yamanaka", "/images/inojin.jpg"),
    (11, "Chocho Akimichi", "/images/chocho.jpg"),
    (12, "Kakashi Hatake", "/images/kakashi.jpg"),
    (13, "Konohamaru Sarutobi", "/images/konohamaru.jpg"),
    (14, "Shikamaru Nara", "/images/shikamaru.jpg"),
    (15, "Metal Lee", "/images/metal_lee.jpg"),
    (16, "Rock Lee", "/images/rock_lee.jpg"),
    (17, "Jiraiya", "/images/jiraiya.jpg"),
    (18, "Tsunade", "/images/tsunade.jpg"),
    (19, "Gaara", "/images/gaara.jpg"),
    (20, "Orochimaru", "/images/orochimaru.jpg"),
];

/// The reference catalog, already partitioned into pages.
pub fn boruto_pages() -> Vec<Vec<Hero>> {
    CATALOG
        .chunks(PAGE_SIZE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&(id, name, image)| Hero::new(id, name, image))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_is_five_pages_of_four() {
        let pages = boruto_pages();
        assert_eq!(pages.len(), 5);
        assert!(pages.iter().all(|p| p.len() == PAGE_SIZE));
    }

    #[test]
    fn ids_are_unique_and_in_master_order() {
        let ids: Vec<u32> = boruto_pages().into_iter().flatten().map(|h| h.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }
}
