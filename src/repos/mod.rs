pub mod error;
mod hero_data;
pub mod hero_repo;

pub use error::RepoError;
pub use hero_repo::{Hero, HeroPage, HeroRepository, StaticHeroRepo};
