pub mod heroes;
pub mod root;
