pub mod hashes;
pub mod health;
pub mod images;
pub mod types;
