pub mod findings;
pub mod health;
pub mod pages;
pub mod summary;
