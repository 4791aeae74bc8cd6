pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod llm;
pub mod models;
pub mod render;
pub mod summary;
pub mod utils;
