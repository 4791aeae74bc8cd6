//! Static content of the four dashboard pages.

pub mod data;
pub mod model;
pub mod pages;

pub use model::*;
pub use pages::{all_pages, dashboard_findings, page};
