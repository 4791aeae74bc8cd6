use axum::{extract::Path, Json};

use crate::api::models::PageSummary;
use crate::dashboard::{all_pages, page, Page, PageId};
use crate::errors::AuditError;

pub async fn list_pages() -> Json<Vec<PageSummary>> {
    Json(all_pages().iter().map(PageSummary::from).collect())
}

pub async fn get_page(Path(id): Path<String>) -> Result<Json<Page>, AuditError> {
    let id: PageId = id.parse()?;
    Ok(Json(page(id)))
}
