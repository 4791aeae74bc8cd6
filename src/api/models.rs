use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dashboard::{Page, PageId};
use crate::models::finding::Finding;
use crate::summary::{SummaryCell, SummaryView};

/// Body of `POST /api/summary`. Without findings the dashboard list is used.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    pub findings: Option<Vec<Finding>>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub view: SummaryView,
    pub status: &'static str,
    pub attempts: u64,
    pub updated_at: DateTime<Utc>,
}

impl From<&SummaryCell> for SummaryResponse {
    fn from(cell: &SummaryCell) -> Self {
        Self {
            view: cell.state().view(),
            status: cell.state().as_str(),
            attempts: cell.attempts(),
            updated_at: cell.updated_at(),
        }
    }
}

/// Navigation entry for one page.
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub id: PageId,
    pub label: &'static str,
    pub title: &'static str,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self { id: page.id, label: page.label, title: page.title }
    }
}
