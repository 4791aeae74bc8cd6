pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::dashboard::dashboard_findings;
use crate::llm::LLMProvider;
use crate::models::finding::Finding;
use crate::summary::{OverlapPolicy, SummaryWorkflow};

#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<SummaryWorkflow>,
    /// Findings summarized when a trigger does not bring its own.
    pub findings: Arc<Vec<Finding>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LLMProvider>, policy: OverlapPolicy) -> Self {
        Self {
            workflow: Arc::new(SummaryWorkflow::new(provider, policy)),
            findings: Arc::new(dashboard_findings()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/pages", get(routes::pages::list_pages))
        .route("/api/pages/:id", get(routes::pages::get_page))
        .route("/api/findings", get(routes::findings::list_findings))
        .route("/api/summary", get(routes::summary::get_summary).post(routes::summary::trigger_summary))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
