use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::info;

use crate::api::models::{SummaryRequest, SummaryResponse};
use crate::api::AppState;
use crate::errors::AuditError;

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(SummaryResponse::from(&state.workflow.snapshot()))
}

/// Start one generation in the background and answer with the pending view.
///
/// Overlapping triggers are accepted; which outcome wins is up to the
/// workflow's overlap policy.
pub async fn trigger_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SummaryResponse>), AuditError> {
    let request: SummaryRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SummaryRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };
    let findings = request.findings.unwrap_or_else(|| state.findings.as_ref().clone());

    let ticket = state.workflow.begin();
    let response = SummaryResponse::from(&state.workflow.snapshot());
    info!(attempt = ticket.attempt(), findings = findings.len(), "Summary triggered");

    let workflow = state.workflow.clone();
    tokio::spawn(async move {
        workflow.complete(ticket, &findings).await;
    });

    Ok((StatusCode::ACCEPTED, Json(response)))
}
