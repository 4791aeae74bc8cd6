use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn list_findings(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"findings": state.findings.as_ref(), "total": state.findings.len()}))
}
