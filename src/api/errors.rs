use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::AuditError;

impl IntoResponse for AuditError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AuditError::InvalidPage(_) => StatusCode::NOT_FOUND,
            AuditError::Config(_) | AuditError::Json(_) | AuditError::Yaml(_) => StatusCode::BAD_REQUEST,
            AuditError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AuditError::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            AuditError::LLMApi(_) | AuditError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuditError::InvalidPage("x".into()).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(AuditError::Config("x".into()).into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuditError::RateLimit("x".into()).into_response().status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(AuditError::Internal("x".into()).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
