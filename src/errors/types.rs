use thiserror::Error;

use crate::utils::truncation::truncate_error;

/// Shown when a summary attempt fails without a usable message.
pub const SUMMARY_FALLBACK_MESSAGE: &str = "Failed to generate summary.";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unknown page: {0}")]
    InvalidPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuditError {
    /// The bare message carried by this error, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            AuditError::Config(msg)
            | AuditError::Authentication(msg)
            | AuditError::LLMApi(msg)
            | AuditError::RateLimit(msg)
            | AuditError::Network(msg)
            | AuditError::InvalidPage(msg)
            | AuditError::Internal(msg) => msg.clone(),
            AuditError::Io(e) => e.to_string(),
            AuditError::Json(e) => e.to_string(),
            AuditError::Yaml(e) => e.to_string(),
        }
    }
}

/// The single failure a summary attempt can end in. Carries a message that is
/// safe to put in front of a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SummaryGenerationError {
    message: String,
}

impl SummaryGenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self { message: SUMMARY_FALLBACK_MESSAGE.to_string() };
        }
        Self { message: truncate_error(&message) }
    }

    pub fn from_cause(cause: &AuditError) -> Self {
        Self::new(cause.detail())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
