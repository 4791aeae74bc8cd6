use super::types::AuditError;

/// Where an error belongs in the failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected at startup; the process refuses to continue.
    Configuration,
    /// Raised by the generative-text call; recovered into a failed summary.
    Generation,
    /// Bad input from the caller (unknown page and the like).
    Request,
    Internal,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub kind: ErrorKind,
}

impl ErrorClassification {
    pub fn is_fatal(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }

    /// Process exit code used when this error escapes a command.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Configuration => 2,
            ErrorKind::Request => 5,
            ErrorKind::Generation | ErrorKind::Internal => 1,
        }
    }
}

impl AuditError {
    /// Classify this error to determine its type and how it is surfaced.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            AuditError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                kind: ErrorKind::Configuration,
            },
            AuditError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                kind: ErrorKind::Configuration,
            },

            AuditError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                kind: ErrorKind::Generation,
            },
            AuditError::LLMApi(_) => ErrorClassification {
                error_type: "LLMApiError",
                kind: ErrorKind::Generation,
            },
            AuditError::RateLimit(_) => ErrorClassification {
                error_type: "RateLimitError",
                kind: ErrorKind::Generation,
            },
            AuditError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                kind: ErrorKind::Generation,
            },

            AuditError::InvalidPage(_) => ErrorClassification {
                error_type: "InvalidPageError",
                kind: ErrorKind::Request,
            },

            AuditError::Io(_) => ErrorClassification {
                error_type: "IoError",
                kind: ErrorKind::Internal,
            },
            AuditError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                kind: ErrorKind::Internal,
            },
            AuditError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                kind: ErrorKind::Internal,
            },
        }
    }
}
