pub mod types;
pub mod classification;

pub use types::{AuditError, SummaryGenerationError, SUMMARY_FALLBACK_MESSAGE};
pub use classification::{ErrorClassification, ErrorKind};
