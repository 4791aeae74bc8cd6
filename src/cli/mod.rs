pub mod commands;
pub mod report;
pub mod findings;
pub mod summarize;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{self, RuntimeConfig, RuntimeOverrides};
use crate::errors::AuditError;
use crate::llm::{GeminiProvider, LLMProvider};
use crate::summary::SUMMARY_MODEL;

/// Resolve configuration and credential before anything talks to the
/// provider. A missing key stops the command here.
pub async fn load_runtime(config_path: Option<&str>, overrides: &RuntimeOverrides) -> Result<RuntimeConfig, AuditError> {
    let path = config_path.map(PathBuf::from);
    config::load_runtime(path.as_deref(), overrides).await
}

pub fn build_provider(runtime: &RuntimeConfig) -> Arc<dyn LLMProvider> {
    Arc::new(GeminiProvider::with_base_url(&runtime.api_key, SUMMARY_MODEL, &runtime.base_url))
}
