use std::path::Path;
use crate::errors::AuditError;
use crate::llm::gemini::DEFAULT_GEMINI_BASE_URL;
use super::credentials::{api_key_from_env, mask_key, resolve_credential};
use super::types::{AuditConfig, RuntimeConfig, DEFAULT_HOST, DEFAULT_PORT};
use super::schema::CONFIG_SCHEMA;
use tracing::{info, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<AuditConfig, AuditError> {
    if !path.exists() {
        return Err(AuditError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(AuditError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // An empty file parses as null
    if yaml.is_null() {
        return Ok(AuditConfig::default());
    }

    validate_schema(&yaml)?;

    let config: AuditConfig = serde_yaml::from_value(yaml)?;
    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), AuditError> {
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| AuditError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| AuditError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; typed deserialization decides what is fatal.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOverrides {
    pub api_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Load and validate everything the summary workflow needs.
///
/// Runs once at startup. A missing API key is a configuration error and the
/// caller is expected to stop there.
pub async fn load_runtime(
    config_path: Option<&Path>,
    overrides: &RuntimeOverrides,
) -> Result<RuntimeConfig, AuditError> {
    let config = match config_path {
        Some(path) => parse_config(path).await?,
        None => AuditConfig::default(),
    };
    let runtime = resolve_runtime(&config, overrides, api_key_from_env())?;
    info!(
        key = %mask_key(&runtime.api_key),
        base_url = %runtime.base_url,
        overlap = runtime.overlap.as_str(),
        "Runtime configuration loaded"
    );
    Ok(runtime)
}

/// Merge CLI overrides, file values and the environment key.
///
/// Key precedence: `--api-key`, then `llm.api_key`, then the environment.
pub fn resolve_runtime(
    config: &AuditConfig,
    overrides: &RuntimeOverrides,
    env_key: Option<String>,
) -> Result<RuntimeConfig, AuditError> {
    let llm = config.llm.clone().unwrap_or_default();
    let server = config.server.clone().unwrap_or_default();

    let api_key = overrides.api_key.as_deref().and_then(resolve_credential)
        .or_else(|| llm.api_key.as_deref().and_then(resolve_credential))
        .or(env_key)
        .ok_or_else(|| AuditError::Config("API_KEY environment variable not set".into()))?;

    Ok(RuntimeConfig {
        api_key,
        base_url: llm.base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        overlap: config.summary.as_ref().and_then(|s| s.overlap).unwrap_or_default(),
        host: overrides.host.clone().or(server.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: overrides.port.or(server.port).unwrap_or(DEFAULT_PORT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LLMConfig, ServerConfig, SummaryConfig};
    use crate::summary::OverlapPolicy;
    use std::io::Write;

    #[test]
    fn test_missing_key_is_config_error() {
        let err = resolve_runtime(&AuditConfig::default(), &RuntimeOverrides::default(), None).unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
        assert_eq!(err.detail(), "API_KEY environment variable not set");
    }

    #[test]
    fn test_env_key_used_when_nothing_else() {
        let runtime = resolve_runtime(&AuditConfig::default(), &RuntimeOverrides::default(), Some("env-key".into())).unwrap();
        assert_eq!(runtime.api_key, "env-key");
        assert_eq!(runtime.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(runtime.host, DEFAULT_HOST);
        assert_eq!(runtime.port, DEFAULT_PORT);
        assert_eq!(runtime.overlap, OverlapPolicy::LatestTrigger);
    }

    #[test]
    fn test_precedence_cli_over_file_over_env() {
        let config = AuditConfig {
            llm: Some(LLMConfig { api_key: Some("file-key".into()), base_url: None }),
            ..Default::default()
        };
        let from_file = resolve_runtime(&config, &RuntimeOverrides::default(), Some("env-key".into())).unwrap();
        assert_eq!(from_file.api_key, "file-key");

        let overrides = RuntimeOverrides { api_key: Some("cli-key".into()), ..Default::default() };
        let from_cli = resolve_runtime(&config, &overrides, Some("env-key".into())).unwrap();
        assert_eq!(from_cli.api_key, "cli-key");
    }

    #[test]
    fn test_unset_env_reference_falls_through() {
        let config = AuditConfig {
            llm: Some(LLMConfig { api_key: Some("$WOW_AUDIT_UNSET_VAR".into()), base_url: None }),
            ..Default::default()
        };
        let runtime = resolve_runtime(&config, &RuntimeOverrides::default(), Some("env-key".into())).unwrap();
        assert_eq!(runtime.api_key, "env-key");
    }

    #[test]
    fn test_server_and_summary_sections() {
        let config = AuditConfig {
            llm: Some(LLMConfig { api_key: Some("k".into()), base_url: Some("http://127.0.0.1:1".into()) }),
            summary: Some(SummaryConfig { overlap: Some(OverlapPolicy::LastResolved) }),
            server: Some(ServerConfig { host: Some("127.0.0.1".into()), port: Some(9100) }),
        };
        let overrides = RuntimeOverrides { port: Some(9200), ..Default::default() };
        let runtime = resolve_runtime(&config, &overrides, None).unwrap();
        assert_eq!(runtime.base_url, "http://127.0.0.1:1");
        assert_eq!(runtime.overlap, OverlapPolicy::LastResolved);
        assert_eq!(runtime.bind_addr(), "127.0.0.1:9200");
    }

    #[tokio::test]
    async fn test_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm:\n  api_key: abc123\nserver:\n  port: 8181\nsummary:\n  overlap: last_resolved").unwrap();

        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.llm.unwrap().api_key.as_deref(), Some("abc123"));
        assert_eq!(config.server.unwrap().port, Some(8181));
        assert_eq!(config.summary.unwrap().overlap, Some(OverlapPolicy::LastResolved));
    }

    #[tokio::test]
    async fn test_parse_empty_config_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = parse_config(file.path()).await.unwrap();
        assert!(config.llm.is_none());
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let err = parse_config(Path::new("/nonexistent/wow-audit.yaml")).await.unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }

    #[tokio::test]
    async fn test_parse_config_bad_overlap_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "summary:\n  overlap: sometimes").unwrap();
        let err = parse_config(file.path()).await.unwrap_err();
        assert!(matches!(err, AuditError::Yaml(_)));
    }
}
