use serde::{Deserialize, Serialize};

use crate::summary::OverlapPolicy;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuditConfig {
    pub llm: Option<LLMConfig>,
    pub summary: Option<SummaryConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    /// Literal key, or `$NAME` to read it from the environment.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SummaryConfig {
    pub overlap: Option<OverlapPolicy>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Everything the summary workflow needs, validated once at startup.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_key: String,
    pub base_url: String,
    pub overlap: OverlapPolicy,
    pub host: String,
    pub port: u16,
}

impl RuntimeConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_config_default() {
        let config = AuditConfig::default();
        assert!(config.llm.is_none());
        assert!(config.summary.is_none());
        assert!(config.server.is_none());
    }

    #[test]
    fn test_summary_config_from_yaml() {
        let config: AuditConfig = serde_yaml::from_str("summary:\n  overlap: last_resolved\n").unwrap();
        assert_eq!(config.summary.unwrap().overlap, Some(OverlapPolicy::LastResolved));
    }

    #[test]
    fn test_bind_addr() {
        let runtime = RuntimeConfig {
            api_key: "k".into(),
            base_url: "http://localhost".into(),
            overlap: OverlapPolicy::default(),
            host: "127.0.0.1".into(),
            port: 9000,
        };
        assert_eq!(runtime.bind_addr(), "127.0.0.1:9000");
    }
}
