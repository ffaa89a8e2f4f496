//! Layered configuration for the calcd binary.
//!
//! Precedence: built-in defaults -> YAML file -> `CALCD__*` environment
//! variables -> CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when no `-v` flag and no `RUST_LOG` is set.
    pub level: String,
    /// Optional log file; records are appended as JSON lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some(PathBuf::from("calculator.log")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .map(String::from)
                .to_vec(),
            allowed_headers: ["Origin", "Content-Type", "Accept", "Authorization"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Per-request timeout at the transport boundary.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load the layered configuration. A missing `--config` path is an
    /// error; an absent file is only tolerated for the default layers.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("CALCD__").split("__"));
        figment
            .extract()
            .context("failed to assemble configuration")
    }

    /// Apply CLI flags that override file/env configuration.
    pub fn apply_port_override(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_service() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("calculator.log"))
        );
        assert_eq!(config.cors.allowed_origins, ["http://localhost:3000"]);
        assert_eq!(config.http.request_timeout_secs, 30);
    }

    #[test]
    fn yaml_and_env_layers_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "calcd.yaml",
                r"
server:
  host: 0.0.0.0
  port: 9000
logging:
  level: debug
",
            )?;
            jail.set_env("CALCD__SERVER__PORT", "9100");

            let config = AppConfig::load(Some(Path::new("calcd.yaml"))).expect("load");
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn port_override_wins() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some(9999));
        assert_eq!(config.server.bind_addr(), "127.0.0.1:9999");
    }
}
