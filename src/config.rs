use std::fs;
use std::path::Path;

use order_gateway_upstream::UpstreamConfig;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// Gateway configuration, passed to [`crate::server::bind`] at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Where the gateway accepts GraphQL requests
    pub listen: ListenConfig,
    /// Where the gateway reads orders, products and users
    pub upstream: UpstreamConfig,
}

/// Listening socket settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 4000 }
    }
}

impl ListenConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub order_service_url: Option<String>,
    pub product_service_url: Option<String>,
    pub user_service_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl GatewayConfig {
    /// Reads a YAML configuration file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GatewayError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            GatewayError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Defaults, then the optional file, then the overrides
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.listen.host = host;
        }
        if let Some(port) = overrides.port {
            self.listen.port = port;
        }
        if let Some(url) = overrides.order_service_url {
            self.upstream.order_service_url = url;
        }
        if overrides.product_service_url.is_some() {
            self.upstream.product_service_url = overrides.product_service_url;
        }
        if overrides.user_service_url.is_some() {
            self.upstream.user_service_url = overrides.user_service_url;
        }
        if overrides.request_timeout_secs.is_some() {
            self.upstream.request_timeout_secs = overrides.request_timeout_secs;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.listen.host.trim().is_empty() {
            return Err(GatewayError::Config("Listen host must not be empty".to_string()));
        }
        self.upstream.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::load(None, ConfigOverrides::default()).unwrap();

        assert_eq!(config.listen.address(), "0.0.0.0:4000");
        assert_eq!(config.upstream.order_service_url, "http://localhost:5001");
        assert_eq!(config.upstream.product_service_url, None);
        assert_eq!(config.upstream.user_service_url, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
listen:
  port: 8080
upstream:
  order_service_url: http://orders:5001
  user_service_url: http://users:5003
"#,
        );

        let config = GatewayConfig::load(Some(file.path()), ConfigOverrides::default()).unwrap();

        assert_eq!(config.listen.host, "0.0.0.0");
        assert_eq!(config.listen.port, 8080);
        assert_eq!(config.upstream.order_service_url, "http://orders:5001");
        assert_eq!(config.upstream.user_service_url, Some("http://users:5003".to_string()));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = write_config("listen:\n  port: 8080\n");
        let overrides = ConfigOverrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(9090),
            product_service_url: Some("http://products:5002".to_string()),
            ..ConfigOverrides::default()
        };

        let config = GatewayConfig::load(Some(file.path()), overrides).unwrap();

        assert_eq!(config.listen.address(), "127.0.0.1:9090");
        assert_eq!(config.upstream.product_service_url, Some("http://products:5002".to_string()));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let overrides = ConfigOverrides {
            order_service_url: Some("orders:5001".to_string()),
            ..ConfigOverrides::default()
        };

        let result = GatewayConfig::load(None, overrides);
        assert!(matches!(result, Err(GatewayError::Upstream(_))));
    }

    #[test]
    fn test_unparsable_file() {
        let file = write_config("listen: [not, a, map]\n");

        let result = GatewayConfig::load(Some(file.path()), ConfigOverrides::default());
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result =
            GatewayConfig::load(Some(Path::new("/nonexistent/gateway.yaml")), ConfigOverrides::default());
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }
}
