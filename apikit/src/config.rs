use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gateway configuration. The base URL and the `/api` prefix are joined
/// in exactly one place (`endpoint`); resource modules only ever name
/// routes like `/inventory/medicines`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Scheme + host + port of the backend, no path.
    pub base_url: String,
    /// Path prefix every route lives under.
    pub api_prefix: String,
    /// Default per-request timeout (native targets).
    pub request_timeout: Duration,
    /// Bulk uploads get a longer window; spreadsheet parsing server-side
    /// is slow.
    pub upload_timeout: Duration,
    /// How long a cached query result stays fresh.
    pub cache_staleness: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            request_timeout: Duration::from_secs(10),
            upload_timeout: Duration::from_secs(120),
            cache_staleness: Duration::from_secs(30),
        }
    }
}

impl GatewayConfig {
    /// Resolve a route against the configured host and prefix.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, prefix, path)
        }
    }
}

/// Load configuration from an optional file plus `PHARMADASH_*`
/// environment overrides.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config(path: &str) -> Result<GatewayConfig, crate::errors::ApiError> {
    use crate::errors::ApiError;
    use config::{Config, Environment, File};

    let cfg = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("PHARMADASH"))
        .build()
        .map_err(|e| ApiError::Config(e.to_string()))?;

    cfg.try_deserialize()
        .map_err(|e| ApiError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_prefix_once() {
        let config = GatewayConfig::default();
        assert_eq!(
            config.endpoint("/inventory/medicines"),
            "http://localhost:8000/api/inventory/medicines"
        );
    }

    #[test]
    fn endpoint_tolerates_slash_variants() {
        let config = GatewayConfig {
            base_url: "http://pharmacy.local:9000/".to_string(),
            api_prefix: "api/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint("alerts/stats"),
            "http://pharmacy.local:9000/api/alerts/stats"
        );
    }

    #[test]
    fn endpoint_with_empty_prefix() {
        let config = GatewayConfig {
            api_prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint("/chatbot/chat"),
            "http://localhost:8000/chatbot/chat"
        );
    }
}
