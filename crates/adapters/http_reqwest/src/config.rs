//! HTTP backend configuration.

use serde::Deserialize;

/// Where the pairing backend lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpBackendConfig {
    /// Base URL the endpoints are resolved against (e.g. `http://192.168.42.1`).
    ///
    /// A path prefix is kept: `http://host/portal` serves `/portal/devices`.
    pub url: String,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            url: "http://192.168.42.1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_hotspot_gateway() {
        let config = HttpBackendConfig::default();
        assert_eq!(config.url, "http://192.168.42.1");
    }

    #[test]
    fn should_deserialize_from_toml() {
        let config: HttpBackendConfig = toml::from_str("url = 'http://10.0.0.1:8080'").unwrap();
        assert_eq!(config.url, "http://10.0.0.1:8080");
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config: HttpBackendConfig = toml::from_str("").unwrap();
        assert_eq!(config.url, "http://192.168.42.1");
    }
}
