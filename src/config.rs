use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Redis connection URL; product list caching is disabled when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Product API base URL; the built-in reference catalog is used when unset
    #[serde(default)]
    pub catalog_api_url: Option<String>,

    /// How long a fetched product list stays cached, in seconds
    #[serde(default = "default_catalog_cache_ttl_secs")]
    pub catalog_cache_ttl_secs: u64,

    /// Image analysis API base URL; rooms are always fallback-generated when unset
    #[serde(default)]
    pub analysis_api_url: Option<String>,

    /// Bearer token sent to the image analysis API
    #[serde(default)]
    pub analysis_api_key: Option<String>,

    /// Upper bound for a single image analysis call, in seconds
    #[serde(default = "default_analysis_timeout_secs")]
    pub analysis_timeout_secs: u64,

    /// Largest accepted room photo, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_cache_ttl_secs() -> u64 {
    3600
}

fn default_analysis_timeout_secs() -> u64 {
    10
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            redis_url: None,
            catalog_api_url: None,
            catalog_cache_ttl_secs: default_catalog_cache_ttl_secs(),
            analysis_api_url: None,
            analysis_api_key: None,
            analysis_timeout_secs: default_analysis_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let vars: Vec<(String, String)> = vec![];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.analysis_timeout_secs, 10);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert!(config.catalog_api_url.is_none());
        assert!(config.redis_url.is_none());
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("CATALOG_API_URL".to_string(), "http://products.local/api".to_string()),
            ("ANALYSIS_TIMEOUT_SECS".to_string(), "3".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.catalog_api_url.as_deref(),
            Some("http://products.local/api")
        );
        assert_eq!(config.analysis_timeout_secs, 3);
    }
}
