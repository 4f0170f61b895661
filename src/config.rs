use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the movie rating API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path of the movie collection endpoint, relative to the base URL
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Path of the backend health endpoint, relative to the base URL
    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Cache key the movie collection is stored under
    #[serde(default = "default_movies_cache_key")]
    pub movies_cache_key: String,

    /// How long a fetched collection stays fresh, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Timeout for a single backend request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long a page waits for data before rendering the loading state
    #[serde(default = "default_render_wait_ms")]
    pub render_wait_ms: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_movies_path() -> String {
    "/movies".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_movies_cache_key() -> String {
    "movies".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_render_wait_ms() -> u64 {
    2000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            movies_path: default_movies_path(),
            health_path: default_health_path(),
            movies_cache_key: default_movies_cache_key(),
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            render_wait_ms: default_render_wait_ms(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn render_wait(&self) -> Duration {
        Duration::from_millis(self.render_wait_ms)
    }

    /// Full URL of an API endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.movies_cache_key, "movies");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_overrides_from_env_pairs() {
        let config: Config = envy::from_iter(vec![
            ("API_BASE_URL".to_string(), "https://api.example.dev/".to_string()),
            ("MOVIES_CACHE_KEY".to_string(), "catalog".to_string()),
            ("RENDER_WAIT_MS".to_string(), "250".to_string()),
        ])
        .unwrap();

        assert_eq!(config.movies_cache_key, "catalog");
        assert_eq!(config.render_wait(), Duration::from_millis(250));
        assert_eq!(
            config.endpoint(&config.movies_path),
            "https://api.example.dev/movies"
        );
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = Config::default();
        assert_eq!(
            config.endpoint("/health"),
            "http://localhost:8080/api/health"
        );
        assert_eq!(config.endpoint("movies"), "http://localhost:8080/api/movies");
    }
}
