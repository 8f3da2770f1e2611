use floor_client::ClientConfig;

/// Editor configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FLOOR_API_URL | http://localhost:3000 | backend base URL |
/// | FLOOR_API_TOKEN | - | bearer token |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | LOG_LEVEL | info | default log filter |
/// | LOG_JSON | false | JSON console output |
/// | LOG_DIR | - | enables file logging |
/// | PARTY_SIZE | 2 | party size for the best table preview |
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub party_size: u32,
}

impl EditorConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("FLOOR_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            api_token: std::env::var("FLOOR_API_TOKEN").ok().filter(|t| !t.is_empty()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            party_size: std::env::var("PARTY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
        }
    }

    /// Client configuration for the persistence backend
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone()).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_carries_token_and_timeout() {
        let config = EditorConfig {
            api_url: "http://pos.local".into(),
            api_token: Some("secret".into()),
            request_timeout_secs: 7,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            party_size: 4,
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "http://pos.local");
        assert_eq!(client.token.as_deref(), Some("secret"));
        assert_eq!(client.timeout, 7);
    }
}
