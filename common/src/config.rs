//! Client configuration shared by the HTTP client, the session store and the views.
//!
//! The frontend builds a [`ClientConfig`] once at startup from compile-time
//! environment overrides (see `frontend/src/config.rs`) and hands it to the
//! API client. Everything here is plain data so it can be unit tested natively.

/// Default base URL of the remote API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Storage key under which the bearer token is persisted.
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Storage key for the light/dark theme preference.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "keepdm-theme";

/// Delay before navigating after a toast that must stay visible (401, save, delete).
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 1_500;

/// Number of rows requested by the upload preview view.
pub const DEFAULT_PREVIEW_ROWS: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub token_storage_key: String,
    pub theme_storage_key: String,
    pub redirect_delay_ms: u32,
    pub preview_rows: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from optional overrides. Blank or unparsable values
    /// fall back to the defaults.
    pub fn from_overrides(api_base_url: Option<&str>, request_timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = normalize_base_url(url);
        }
        if let Some(timeout) = request_timeout_ms.and_then(|t| t.trim().parse::<u32>().ok()) {
            config.request_timeout_ms = timeout;
        }

        config
    }

    /// Joins an absolute API path (`/api/...`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_used_without_overrides() {
        let config = ClientConfig::from_overrides(None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn base_url_is_normalized_and_timeout_parsed() {
        let config = ClientConfig::from_overrides(Some(" https://api.example.com/// "), Some("5000"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn invalid_timeout_falls_back() {
        let config = ClientConfig::from_overrides(Some(""), Some("soon"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn url_joins_paths() {
        let config = ClientConfig::default();
        assert_eq!(config.url("/api/templates/"), "http://localhost:8000/api/templates/");
        assert_eq!(config.url("api/data/"), "http://localhost:8000/api/data/");
    }
}
