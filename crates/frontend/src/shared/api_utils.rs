//! API configuration for frontend-backend communication
//!
//! Resolves the backend base URL and builds absolute request URLs from
//! API paths.

/// Environment variable holding the backend base URL
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

const DEFAULT_BACKEND_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from the environment.
    ///
    /// Native builds read `API_BASE_URL` at runtime and fall back to the
    /// value baked in at compile time, then to the local backend.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_BASE_URL_VAR)
            .ok()
            .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", DEFAULT_BACKEND_PORT));
        log::debug!("API base URL: {}", base_url);
        Self::new(base_url)
    }

    /// Resolve the base URL from the environment.
    ///
    /// In the browser there is no process environment: `API_BASE_URL` is
    /// taken at compile time, otherwise the page origin with the backend
    /// port is used.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let base_url = option_env!("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .or_else(location_base)
            .unwrap_or_default();
        log::debug!("API base URL: {}", base_url);
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    ///
    /// Absolute URLs are returned as is.
    ///
    /// # Example
    /// ```rust
    /// use frontend::shared::api_utils::ApiConfig;
    ///
    /// let config = ApiConfig::new("http://localhost:8000/");
    /// assert_eq!(config.url("/api/brands"), "http://localhost:8000/api/brands");
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Page origin with the backend port, like "https://example.com:8000"
#[cfg(target_arch = "wasm32")]
fn location_base() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some(format!("{}//{}:{}", protocol, hostname, DEFAULT_BACKEND_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://sales.example.com///");
        assert_eq!(config.base_url(), "https://sales.example.com");
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.url("/users/"), "http://localhost:8000/users/");
        assert_eq!(config.url("auth/login"), "http://localhost:8000/auth/login");
        assert_eq!(
            config.url("https://other.host/api/units"),
            "https://other.host/api/units"
        );
    }
}
