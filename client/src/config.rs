//! Client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// API endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the storefront API, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are
    /// trimmed so endpoint joins stay predictable.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Load from `STOREFRONT_BASE_URL`, falling back to the local default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(&base_url)
    }

    /// Join an absolute endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
