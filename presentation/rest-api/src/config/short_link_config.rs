use std::env;

/// Public host used to build absolute short links.
#[derive(Debug, Clone)]
pub struct ShortLinkConfig {
    pub public_base_url: String,
}

impl ShortLinkConfig {
    /// Environment variables:
    /// - PUBLIC_BASE_URL: Scheme and host the short links are served from
    ///   (default: "http://localhost:8080")
    pub fn from_env() -> Self {
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(public_base_url)
    }

    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Joins a relative short-link path onto the public host.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.public_base_url, path)
    }
}
