//! Client Configuration
//!
//! Values baked in at compile time (the bundle has no runtime environment),
//! with defaults matching the local development backend.

/// Backend used when `TASKBOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8081/api";

/// Tasks per page on the project detail view
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Lifetime of a notification before it dismisses itself
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// localStorage key holding the signed-in email
pub const EMAIL_KEY: &str = "email";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `http://localhost:8081/api`
    pub base_url: String,
    pub page_size: u32,
    pub notification_ttl_ms: u32,
}

impl ClientConfig {
    /// Build from `TASKBOARD_API_URL` / `TASKBOARD_PAGE_SIZE` captured at compile time
    pub fn from_env() -> Self {
        let mut config = Self::with_base_url(option_env!("TASKBOARD_API_URL").unwrap_or(DEFAULT_API_URL));
        if let Some(size) = option_env!("TASKBOARD_PAGE_SIZE").and_then(parse_page_size) {
            config.page_size = size;
        }
        config
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if trimmed.is_empty() { DEFAULT_API_URL.to_string() } else { trimmed.to_string() },
            page_size: DEFAULT_PAGE_SIZE,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

fn parse_page_size(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|size| *size > 0)
}
