//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The site address and root come from Leptos' own configuration instead.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive
    /// Example: info,authview=debug
    pub log_filter: Option<String>,

    /// Whether responses are brotli/gzip compressed
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("AUTHVIEW_COMPRESSION").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, compression: Option<String>) -> Self {
        Self {
            log_filter: log_filter.filter(|f| !f.trim().is_empty()),
            compression: compression.as_deref().is_none_or(parse_flag),
        }
    }

    /// Filter directive to build the tracing subscriber with
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
