//! # AidConnect Config
//!
//! Configuration types for the AidConnect API, loaded from environment variables:
//!
//! - [`server`]: HTTP and metrics listener ports
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: Per-IP rate limiting for the API and the AI assist endpoints
//! - [`ai`]: AI assistant (Gemini) configuration
//! - [`dashboard`]: Dashboard aggregation settings (global keyword ignore list)
//!
//! # Example
//!
//! ```ignore
//! use aidconnect_config::{AiConfig, CorsConfig, DashboardConfig, RateLimitConfig};
//!
//! let cors_config = CorsConfig::from_env();
//! let ai_config = AiConfig::from_env();
//! ```

pub mod ai;
pub mod cors;
pub mod dashboard;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use ai::AiConfig;
pub use cors::CorsConfig;
pub use dashboard::DashboardConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Parses an environment variable, falling back to `default` when unset or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads a boolean flag; `false`, `0`, `no` and `off` (any case) disable it.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"),
        Err(_) => default,
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
