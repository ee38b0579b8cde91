//! Rate limiting configuration.
//!
//! Uses the token bucket from `tower_governor`, keyed by client IP
//! (`X-Forwarded-For`, `X-Real-Ip` or `Forwarded` when a proxy sets them,
//! the peer address otherwise):
//!
//! - one token is replenished every `*_period_secs` seconds
//! - each request consumes one token
//! - at most `*_burst_size` tokens accumulate
//!
//! The assist endpoints forward text to a paid AI service and get a much
//! tighter bucket than the rest of the API.
//!
//! # Environment Variables
//!
//! - `RATE_LIMIT_ENABLED`: default `true`
//! - `RATE_LIMIT_GENERAL_PERIOD_SECS` / `RATE_LIMIT_GENERAL_BURST_SIZE`: default 1 / 60
//! - `RATE_LIMIT_ASSIST_PERIOD_SECS` / `RATE_LIMIT_ASSIST_BURST_SIZE`: default 6 / 5

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

use crate::{env_flag, env_or};

pub type IpGovernorConfig =
    GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// When false no governor layer is installed at all.
    pub enabled: bool,
    pub general_period_secs: u64,
    pub general_burst_size: u32,
    pub assist_period_secs: u64,
    pub assist_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            general_period_secs: 1,
            general_burst_size: 60,
            assist_period_secs: 6,
            assist_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// Falls back to the defaults for any variable that is unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_flag("RATE_LIMIT_ENABLED", defaults.enabled),
            general_period_secs: env_or(
                "RATE_LIMIT_GENERAL_PERIOD_SECS",
                defaults.general_period_secs,
            ),
            general_burst_size: env_or("RATE_LIMIT_GENERAL_BURST_SIZE", defaults.general_burst_size),
            assist_period_secs: env_or("RATE_LIMIT_ASSIST_PERIOD_SECS", defaults.assist_period_secs),
            assist_burst_size: env_or("RATE_LIMIT_ASSIST_BURST_SIZE", defaults.assist_burst_size),
        }
    }

    /// A config with limiting switched off, used by tests driving the router in-process.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Governor config for the general API surface.
    ///
    /// Returns `None` when the configured period or burst size is zero.
    #[must_use]
    pub fn general_governor_config(&self) -> Option<IpGovernorConfig> {
        build(self.general_period_secs, self.general_burst_size)
    }

    /// Governor config for the AI assist endpoints.
    #[must_use]
    pub fn assist_governor_config(&self) -> Option<IpGovernorConfig> {
        build(self.assist_period_secs, self.assist_burst_size)
    }
}

fn build(period_secs: u64, burst_size: u32) -> Option<IpGovernorConfig> {
    GovernorConfigBuilder::default()
        .per_second(period_secs)
        .burst_size(burst_size)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.general_period_secs, 1);
        assert_eq!(config.general_burst_size, 60);
        assert_eq!(config.assist_period_secs, 6);
        assert_eq!(config.assist_burst_size, 5);
    }

    #[test]
    fn test_disabled_keeps_limits() {
        let config = RateLimitConfig::disabled();
        assert!(!config.enabled);
        assert_eq!(config.assist_burst_size, RateLimitConfig::default().assist_burst_size);
    }

    #[test]
    fn test_governor_configs_build_from_defaults() {
        let config = RateLimitConfig::default();
        assert!(config.general_governor_config().is_some());
        assert!(config.assist_governor_config().is_some());
    }

    #[test]
    fn test_zero_burst_is_rejected() {
        let config = RateLimitConfig {
            assist_burst_size: 0,
            ..RateLimitConfig::default()
        };
        assert!(config.assist_governor_config().is_none());
    }
}
