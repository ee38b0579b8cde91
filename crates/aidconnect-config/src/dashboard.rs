//! Dashboard aggregation settings.
//!
//! # Environment Variables
//!
//! - `IGNORED_KEYWORDS`: comma-separated keywords never shown in keyword stats
//! - `DASHBOARD_CLASSIFY_KEYWORDS`: ask the AI assistant to flag generic keywords (default `true`)

use crate::{env_flag, split_list};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Global ignore list, merged with whatever the classifier flags.
    pub ignored_keywords: Vec<String>,
    pub classify_keywords: bool,
}

impl DashboardConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ignored_keywords: std::env::var("IGNORED_KEYWORDS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            classify_keywords: env_flag("DASHBOARD_CLASSIFY_KEYWORDS", true),
        }
    }
}
