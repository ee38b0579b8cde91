//! Dashboard snapshot and query DTOs.
//!
//! [`DashboardStats`] is produced by the engine's aggregator and is a pure
//! function of the request list plus the ignore list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::requests::AidCategory;

/// Unfulfilled share of one category, in whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryNeed {
    pub category: AidCategory,
    pub unfulfilled_percentage: u32,
}

/// Outstanding item quantity at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationNeed {
    pub location: String,
    pub unfulfilled_count: u64,
}

/// Per-location breakdown used by the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationStat {
    pub location: String,
    pub unfulfilled_count: u64,
    pub total_needed: u64,
    pub unfulfilled_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_requests: u64,
    pub fulfilled_requests: u64,
    /// Every request that is not fulfilled, partially fulfilled included.
    pub pending_requests: u64,
    /// Top 5 categories by unfulfilled percentage.
    pub top_needed_items: Vec<CategoryNeed>,
    /// Every location seen, in first-encounter order.
    pub needs_by_location: Vec<LocationNeed>,
    /// Top 15 locations by unfulfilled percentage, with totals.
    pub location_stats: Vec<LocationStat>,
    /// Top 3 locations by outstanding quantity.
    pub top_urgent_regions: Vec<LocationNeed>,
    /// Top 20 keywords on open items.
    pub keyword_stats: Vec<KeywordFrequency>,
}

/// Query parameters of `GET /api/dashboard`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DashboardParams {
    /// Also drop keywords the assistant classifies as generic (default true).
    pub filter_generic: Option<bool>,
}

impl DashboardParams {
    pub fn filter_generic(&self) -> bool {
        self.filter_generic.unwrap_or(true)
    }
}

/// Body of `POST /api/dashboard/stats`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DashboardStatsRequest {
    #[serde(default)]
    pub ignored_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IgnoredKeywordsResponse {
    pub ignored_keywords: Vec<String>,
    /// Whether the assistant's classification contributed to the list.
    pub classified: bool,
}

/// One outstanding item in the situation digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SituationItem {
    pub name: String,
    pub remaining: u32,
    pub category: AidCategory,
}

/// Outstanding needs of one open request, as sent to the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SituationEntry {
    pub location: String,
    pub items: Vec<SituationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SituationReportResponse {
    pub report: String,
    /// False when the fixed fallback text was returned.
    pub generated: bool,
}
