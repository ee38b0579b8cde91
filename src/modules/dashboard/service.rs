use aidconnect_config::DashboardConfig;
use aidconnect_core::AppError;
use aidconnect_engine::{aggregate, keyword_vocabulary, situation_digest};
use aidconnect_models::{
    AidRequest, DashboardStats, IgnoredKeywordsResponse, SituationReportResponse,
};
use sqlx::PgPool;
use tracing::instrument;

use crate::ai::{self, AidAssistant};
use crate::metrics;
use crate::modules::requests::RequestService;

pub const REPORT_FALLBACK: &str = "AI analysis unavailable at this time.";

/// Trims, lower-cases and de-duplicates keywords, keeping first occurrence order.
fn merge_keywords<'a>(lists: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for keyword in lists {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !merged.contains(&keyword) {
            merged.push(keyword);
        }
    }
    merged
}

pub struct DashboardService;

impl DashboardService {
    /// The configured ignore list, extended with the keywords the assistant
    /// classifies as generic when `filter_generic` is set.
    ///
    /// A missing or failing assistant leaves the configured list unchanged.
    #[instrument(skip(config, assistant, requests), fields(requests = requests.len()))]
    pub async fn resolve_ignored_keywords(
        config: &DashboardConfig,
        assistant: &dyn AidAssistant,
        requests: &[AidRequest],
        filter_generic: bool,
    ) -> IgnoredKeywordsResponse {
        let mut ignored = merge_keywords(&config.ignored_keywords);

        if !(filter_generic && config.classify_keywords && assistant.is_enabled()) {
            return IgnoredKeywordsResponse {
                ignored_keywords: ignored,
                classified: false,
            };
        }

        let vocabulary = keyword_vocabulary(requests);
        if vocabulary.is_empty() {
            return IgnoredKeywordsResponse {
                ignored_keywords: ignored,
                classified: false,
            };
        }

        match ai::observe(
            "classify_keywords",
            assistant.classify_generic_keywords(&vocabulary),
        )
        .await
        {
            Ok(generic) => {
                ignored = merge_keywords(ignored.iter().chain(generic.iter()));
                IgnoredKeywordsResponse {
                    ignored_keywords: ignored,
                    classified: true,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Generic keyword classification failed, using configured ignore list");
                IgnoredKeywordsResponse {
                    ignored_keywords: ignored,
                    classified: false,
                }
            }
        }
    }

    #[instrument(skip(db, config, assistant))]
    pub async fn get_dashboard(
        db: &PgPool,
        config: &DashboardConfig,
        assistant: &dyn AidAssistant,
        filter_generic: bool,
    ) -> Result<DashboardStats, AppError> {
        let requests = RequestService::load_all_requests(db).await?;
        let ignored =
            Self::resolve_ignored_keywords(config, assistant, &requests, filter_generic).await;

        let stats = aggregate(&requests, &ignored.ignored_keywords);
        metrics::track_dashboard_computed(&stats);
        Ok(stats)
    }

    #[instrument(skip(db, config, assistant))]
    pub async fn get_ignored_keywords(
        db: &PgPool,
        config: &DashboardConfig,
        assistant: &dyn AidAssistant,
        filter_generic: bool,
    ) -> Result<IgnoredKeywordsResponse, AppError> {
        let requests = RequestService::load_all_requests(db).await?;
        Ok(Self::resolve_ignored_keywords(config, assistant, &requests, filter_generic).await)
    }

    /// Aggregation with exactly the caller's ignore list.
    #[instrument(skip(db, ignored_keywords), fields(ignored = ignored_keywords.len()))]
    pub async fn compute_stats(
        db: &PgPool,
        ignored_keywords: &[String],
    ) -> Result<DashboardStats, AppError> {
        let requests = RequestService::load_all_requests(db).await?;
        let stats = aggregate(&requests, ignored_keywords);
        metrics::track_dashboard_computed(&stats);
        Ok(stats)
    }

    #[instrument(skip(db, assistant))]
    pub async fn situation_report(
        db: &PgPool,
        assistant: &dyn AidAssistant,
    ) -> Result<SituationReportResponse, AppError> {
        let requests = RequestService::load_all_requests(db).await?;
        let digest = situation_digest(&requests);

        let response = match ai::observe("situation_report", assistant.situation_report(&digest))
            .await
        {
            Ok(report) if !report.trim().is_empty() => SituationReportResponse {
                report,
                generated: true,
            },
            _ => SituationReportResponse {
                report: REPORT_FALLBACK.to_string(),
                generated: false,
            },
        };
        Ok(response)
    }
}
