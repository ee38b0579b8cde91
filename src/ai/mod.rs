//! AI assistant integration.
//!
//! The assistant is an optional collaborator. Every feature built on it has
//! a fallback, so the API keeps working with it disabled or failing:
//!
//! | Operation | Used by | On failure |
//! |-----------|---------|------------|
//! | [`AidAssistant::extract_request`] | `POST /api/assist/extract` | 502 |
//! | [`AidAssistant::generate_keywords`] | `POST /api/assist/keywords` | empty list |
//! | [`AidAssistant::classify_generic_keywords`] | dashboard keyword filter | global ignore list only |
//! | [`AidAssistant::situation_report`] | `POST /api/dashboard/report` | fixed fallback text |

pub mod gemini;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use aidconnect_config::AiConfig;
use aidconnect_models::{AidCategory, SituationEntry};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub use gemini::GeminiClient;

use crate::metrics;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI assistant is not configured")]
    Disabled,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid AI response: {0}")]
    InvalidResponse(String),
    #[error("failed to decode AI response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AiResult<T> = Result<T, AiError>;

/// Raw smart-fill output. Every field is optional and loosely typed; the
/// assist service normalises it before it reaches a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExtractedRequest {
    pub full_name: Option<String>,
    pub nic: Option<String>,
    pub contact_number: Option<String>,
    pub notes: Option<String>,
    pub district: Option<String>,
    pub region: Option<String>,
    pub items: Vec<ExtractedItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExtractedItem {
    pub name: String,
    /// Number or numeric string; anything else reads as 1.
    pub quantity: Value,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub keywords: Vec<String>,
}

#[async_trait]
pub trait AidAssistant: Send + Sync + std::fmt::Debug {
    /// Short name used in logs and metrics.
    fn name(&self) -> &'static str;

    fn is_enabled(&self) -> bool {
        true
    }

    /// Turns free text into a partially filled request.
    async fn extract_request(&self, text: &str) -> AiResult<ExtractedRequest>;

    /// Five descriptive tags for one item.
    async fn generate_keywords(&self, name: &str, category: AidCategory) -> AiResult<Vec<String>>;

    /// The subset of `vocabulary` too generic to be useful on the dashboard.
    async fn classify_generic_keywords(&self, vocabulary: &[String]) -> AiResult<Vec<String>>;

    /// A short donor-facing summary of outstanding needs.
    async fn situation_report(&self, digest: &[SituationEntry]) -> AiResult<String>;
}

/// Stand-in used when no API key is configured. Every call fails with
/// [`AiError::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAssistant;

#[async_trait]
impl AidAssistant for DisabledAssistant {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn extract_request(&self, _text: &str) -> AiResult<ExtractedRequest> {
        Err(AiError::Disabled)
    }

    async fn generate_keywords(&self, _name: &str, _category: AidCategory) -> AiResult<Vec<String>> {
        Err(AiError::Disabled)
    }

    async fn classify_generic_keywords(&self, _vocabulary: &[String]) -> AiResult<Vec<String>> {
        Err(AiError::Disabled)
    }

    async fn situation_report(&self, _digest: &[SituationEntry]) -> AiResult<String> {
        Err(AiError::Disabled)
    }
}

/// Runs one assistant call, recording its outcome and latency.
pub async fn observe<T>(
    operation: &'static str,
    call: impl Future<Output = AiResult<T>>,
) -> AiResult<T> {
    let start = Instant::now();
    let result = call.await;
    metrics::track_assistant_call(operation, result.is_ok(), start.elapsed());

    match &result {
        Err(AiError::Disabled) => tracing::debug!(operation, "AI assistant disabled"),
        Err(e) => tracing::warn!(operation, error = %e, "AI assistant call failed"),
        Ok(_) => {}
    }
    result
}

/// Picks the Gemini client when a key is configured, the disabled
/// assistant otherwise.
pub fn build_assistant(config: &AiConfig) -> Arc<dyn AidAssistant> {
    if !config.is_enabled() {
        tracing::warn!("GEMINI_API_KEY not set, AI assistant disabled");
        return Arc::new(DisabledAssistant);
    }

    match GeminiClient::new(config) {
        Ok(client) => {
            tracing::info!(model = %config.model, "AI assistant enabled");
            Arc::new(client)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build AI client, assistant disabled");
            Arc::new(DisabledAssistant)
        }
    }
}
