//! Scripted assistant for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use aidconnect_models::{AidCategory, SituationEntry};
use async_trait::async_trait;

use super::{AiError, AiResult, AidAssistant, ExtractedRequest};

/// Returns canned answers. A `None` answer fails the call, which is how
/// tests exercise the fallback paths.
#[derive(Debug, Default)]
pub struct StubAssistant {
    pub extraction: Option<ExtractedRequest>,
    pub keywords: Option<Vec<String>>,
    pub generic_keywords: Option<Vec<String>>,
    pub report: Option<String>,
    calls: AtomicUsize,
    last_digest: Mutex<Vec<SituationEntry>>,
}

impl StubAssistant {
    /// Every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_extraction(mut self, extraction: ExtractedRequest) -> Self {
        self.extraction = Some(extraction);
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = Some(keywords.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn with_generic_keywords(mut self, keywords: &[&str]) -> Self {
        self.generic_keywords = Some(keywords.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn with_report(mut self, report: &str) -> Self {
        self.report = Some(report.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Digest passed to the most recent `situation_report` call.
    pub fn last_digest(&self) -> Vec<SituationEntry> {
        self.last_digest
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    fn answer<T: Clone>(&self, answer: &Option<T>) -> AiResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        answer
            .clone()
            .ok_or_else(|| AiError::InvalidResponse("stub has no answer".to_string()))
    }
}

#[async_trait]
impl AidAssistant for StubAssistant {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn extract_request(&self, _text: &str) -> AiResult<ExtractedRequest> {
        self.answer(&self.extraction)
    }

    async fn generate_keywords(&self, _name: &str, _category: AidCategory) -> AiResult<Vec<String>> {
        self.answer(&self.keywords)
    }

    async fn classify_generic_keywords(&self, _vocabulary: &[String]) -> AiResult<Vec<String>> {
        self.answer(&self.generic_keywords)
    }

    async fn situation_report(&self, digest: &[SituationEntry]) -> AiResult<String> {
        if let Ok(mut last) = self.last_digest.lock() {
            *last = digest.to_vec();
        }
        self.answer(&self.report)
    }
}
