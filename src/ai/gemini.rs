//! Gemini REST client.
//!
//! Talks to the `generateContent` endpoint of the Generative Language API.
//! Structured operations request `application/json` output and decode the
//! first candidate's text.

use std::time::Duration;

use aidconnect_config::AiConfig;
use aidconnect_models::{AidCategory, SituationEntry, geography};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{AiError, AiResult, AidAssistant, ExtractedRequest};

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(config: &AiConfig) -> AiResult<Self> {
        let api_key = config.api_key.clone().ok_or(AiError::Disabled)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Sends one prompt and returns the text of the first candidate.
    async fn generate(&self, prompt: &str, json_output: bool) -> AiResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: self.temperature,
                response_mime_type: json_output.then_some("application/json"),
            }),
        };

        tracing::debug!(model = %self.model, json_output, "Calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::InvalidResponse("empty candidate".to_string()));
        }
        Ok(text)
    }

    async fn generate_json<T: DeserializeOwned>(&self, prompt: &str) -> AiResult<T> {
        let raw = self.generate(prompt, true).await?;
        parse_json(&raw)
    }
}

/// Decodes model output, tolerating a surrounding markdown code fence.
pub(crate) fn parse_json<T: DeserializeOwned>(raw: &str) -> AiResult<T> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);
    Ok(serde_json::from_str(body.trim())?)
}

fn category_labels() -> String {
    AidCategory::ALL
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn extraction_prompt(text: &str) -> String {
    let districts = geography::districts().collect::<Vec<_>>().join(", ");
    format!(
        "Extract a disaster-relief aid request from the text below.\n\
         Return a JSON object with the fields full_name, nic, contact_number, notes, \
         district, region and items. Use null for anything the text does not mention.\n\
         district must be one of: {districts}.\n\
         items is an array of objects with name, quantity (number), unit, category and keywords.\n\
         Map each item to one of these categories: {categories}.\n\
         Give every item 5 specific, descriptive keywords (for example \"infant formula\" or \
         \"insulin\"); avoid generic single adjectives like \"urgent\" or \"needed\".\n\n\
         Text: \"{text}\"",
        categories = category_labels(),
    )
}

fn keywords_prompt(name: &str, category: AidCategory) -> String {
    format!(
        "Generate 5 specific descriptive keywords for the aid item \"{name}\" in the category \
         \"{category}\". Return a JSON array of strings.",
        category = category.label(),
    )
}

fn classify_prompt(vocabulary: &[String]) -> AiResult<String> {
    Ok(format!(
        "These keywords tag items in disaster-relief aid requests: {list}\n\
         Return a JSON array containing only the keywords that are too generic to tell items \
         apart (for example \"urgent\", \"needed\", \"items\", \"supplies\"). \
         Return [] if none are generic.",
        list = serde_json::to_string(vocabulary)?,
    ))
}

fn report_prompt(digest: &[SituationEntry]) -> AiResult<String> {
    Ok(format!(
        "Analyze the following outstanding disaster-relief needs and write a 3-paragraph \
         executive summary for donors: critical needs, location analysis and supply chain \
         recommendations. Keep the tone professional and humanitarian.\n\nData: {data}",
        data = serde_json::to_string(digest)?,
    ))
}

#[async_trait]
impl AidAssistant for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn extract_request(&self, text: &str) -> AiResult<ExtractedRequest> {
        self.generate_json(&extraction_prompt(text)).await
    }

    #[instrument(skip(self))]
    async fn generate_keywords(&self, name: &str, category: AidCategory) -> AiResult<Vec<String>> {
        self.generate_json(&keywords_prompt(name, category)).await
    }

    #[instrument(skip(self, vocabulary), fields(vocabulary_len = vocabulary.len()))]
    async fn classify_generic_keywords(&self, vocabulary: &[String]) -> AiResult<Vec<String>> {
        if vocabulary.is_empty() {
            return Ok(Vec::new());
        }
        self.generate_json(&classify_prompt(vocabulary)?).await
    }

    #[instrument(skip(self, digest), fields(entries = digest.len()))]
    async fn situation_report(&self, digest: &[SituationEntry]) -> AiResult<String> {
        let report = self.generate(&report_prompt(digest)?, false).await?;
        Ok(report.trim().to_string())
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
