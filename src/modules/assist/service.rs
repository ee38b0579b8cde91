use aidconnect_core::AppError;
use aidconnect_models::{
    AidCategory, CreateAidItemDto, KeywordSuggestionResponse, SmartFillResponse, coerce_quantity,
    geography,
};
use serde_json::Value;
use tracing::instrument;

use crate::ai::{self, AidAssistant, ExtractedItem, ExtractedRequest};

const MAX_SUGGESTED_KEYWORDS: usize = 5;

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_keywords(keywords: Vec<String>, limit: usize) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.trim();
        if keyword.is_empty() || cleaned.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            continue;
        }
        cleaned.push(keyword.to_string());
        if cleaned.len() == limit {
            break;
        }
    }
    cleaned
}

/// Missing, zero or unreadable quantities read as 1.
fn item_quantity(raw: &Value) -> u32 {
    match coerce_quantity(raw) {
        q if q < 1 => 1,
        q => u32::try_from(q).unwrap_or(u32::MAX),
    }
}

fn normalize_item(item: ExtractedItem, id: String) -> CreateAidItemDto {
    CreateAidItemDto {
        id: Some(id),
        name: item.name.trim().to_string(),
        category: AidCategory::from_label_lossy(item.category.as_deref().unwrap_or_default()),
        quantity_needed: item_quantity(&item.quantity),
        unit: clean(item.unit).unwrap_or_else(|| "units".to_string()),
        keywords: clean_keywords(item.keywords, usize::MAX),
    }
}

/// Maps raw assistant output onto the submission form.
///
/// The district is matched against the table ignoring case. The region is
/// kept only when it belongs to that district. Items without a name are
/// dropped and the rest get sequential `item-N` ids.
pub fn normalize_extraction(extracted: ExtractedRequest) -> SmartFillResponse {
    let district = clean(extracted.district)
        .as_deref()
        .and_then(geography::match_district);
    let region = match (district, clean(extracted.region)) {
        (Some(district), Some(region)) => geography::match_region(district, &region),
        _ => None,
    };

    let items = extracted
        .items
        .into_iter()
        .filter(|item| !item.name.trim().is_empty())
        .enumerate()
        .map(|(index, item)| normalize_item(item, format!("item-{}", index + 1)))
        .collect();

    SmartFillResponse {
        full_name: clean(extracted.full_name),
        nic: clean(extracted.nic),
        contact_number: clean(extracted.contact_number),
        notes: clean(extracted.notes),
        district: district.map(str::to_string),
        region: region.map(str::to_string),
        items,
    }
}

pub struct AssistService;

impl AssistService {
    /// Smart fill. Unlike the other assistant features there is nothing to
    /// fall back to, so a failure surfaces as 502.
    #[instrument(skip(assistant, text), fields(text_len = text.len()))]
    pub async fn extract_request(
        assistant: &dyn AidAssistant,
        text: &str,
    ) -> Result<SmartFillResponse, AppError> {
        let extracted = ai::observe("extract_request", assistant.extract_request(text))
            .await
            .map_err(|e| {
                AppError::bad_gateway(anyhow::anyhow!("Could not extract request details: {}", e))
            })?;

        Ok(normalize_extraction(extracted))
    }

    /// Keyword suggestions for one item; empty when the assistant fails.
    #[instrument(skip(assistant))]
    pub async fn suggest_keywords(
        assistant: &dyn AidAssistant,
        name: &str,
        category: AidCategory,
    ) -> KeywordSuggestionResponse {
        let keywords = ai::observe(
            "generate_keywords",
            assistant.generate_keywords(name.trim(), category),
        )
        .await
        .map(|keywords| clean_keywords(keywords, MAX_SUGGESTED_KEYWORDS))
        .unwrap_or_default();

        KeywordSuggestionResponse { keywords }
    }
}
