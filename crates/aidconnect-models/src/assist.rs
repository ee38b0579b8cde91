//! Smart-fill and keyword suggestion DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::requests::{AidCategory, CreateAidItemDto};

/// Body of `POST /api/assist/extract`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ExtractTextDto {
    /// Free-form description, e.g. a pasted message.
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
}

/// A partially filled submission recovered from free text.
///
/// Every field is optional; the client shows it for review before submitting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SmartFillResponse {
    pub full_name: Option<String>,
    pub nic: Option<String>,
    pub contact_number: Option<String>,
    pub notes: Option<String>,
    /// Canonical district spelling, when one was recognised.
    pub district: Option<String>,
    /// Only set when it belongs to `district`.
    pub region: Option<String>,
    pub items: Vec<CreateAidItemDto>,
}

/// Body of `POST /api/assist/keywords`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct KeywordSuggestionDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub category: AidCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct KeywordSuggestionResponse {
    pub keywords: Vec<String>,
}
