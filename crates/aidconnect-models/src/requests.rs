//! Aid request domain models and DTOs.
//!
//! An [`AidRequest`] is one beneficiary submission listing one or more
//! [`AidItem`]s. Its [`RequestStatus`] is never set by clients; the engine
//! crate derives it from the item quantities.

use aidconnect_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::{
    Database, Decode, Encode, FromRow, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
    types::Json,
};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::geography;
use crate::ids::RequestId;
use crate::value_types::{Nic, PhoneNumber};

// ============================================================================
// AidCategory
// ============================================================================

/// Kind of aid an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AidCategory {
    Food,
    Water,
    #[serde(rename = "Medical Supplies", alias = "Medical")]
    MedicalSupplies,
    Shelter,
    Clothing,
    Hygiene,
    Other,
}

impl AidCategory {
    pub const ALL: [AidCategory; 7] = [
        Self::Food,
        Self::Water,
        Self::MedicalSupplies,
        Self::Shelter,
        Self::Clothing,
        Self::Hygiene,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Water => "Water",
            Self::MedicalSupplies => "Medical Supplies",
            Self::Shelter => "Shelter",
            Self::Clothing => "Clothing",
            Self::Hygiene => "Hygiene",
            Self::Other => "Other",
        }
    }

    /// Parses free text such as assistant output, falling back to `Other`.
    pub fn from_label_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Other)
    }
}

impl fmt::Display for AidCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AidCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "food" => Ok(Self::Food),
            "water" => Ok(Self::Water),
            "medical supplies" | "medical" => Ok(Self::MedicalSupplies),
            "shelter" => Ok(Self::Shelter),
            "clothing" => Ok(Self::Clothing),
            "hygiene" => Ok(Self::Hygiene),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown aid category '{}'", s.trim())),
        }
    }
}

// ============================================================================
// RequestStatus
// ============================================================================

/// Fulfilment state of a whole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    Pending,
    #[serde(rename = "Partially Fulfilled")]
    PartiallyFulfilled,
    Fulfilled,
}

impl RequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::PartiallyFulfilled => "Partially Fulfilled",
            Self::Fulfilled => "Fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "partially fulfilled" => Ok(Self::PartiallyFulfilled),
            "fulfilled" => Ok(Self::Fulfilled),
            _ => Err(format!("unknown request status '{}'", s.trim())),
        }
    }
}

// Stored as TEXT using the display labels.
impl Type<sqlx::Postgres> for RequestStatus {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for RequestStatus {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for RequestStatus {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as Decode<'r, sqlx::Postgres>>::decode(value)?;
        raw.parse().map_err(Into::into)
    }
}

impl PgHasArrayType for RequestStatus {
    fn array_type_info() -> PgTypeInfo {
        <String as PgHasArrayType>::array_type_info()
    }
}

// ============================================================================
// Entities
// ============================================================================

/// One requested line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AidItem {
    /// Unique within the owning request.
    pub id: String,
    pub name: String,
    pub category: AidCategory,
    pub quantity_needed: u32,
    #[serde(default)]
    pub quantity_received: u32,
    pub unit: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl AidItem {
    /// Quantity still outstanding. Never negative, even for unclamped data.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.quantity_needed.saturating_sub(self.quantity_received)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AidRequest {
    pub id: RequestId,
    pub nic: String,
    pub full_name: String,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_contact_number: Option<String>,
    /// Composite `"District - Region"` key.
    pub location: String,
    pub items: Vec<AidItem>,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

impl AidRequest {
    pub fn item(&self, item_id: &str) -> Option<&AidItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Row shape of the `aid_requests` table.
#[derive(Debug, FromRow)]
pub struct AidRequestRow {
    pub id: RequestId,
    pub nic: String,
    pub full_name: String,
    pub contact_number: String,
    pub extra_contact_number: Option<String>,
    pub location: String,
    pub items: Json<Vec<AidItem>>,
    pub status: RequestStatus,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<AidRequestRow> for AidRequest {
    fn from(row: AidRequestRow) -> Self {
        Self {
            id: row.id,
            nic: row.nic,
            full_name: row.full_name,
            contact_number: row.contact_number,
            extra_contact_number: row.extra_contact_number,
            location: row.location,
            items: row.items.0,
            status: row.status,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<AidRequest> for AidRequestRow {
    fn from(request: AidRequest) -> Self {
        Self {
            id: request.id,
            nic: request.nic,
            full_name: request.full_name,
            contact_number: request.contact_number,
            extra_contact_number: request.extra_contact_number,
            location: request.location,
            items: Json(request.items),
            status: request.status,
            notes: request.notes,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

// ============================================================================
// Submission DTOs
// ============================================================================

fn required(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(message))
}

fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required("Full Name is required"));
    }
    Ok(())
}

fn validate_nic(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required("NIC / ID Number is required"));
    }
    Nic::new(value).map(|_| ()).map_err(|_| {
        ValidationError::new("nic")
            .with_message(Cow::Borrowed("Invalid NIC. Must be 12 digits or 9 digits + V/X."))
    })
}

fn validate_contact_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required("Contact Number is required"));
    }
    validate_phone(value)
}

fn validate_extra_contact_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_phone(value)
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    PhoneNumber::new(value).map(|_| ()).map_err(|_| {
        ValidationError::new("phone")
            .with_message(Cow::Borrowed("Please enter a valid phone number (min 9 digits)"))
    })
}

fn validate_district(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required("District is required"));
    }
    if geography::regions_of(value.trim()).is_none() {
        return Err(ValidationError::new("district").with_message(Cow::Borrowed("Unknown district")));
    }
    Ok(())
}

fn validate_region(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required("Region is required"));
    }
    Ok(())
}

fn validate_item_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required("Item name is required"));
    }
    Ok(())
}

fn validate_request(dto: &CreateAidRequestDto) -> Result<(), ValidationError> {
    let district = dto.district.trim();
    let region = dto.region.trim();
    if geography::regions_of(district).is_some()
        && !region.is_empty()
        && !geography::is_valid(district, region)
    {
        return Err(ValidationError::new("location").with_message(Cow::Owned(format!(
            "Region '{}' is not part of district '{}'",
            region, district
        ))));
    }

    let mut seen = HashSet::new();
    for id in dto.items.iter().filter_map(|item| item.explicit_id()) {
        if !seen.insert(id) {
            return Err(ValidationError::new("duplicate_item_id")
                .with_message(Cow::Owned(format!("Duplicate item id '{}'", id))));
        }
    }
    Ok(())
}

fn default_unit() -> String {
    "units".to_string()
}

/// One item of a new submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAidItemDto {
    /// Optional client-side id; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(
        custom(function = "validate_item_name"),
        length(max = 200, message = "Item name is too long")
    )]
    pub name: String,
    pub category: AidCategory,
    #[validate(range(min = 1, message = "Quantity needed must be at least 1"))]
    pub quantity_needed: u32,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CreateAidItemDto {
    fn explicit_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    fn into_item(self, id: String) -> AidItem {
        let unit = self.unit.trim();
        AidItem {
            id,
            name: self.name.trim().to_string(),
            category: self.category,
            quantity_needed: self.quantity_needed,
            quantity_received: 0,
            unit: if unit.is_empty() {
                default_unit()
            } else {
                unit.to_string()
            },
            keywords: self
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Body of `POST /api/requests`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_request", skip_on_field_errors = false))]
pub struct CreateAidRequestDto {
    #[validate(
        custom(function = "validate_full_name"),
        length(max = 200, message = "Full Name is too long")
    )]
    pub full_name: String,
    #[validate(custom(function = "validate_nic"))]
    pub nic: String,
    #[validate(custom(function = "validate_contact_number"))]
    pub contact_number: String,
    #[serde(default)]
    #[validate(custom(function = "validate_extra_contact_number"))]
    pub extra_contact_number: Option<String>,
    #[validate(custom(function = "validate_district"))]
    pub district: String,
    #[validate(custom(function = "validate_region"))]
    pub region: String,
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<CreateAidItemDto>,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

impl CreateAidRequestDto {
    pub fn location(&self) -> String {
        geography::compose_location(self.district.trim(), self.region.trim())
    }

    /// Builds a fresh request. Every item starts with nothing received; the
    /// caller is expected to derive the status before storing it.
    pub fn into_request(self, id: RequestId, now_ms: i64) -> AidRequest {
        let location = self.location();

        let mut used: HashSet<String> = self
            .items
            .iter()
            .filter_map(|item| item.explicit_id().map(str::to_string))
            .collect();
        let mut next = 1usize;
        let items = self
            .items
            .into_iter()
            .map(|item| {
                let id = match item.explicit_id() {
                    Some(id) => id.to_string(),
                    None => loop {
                        let candidate = format!("item-{}", next);
                        next += 1;
                        if used.insert(candidate.clone()) {
                            break candidate;
                        }
                    },
                };
                item.into_item(id)
            })
            .collect();

        AidRequest {
            id,
            nic: self.nic.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            extra_contact_number: self
                .extra_contact_number
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            location,
            items,
            status: RequestStatus::Pending,
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

// ============================================================================
// Item quantity update
// ============================================================================

/// Reads a client-supplied quantity leniently.
///
/// Integers pass through, floats are truncated toward zero and numeric
/// strings are parsed the same way. Anything else reads as 0. The result is
/// still unclamped; callers clamp it against the item.
pub fn coerce_quantity(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(truncate_float))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(truncate_float))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn truncate_float(f: f64) -> i64 {
    // `as` saturates at the i64 bounds and maps NaN to 0
    f.trunc() as i64
}

/// Body of `PATCH /api/requests/{id}/items/{item_id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateItemQuantityDto {
    /// New received quantity. Accepts numbers or numeric strings.
    #[serde(default)]
    #[schema(value_type = i64, example = 5)]
    pub quantity_received: Value,
}

impl UpdateItemQuantityDto {
    pub fn quantity(&self) -> i64 {
        coerce_quantity(&self.quantity_received)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemQuantityResponse {
    pub request_id: RequestId,
    pub item_id: String,
    /// The stored, clamped quantity.
    pub quantity_received: u32,
    pub status: RequestStatus,
    pub updated_at: i64,
}

// ============================================================================
// Listing
// ============================================================================

fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(Some(false)),
        Some(v) => Err(serde::de::Error::custom(format!(
            "invalid boolean '{}'",
            v
        ))),
    }
}

fn deserialize_optional_status<'de, D>(deserializer: D) -> Result<Option<RequestStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Query parameters of `GET /api/requests`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RequestFilterParams {
    /// Case-insensitive identity match.
    pub nic: Option<String>,
    /// Exact composite location.
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<RequestStatus>,
    /// Excludes fulfilled requests when true.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub active_only: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedRequestsResponse {
    pub data: Vec<AidRequest>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_item() -> CreateAidItemDto {
        CreateAidItemDto {
            id: None,
            name: "Water Bottles".to_string(),
            category: AidCategory::Water,
            quantity_needed: 20,
            unit: "liters".to_string(),
            keywords: vec!["Drinking Water".to_string()],
        }
    }

    fn valid_dto() -> CreateAidRequestDto {
        CreateAidRequestDto {
            full_name: "Sarah Connor".to_string(),
            nic: "901234567V".to_string(),
            contact_number: "077-1234567".to_string(),
            extra_contact_number: None,
            district: "Colombo".to_string(),
            region: "Dehiwala".to_string(),
            items: vec![valid_item()],
            notes: None,
        }
    }

    fn has_field_error(dto: &CreateAidRequestDto, field: &str) -> bool {
        dto.validate()
            .err()
            .is_some_and(|e| e.field_errors().contains_key(field))
    }

    #[test]
    fn test_category_labels_round_trip_through_serde() {
        for category in AidCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: AidCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_category_lossy_parse() {
        assert_eq!(AidCategory::from_label_lossy("medical supplies"), AidCategory::MedicalSupplies);
        assert_eq!(AidCategory::from_label_lossy(" FOOD "), AidCategory::Food);
        assert_eq!(AidCategory::from_label_lossy("Toys"), AidCategory::Other);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::PartiallyFulfilled).unwrap(),
            "\"Partially Fulfilled\""
        );
        assert_eq!("partially_fulfilled".parse::<RequestStatus>(), Ok(RequestStatus::PartiallyFulfilled));
        assert!("done".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_remaining_saturates() {
        let mut item = valid_dto().items.remove(0).into_item("a".into());
        item.quantity_received = 25;
        assert_eq!(item.remaining(), 0);
        item.quantity_received = 5;
        assert_eq!(item.remaining(), 15);
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut dto = valid_dto();
        dto.full_name = "   ".into();
        assert!(has_field_error(&dto, "full_name"));

        let mut dto = valid_dto();
        dto.nic = "".into();
        assert!(has_field_error(&dto, "nic"));

        let mut dto = valid_dto();
        dto.contact_number = "".into();
        assert!(has_field_error(&dto, "contact_number"));

        let mut dto = valid_dto();
        dto.region = "".into();
        assert!(has_field_error(&dto, "region"));
    }

    #[test]
    fn test_format_checks() {
        let mut dto = valid_dto();
        dto.nic = "12345".into();
        assert!(has_field_error(&dto, "nic"));

        let mut dto = valid_dto();
        dto.contact_number = "555-0101".into();
        assert!(has_field_error(&dto, "contact_number"));

        let mut dto = valid_dto();
        dto.extra_contact_number = Some("abc".into());
        assert!(has_field_error(&dto, "extra_contact_number"));

        let mut dto = valid_dto();
        dto.extra_contact_number = Some("  ".into());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_region_must_belong_to_district() {
        let mut dto = valid_dto();
        dto.region = "Peradeniya".into();
        let errors = dto.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));

        let mut dto = valid_dto();
        dto.district = "Atlantis".into();
        assert!(has_field_error(&dto, "district"));
    }

    #[test]
    fn test_items_rules() {
        let mut dto = valid_dto();
        dto.items.clear();
        assert!(has_field_error(&dto, "items"));

        let mut dto = valid_dto();
        dto.items[0].quantity_needed = 0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.items[0].name = " ".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        let mut a = valid_item();
        a.id = Some("x".into());
        let mut b = valid_item();
        b.id = Some("x".into());
        dto.items = vec![a, b];
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_into_request_builds_location_and_ids() {
        let mut dto = valid_dto();
        let mut explicit = valid_item();
        explicit.id = Some("item-1".into());
        dto.items = vec![valid_item(), explicit, valid_item()];
        dto.notes = Some("  ".into());

        let request = dto.into_request(RequestId::from_u128(1), 1_000);
        assert_eq!(request.location, "Colombo - Dehiwala");
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.created_at, 1_000);
        assert_eq!(request.updated_at, 1_000);
        assert_eq!(request.notes, None);

        let ids: Vec<&str> = request.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["item-2", "item-1", "item-3"]);
        assert!(request.items.iter().all(|i| i.quantity_received == 0));
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity(&json!(7)), 7);
        assert_eq!(coerce_quantity(&json!(-3)), -3);
        assert_eq!(coerce_quantity(&json!(4.9)), 4);
        assert_eq!(coerce_quantity(&json!("12")), 12);
        assert_eq!(coerce_quantity(&json!(" 3.7 ")), 3);
        assert_eq!(coerce_quantity(&json!("lots")), 0);
        assert_eq!(coerce_quantity(&json!(null)), 0);
        assert_eq!(coerce_quantity(&json!(true)), 0);
        assert_eq!(coerce_quantity(&json!(u64::MAX)), i64::MAX);
    }

    #[test]
    fn test_update_dto_missing_field_reads_zero() {
        let dto: UpdateItemQuantityDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.quantity(), 0);
    }

    #[test]
    fn test_filter_params_from_strings() {
        let params: RequestFilterParams = serde_json::from_value(json!({
            "status": "Partially Fulfilled",
            "active_only": "true",
            "limit": "5"
        }))
        .unwrap();
        assert_eq!(params.status, Some(RequestStatus::PartiallyFulfilled));
        assert_eq!(params.active_only, Some(true));
        assert_eq!(params.pagination.limit(), 5);
    }

    #[test]
    fn test_request_json_uses_snake_case() {
        let request = valid_dto().into_request(RequestId::from_u128(2), 5);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("full_name").is_some());
        assert!(value["items"][0].get("quantity_needed").is_some());
        assert_eq!(value["status"], "Pending");
        assert!(value.get("notes").is_none());
    }
}
