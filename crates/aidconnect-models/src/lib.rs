//! # AidConnect Models
//!
//! Domain models and DTOs for the AidConnect API.
//!
//! # Modules
//!
//! - [`requests`]: Aid requests, their items, the derived status and submission DTOs
//! - [`dashboard`]: The aggregated dashboard snapshot and its query DTOs
//! - [`assist`]: Smart-fill and keyword suggestion DTOs
//! - [`geography`]: The closed district → region table behind request locations
//! - [`value_types`]: Validated NIC and phone number newtypes
//! - [`ids`]: Strongly-typed ID newtypes
//!
//! # Example
//!
//! ```ignore
//! use aidconnect_models::{AidCategory, AidItem, RequestStatus};
//! use aidconnect_models::geography;
//!
//! assert!(geography::is_valid("Colombo", "Dehiwala"));
//! let location = geography::compose_location("Colombo", "Dehiwala");
//! ```

pub mod assist;
pub mod dashboard;
pub mod geography;
pub mod ids;
pub mod requests;
pub mod value_types;

pub use ids::RequestId;

pub use requests::{
    AidCategory, AidItem, AidRequest, AidRequestRow, CreateAidItemDto, CreateAidRequestDto,
    ItemQuantityResponse, PaginatedRequestsResponse, RequestFilterParams, RequestStatus,
    UpdateItemQuantityDto, coerce_quantity,
};

pub use dashboard::{
    CategoryNeed, DashboardParams, DashboardStats, DashboardStatsRequest, IgnoredKeywordsResponse,
    KeywordFrequency, LocationNeed, LocationStat, SituationEntry, SituationItem,
    SituationReportResponse,
};

pub use assist::{
    ExtractTextDto, KeywordSuggestionDto, KeywordSuggestionResponse, SmartFillResponse,
};

pub use geography::{DistrictRegions, LocationsResponse};

pub use value_types::{Nic, PhoneNumber, ValueTypeError};
