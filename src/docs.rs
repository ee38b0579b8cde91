use aidconnect_core::{ErrorResponse, PaginationMeta};
use aidconnect_models::{
    AidCategory, AidItem, AidRequest, CategoryNeed, CreateAidItemDto, CreateAidRequestDto,
    DashboardStats, DashboardStatsRequest, DistrictRegions, ExtractTextDto,
    IgnoredKeywordsResponse, ItemQuantityResponse, KeywordFrequency, KeywordSuggestionDto,
    KeywordSuggestionResponse, LocationNeed, LocationStat, LocationsResponse,
    PaginatedRequestsResponse, RequestId, RequestStatus, SituationReportResponse,
    SmartFillResponse, UpdateItemQuantityDto,
};
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AidConnect API",
        description = "Disaster-relief aid request coordination: submissions, fulfilment tracking and a needs dashboard."
    ),
    paths(
        crate::modules::requests::controller::create_request,
        crate::modules::requests::controller::list_requests,
        crate::modules::requests::controller::get_request,
        crate::modules::requests::controller::delete_request,
        crate::modules::requests::controller::get_requests_by_nic,
        crate::modules::requests::controller::update_item_quantity,
        crate::modules::dashboard::controller::get_dashboard,
        crate::modules::dashboard::controller::get_ignored_keywords,
        crate::modules::dashboard::controller::compute_stats,
        crate::modules::dashboard::controller::get_situation_report,
        crate::modules::assist::controller::extract_request,
        crate::modules::assist::controller::suggest_keywords,
        crate::modules::locations::controller::get_locations,
    ),
    components(
        schemas(
            RequestId,
            AidCategory,
            RequestStatus,
            AidItem,
            AidRequest,
            CreateAidItemDto,
            CreateAidRequestDto,
            UpdateItemQuantityDto,
            ItemQuantityResponse,
            PaginatedRequestsResponse,
            PaginationMeta,
            DashboardStats,
            CategoryNeed,
            LocationNeed,
            LocationStat,
            KeywordFrequency,
            DashboardStatsRequest,
            IgnoredKeywordsResponse,
            SituationReportResponse,
            ExtractTextDto,
            SmartFillResponse,
            KeywordSuggestionDto,
            KeywordSuggestionResponse,
            DistrictRegions,
            LocationsResponse,
            ErrorResponse,
        )
    ),
    modifiers(&VersionAddon),
    tags(
        (name = "Requests", description = "Aid request submission and fulfilment tracking"),
        (name = "Dashboard", description = "Aggregated needs for donors and coordinators"),
        (name = "Assist", description = "AI-assisted form filling (rate limited)"),
        (name = "Locations", description = "District and region reference data")
    )
)]
pub struct ApiDoc;

/// Stamps the document with the crate version.
struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut OpenApiSpec) {
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
