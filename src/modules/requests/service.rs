use aidconnect_core::{AppError, PaginationMeta};
use aidconnect_engine::{apply_received, refresh_status};
use aidconnect_models::{
    AidRequest, AidRequestRow, CreateAidRequestDto, ItemQuantityResponse,
    PaginatedRequestsResponse, RequestFilterParams, RequestId, RequestStatus,
    UpdateItemQuantityDto,
};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::metrics;

const REQUEST_COLUMNS: &str = "id, nic, full_name, contact_number, extra_contact_number, \
     location, items, status, notes, created_at, updated_at";

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Aid request not found"))
}

/// Appends the WHERE clause shared by the list and count queries.
fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filters: &'a RequestFilterParams) {
    builder.push(" WHERE TRUE");

    if let Some(nic) = filters.nic.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        builder.push(" AND LOWER(nic) = LOWER(").push_bind(nic).push(")");
    }
    if let Some(location) = filters.location.as_deref().filter(|l| !l.is_empty()) {
        builder.push(" AND location = ").push_bind(location);
    }
    if let Some(status) = filters.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if filters.active_only.unwrap_or(false) {
        builder
            .push(" AND status <> ")
            .push_bind(RequestStatus::Fulfilled);
    }
}

pub struct RequestService;

impl RequestService {
    /// Stores a new submission. Nothing has been received yet, so the
    /// derived status is always `Pending`.
    #[instrument(skip(db, dto), fields(items = dto.items.len()))]
    pub async fn create_request(
        db: &PgPool,
        dto: CreateAidRequestDto,
    ) -> Result<AidRequest, AppError> {
        let mut request = dto.into_request(RequestId::new(), now_ms());
        refresh_status(&mut request);

        Self::persist_request(db, &request).await?;

        metrics::track_request_created(request.items.len());
        tracing::info!(request_id = %request.id, location = %request.location, "Aid request created");

        Ok(request)
    }

    /// Upserts a request by id.
    #[instrument(skip(executor, request), fields(request_id = %request.id))]
    pub async fn persist_request<'e, E>(executor: E, request: &AidRequest) -> Result<(), AppError>
    where
        E: sqlx::postgres::PgExecutor<'e>,
    {
        sqlx::query(
            r#"INSERT INTO aid_requests
                (id, nic, full_name, contact_number, extra_contact_number,
                 location, items, status, notes, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               ON CONFLICT (id) DO UPDATE SET
                 nic = EXCLUDED.nic,
                 full_name = EXCLUDED.full_name,
                 contact_number = EXCLUDED.contact_number,
                 extra_contact_number = EXCLUDED.extra_contact_number,
                 location = EXCLUDED.location,
                 items = EXCLUDED.items,
                 status = EXCLUDED.status,
                 notes = EXCLUDED.notes,
                 updated_at = EXCLUDED.updated_at"#,
        )
        .bind(request.id)
        .bind(&request.nic)
        .bind(&request.full_name)
        .bind(&request.contact_number)
        .bind(&request.extra_contact_number)
        .bind(&request.location)
        .bind(Json(&request.items))
        .bind(request.status)
        .bind(&request.notes)
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Every stored request in submission order, the order aggregation
    /// relies on for tie-breaks.
    #[instrument(skip(db))]
    pub async fn load_all_requests(db: &PgPool) -> Result<Vec<AidRequest>, AppError> {
        let rows = sqlx::query_as::<_, AidRequestRow>(&format!(
            "SELECT {} FROM aid_requests ORDER BY created_at ASC, id ASC",
            REQUEST_COLUMNS
        ))
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(AidRequest::from).collect())
    }

    /// Requests filed under an identity, newest first. Matching ignores case.
    #[instrument(skip(db))]
    pub async fn find_requests_by_identity(
        db: &PgPool,
        nic: &str,
    ) -> Result<Vec<AidRequest>, AppError> {
        let rows = sqlx::query_as::<_, AidRequestRow>(&format!(
            "SELECT {} FROM aid_requests WHERE LOWER(nic) = LOWER($1) \
             ORDER BY created_at DESC, id DESC",
            REQUEST_COLUMNS
        ))
        .bind(nic.trim())
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(AidRequest::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_request(db: &PgPool, id: RequestId) -> Result<AidRequest, AppError> {
        let row = sqlx::query_as::<_, AidRequestRow>(&format!(
            "SELECT {} FROM aid_requests WHERE id = $1",
            REQUEST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)?;

        Ok(row.into())
    }

    #[instrument(skip(db))]
    pub async fn list_requests(
        db: &PgPool,
        filters: RequestFilterParams,
    ) -> Result<PaginatedRequestsResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM aid_requests");
        push_filters(&mut count_query, &filters);
        let total: i64 = count_query.build_query_scalar().fetch_one(db).await?;

        let mut data_query =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM aid_requests", REQUEST_COLUMNS));
        push_filters(&mut data_query, &filters);
        data_query
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = data_query
            .build_query_as::<AidRequestRow>()
            .fetch_all(db)
            .await?;

        Ok(PaginatedRequestsResponse {
            data: rows.into_iter().map(AidRequest::from).collect(),
            meta: PaginationMeta::from_params(total, &filters.pagination),
        })
    }

    #[instrument(skip(db))]
    pub async fn delete_request(db: &PgPool, id: RequestId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM aid_requests WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        metrics::track_request_deleted();
        Ok(())
    }

    /// Records a received quantity for one item and re-derives the status.
    ///
    /// The row is locked for the read-modify-write so concurrent updates to
    /// different items of the same request do not overwrite each other.
    #[instrument(skip(db, dto))]
    pub async fn update_item_quantity(
        db: &PgPool,
        id: RequestId,
        item_id: &str,
        dto: UpdateItemQuantityDto,
    ) -> Result<ItemQuantityResponse, AppError> {
        let mut tx = db.begin().await?;

        let mut request: AidRequest = sqlx::query_as::<_, AidRequestRow>(&format!(
            "SELECT {} FROM aid_requests WHERE id = $1 FOR UPDATE",
            REQUEST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(not_found)?
        .into();

        let update = apply_received(&mut request, item_id, dto.quantity(), now_ms())
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Item not found in this request")))?;

        Self::persist_request(&mut *tx, &request).await?;
        tx.commit().await?;

        metrics::track_item_quantity_updated(update.status);
        tracing::info!(
            request_id = %id,
            item_id = %update.item_id,
            quantity_received = update.quantity_received,
            status = %update.status,
            "Item quantity updated"
        );

        Ok(ItemQuantityResponse {
            request_id: id,
            item_id: update.item_id,
            quantity_received: update.quantity_received,
            status: update.status,
            updated_at: request.updated_at,
        })
    }
}
