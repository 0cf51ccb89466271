use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::PaginationParams;
use crate::models::{ApiDefinition, ApiStatus, HttpMethod};
use crate::services::{ApiForm, FormPatch, ListQuery, PublishOutcome, RowActions, SortOrder};
use crate::state::AppState;
use crate::store::ApiStore;

// ============ Request/Response DTOs ============

/// Missing fields are reported by the form as required-field errors
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateApiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub business: Option<String>,
    /// One of GET, POST, PUT, DELETE
    pub method: Option<String>,
}

/// Omitted fields keep their current value
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateApiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub business: Option<String>,
    /// One of GET, POST, PUT, DELETE
    pub method: Option<String>,
}

impl From<CreateApiRequest> for FormPatch {
    fn from(r: CreateApiRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            business: r.business,
            method: r.method,
        }
    }
}

impl From<UpdateApiRequest> for FormPatch {
    fn from(r: UpdateApiRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            business: r.business,
            method: r.method,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub business: String,
    pub method: HttpMethod,
    pub status: ApiStatus,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl From<ApiDefinition> for ApiResponse {
    fn from(a: ApiDefinition) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            business: a.business,
            method: a.method,
            status: a.status,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// A listing table row: the record plus how the console renders it
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiRowResponse {
    #[serde(flatten)]
    pub api: ApiResponse,
    pub method_color: String,
    pub status_color: String,
    pub actions: RowActions,
}

impl From<ApiDefinition> for ApiRowResponse {
    fn from(a: ApiDefinition) -> Self {
        Self {
            method_color: a.method.tag_color().to_string(),
            status_color: a.status.tag_color().to_string(),
            actions: RowActions::for_record(&a),
            api: a.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiListResponse {
    pub data: Vec<ApiRowResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListApisParams {
    /// Case-insensitive match against name or business
    pub q: Option<String>,
    /// Column to sort by; store order when absent
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
}

impl ListApisParams {
    fn into_query(self) -> ListQuery {
        let pagination = PaginationParams {
            limit: self.limit,
            offset: self.offset,
        };
        ListQuery {
            query: self.q.unwrap_or_default(),
            name_sort: self
                .sort
                .map(|SortField::Name| self.order.unwrap_or_default()),
            limit: pagination.limit(),
            offset: pagination.offset(),
        }
    }
}

// ============ Handlers ============

/// Register a new API
#[utoipa::path(
    post,
    path = "/api/apis",
    request_body = CreateApiRequest,
    responses(
        (status = 201, description = "API created successfully", body = ApiResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "APIs"
)]
pub async fn create_api(
    State(state): State<AppState>,
    Json(payload): Json<CreateApiRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    let mut form = ApiForm::new();
    form.open_create();
    form.fill(payload.into())?;
    let submission = form.submit()?;

    let api = state.store.submit(submission).await?;
    Ok((StatusCode::CREATED, Json(api.into())))
}

/// List APIs, filtered, optionally sorted by name, one page at a time
#[utoipa::path(
    get,
    path = "/api/apis",
    params(ListApisParams),
    responses(
        (status = 200, description = "List of APIs", body = ApiListResponse)
    ),
    tag = "APIs"
)]
pub async fn list_apis(
    State(state): State<AppState>,
    Query(params): Query<ListApisParams>,
) -> AppResult<Json<ApiListResponse>> {
    let query = params.into_query();
    let page = state.store.list(&query).await?;

    Ok(Json(ApiListResponse {
        data: page.rows.into_iter().map(|a| a.into()).collect(),
        total: page.total,
        limit: query.limit,
        offset: query.offset,
    }))
}

/// View an API by ID
#[utoipa::path(
    get,
    path = "/api/apis/{id}",
    params(
        ("id" = Uuid, Path, description = "API ID")
    ),
    responses(
        (status = 200, description = "API details", body = ApiResponse),
        (status = 404, description = "API not found")
    ),
    tag = "APIs"
)]
pub async fn view_api(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse>> {
    let api = state.store.get(id).await?;
    tracing::debug!(api = ?api, "Viewing API");
    Ok(Json(api.into()))
}

/// Edit an API
#[utoipa::path(
    put,
    path = "/api/apis/{id}",
    params(
        ("id" = Uuid, Path, description = "API ID")
    ),
    request_body = UpdateApiRequest,
    responses(
        (status = 200, description = "API updated successfully", body = ApiResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "API not found")
    ),
    tag = "APIs"
)]
pub async fn update_api(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApiRequest>,
) -> AppResult<Json<ApiResponse>> {
    let api = state.store.edit(id, payload.into()).await?;
    Ok(Json(api.into()))
}

/// Publish an API. Publishing an already published API changes nothing.
#[utoipa::path(
    post,
    path = "/api/apis/{id}/publish",
    params(
        ("id" = Uuid, Path, description = "API ID")
    ),
    responses(
        (status = 200, description = "API published", body = ApiResponse),
        (status = 404, description = "API not found")
    ),
    tag = "APIs"
)]
pub async fn publish_api(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse>> {
    let outcome = state.store.publish(id).await?;
    if let PublishOutcome::AlreadyPublished(_) = outcome {
        tracing::debug!(api_id = %id, "Publish requested for an already published API");
    }
    Ok(Json(outcome.into_record().into()))
}
