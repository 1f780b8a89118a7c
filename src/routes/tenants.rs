use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    dto::tenants::{RegisterTenantRequest, TenantList, TenantSearchQuery},
    error::AppResult,
    response::ApiResponse,
    services::tenant_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_tenant))
        .route("/search", get(search_tenants))
}

#[utoipa::path(
    post,
    path = "/api/tenants",
    request_body = RegisterTenantRequest,
    responses(
        (status = 200, description = "Tenant registered, or duplicate name", body = ApiResponse<Value>),
        (status = 400, description = "Missing name"),
    ),
    tag = "Tenants"
)]
pub async fn register_tenant(
    State(state): State<AppState>,
    Json(payload): Json<RegisterTenantRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = tenant_service::register_tenant(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/tenants/search",
    params(
        ("q" = String, Query, description = "Name prefix to search for"),
    ),
    responses(
        (status = 200, description = "Tenants whose name starts with the term", body = ApiResponse<TenantList>),
    ),
    tag = "Tenants"
)]
pub async fn search_tenants(
    State(state): State<AppState>,
    Query(query): Query<TenantSearchQuery>,
) -> AppResult<Json<ApiResponse<TenantList>>> {
    let resp = tenant_service::search_tenants(&state, query).await?;
    Ok(Json(resp))
}
