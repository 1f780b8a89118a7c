use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    dto::products::{ProductList, ProductListQuery, SaveProductRequest},
    error::AppResult,
    response::ApiResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(save_product).get(list_products))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = SaveProductRequest,
    responses(
        (status = 200, description = "Product saved", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Products"
)]
pub async fn save_product(
    State(state): State<AppState>,
    Json(payload): Json<SaveProductRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = product_service::save_product(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("tenant" = String, Query, description = "Tenant name"),
        ("partner" = String, Query, description = "Partner name"),
        ("mode" = String, Query, description = "Sales mode"),
    ),
    responses(
        (status = 200, description = "Products under the mode", body = ApiResponse<ProductList>),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state, query).await?;
    Ok(Json(resp))
}
