use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::browse::{
        ImagePage, ImagesQuery, ModeList, ModesQuery, ShopList, ShopsQuery, SignedImageQuery,
        SignedImageResponse,
    },
    error::AppResult,
    response::ApiResponse,
    services::browse_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shops", get(shops))
        .route("/modes", get(modes))
        .route("/images", get(images))
        .route("/signed_image", get(signed_image))
}

#[utoipa::path(
    get,
    path = "/api/browse/shops",
    params(
        ("tenant" = String, Query, description = "Tenant name"),
    ),
    responses(
        (status = 200, description = "Shop folders under the tenant", body = ApiResponse<ShopList>),
        (status = 400, description = "Missing tenant"),
    ),
    tag = "Browse"
)]
pub async fn shops(
    State(state): State<AppState>,
    Query(query): Query<ShopsQuery>,
) -> AppResult<Json<ApiResponse<ShopList>>> {
    let resp = browse_service::shops(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/browse/modes",
    params(
        ("tenant" = String, Query, description = "Tenant name"),
        ("shop" = String, Query, description = "Shop name"),
    ),
    responses(
        (status = 200, description = "Mode folders under the shop", body = ApiResponse<ModeList>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Browse"
)]
pub async fn modes(
    State(state): State<AppState>,
    Query(query): Query<ModesQuery>,
) -> AppResult<Json<ApiResponse<ModeList>>> {
    let resp = browse_service::modes(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/browse/images",
    params(
        ("tenant" = String, Query, description = "Tenant name"),
        ("shop" = String, Query, description = "Shop name"),
        ("mode" = String, Query, description = "Sales mode"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("page_size" = Option<i64>, Query, description = "Images per page, default 20"),
    ),
    responses(
        (status = 200, description = "One page of image URLs under the mode", body = ApiResponse<ImagePage>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Browse"
)]
pub async fn images(
    State(state): State<AppState>,
    Query(query): Query<ImagesQuery>,
) -> AppResult<Json<ApiResponse<ImagePage>>> {
    let resp = browse_service::images(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/browse/signed_image",
    params(
        ("tenant" = String, Query, description = "Tenant name"),
        ("shop" = String, Query, description = "Shop name"),
        ("mode" = String, Query, description = "Sales mode"),
        ("name" = String, Query, description = "Image object name"),
    ),
    responses(
        (status = 200, description = "Short-lived signed URL for the image", body = ApiResponse<SignedImageResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Browse"
)]
pub async fn signed_image(
    State(state): State<AppState>,
    Query(query): Query<SignedImageQuery>,
) -> AppResult<Json<ApiResponse<SignedImageResponse>>> {
    let resp = browse_service::signed_image(&state, query).await?;
    Ok(Json(resp))
}
