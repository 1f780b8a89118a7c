use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::cart::{
        ActiveOrderRequest, ActiveOrderResponse, AddItemRequest, AddItemResponse, ItemRef,
        QuantityResponse, RemoveItemResponse,
    },
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/active", post(active_order))
        .route("/items", post(add_item))
        .route("/items/increase", post(increase_quantity))
        .route("/items/decrease", post(decrease_quantity))
        .route("/items/remove", post(remove_item))
}

#[utoipa::path(
    post,
    path = "/api/cart/active",
    request_body = ActiveOrderRequest,
    responses(
        (status = 200, description = "The customer's draft order, created if needed", body = ApiResponse<ActiveOrderResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Cart"
)]
pub async fn active_order(
    State(state): State<AppState>,
    Json(payload): Json<ActiveOrderRequest>,
) -> AppResult<Json<ApiResponse<ActiveOrderResponse>>> {
    let resp = cart_service::active_order(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item added with quantity 1, or order not found", body = ApiResponse<AddItemResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Cart"
)]
pub async fn add_item(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<ApiResponse<AddItemResponse>>> {
    let resp = cart_service::add_item(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/items/increase",
    request_body = ItemRef,
    responses(
        (status = 200, description = "New quantity, or item not found", body = ApiResponse<QuantityResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Cart"
)]
pub async fn increase_quantity(
    State(state): State<AppState>,
    Json(payload): Json<ItemRef>,
) -> AppResult<Json<ApiResponse<QuantityResponse>>> {
    let resp = cart_service::increase_quantity(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/items/decrease",
    request_body = ItemRef,
    responses(
        (status = 200, description = "New quantity (floored at 1), or item not found", body = ApiResponse<QuantityResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Cart"
)]
pub async fn decrease_quantity(
    State(state): State<AppState>,
    Json(payload): Json<ItemRef>,
) -> AppResult<Json<ApiResponse<QuantityResponse>>> {
    let resp = cart_service::decrease_quantity(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/items/remove",
    request_body = ItemRef,
    responses(
        (status = 200, description = "Item removed, or item not found", body = ApiResponse<RemoveItemResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Cart"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemRef>,
) -> AppResult<Json<ApiResponse<RemoveItemResponse>>> {
    let resp = cart_service::remove_item(&state, payload).await?;
    Ok(Json(resp))
}
