use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::orders::{ConfirmOrderRequest, ConfirmOrderResponse},
    error::AppResult,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/confirm", post(confirm_order))
}

#[utoipa::path(
    post,
    path = "/api/orders/confirm",
    request_body = ConfirmOrderRequest,
    responses(
        (status = 200, description = "Order confirmed with per-partner notifications; no_items when the order is empty; not_found when it does not exist", body = ApiResponse<ConfirmOrderResponse>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Orders"
)]
pub async fn confirm_order(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmOrderRequest>,
) -> AppResult<Json<ApiResponse<ConfirmOrderResponse>>> {
    let resp = order_service::confirm_order(&state, payload).await?;
    Ok(Json(resp))
}
