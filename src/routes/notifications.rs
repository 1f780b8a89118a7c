use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    dto::orders::{MarkReadRequest, NotificationDto, UnreadQuery},
    error::AppResult,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unread", get(unread_notification))
        .route("/read", post(mark_notification_read))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    params(
        ("tenant" = String, Query, description = "Tenant name"),
        ("partner" = String, Query, description = "Partner name"),
    ),
    responses(
        (status = 200, description = "First unread notification, or not_found", body = ApiResponse<NotificationDto>),
    ),
    tag = "Notifications"
)]
pub async fn unread_notification(
    State(state): State<AppState>,
    Query(query): Query<UnreadQuery>,
) -> AppResult<Json<ApiResponse<NotificationDto>>> {
    let resp = order_service::unread_notification(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/notifications/read",
    request_body = MarkReadRequest,
    responses(
        (status = 200, description = "Notification marked read, or not_found", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Notifications"
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Json(payload): Json<MarkReadRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = order_service::mark_notification_read(&state, payload).await?;
    Ok(Json(resp))
}
