use axum::{Json, Router, extract::State, routing::post};
use serde_json::Value;

use crate::{
    dto::auth::{CheckPasswordRequest, RegisterAdminRequest, RegisterMemberRequest},
    error::AppResult,
    response::ApiResponse,
    services::auth_service::{self, MemberRole},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register_admin", post(register_admin))
        .route("/check_password", post(check_password))
        .route("/register_partner", post(register_partner))
        .route("/register_customer", post(register_customer))
        .route("/register_delivery", post(register_delivery))
}

#[utoipa::path(
    post,
    path = "/api/auth/register_admin",
    request_body = RegisterAdminRequest,
    responses(
        (status = 200, description = "Admin registered, or tenant not found", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Auth"
)]
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAdminRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = auth_service::register_admin(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/check_password",
    request_body = CheckPasswordRequest,
    responses(
        (status = 200, description = "success, not_found, or wrong_password", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Auth"
)]
pub async fn check_password(
    State(state): State<AppState>,
    Json(payload): Json<CheckPasswordRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = auth_service::check_password(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/register_partner",
    request_body = RegisterMemberRequest,
    responses(
        (status = 200, description = "Partner registered, duplicate, or tenant not found", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Auth"
)]
pub async fn register_partner(
    State(state): State<AppState>,
    Json(payload): Json<RegisterMemberRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = auth_service::register_member(&state, MemberRole::Partner, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/register_customer",
    request_body = RegisterMemberRequest,
    responses(
        (status = 200, description = "Customer registered, duplicate, or tenant not found", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Auth"
)]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterMemberRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = auth_service::register_member(&state, MemberRole::Customer, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/register_delivery",
    request_body = RegisterMemberRequest,
    responses(
        (status = 200, description = "Delivery worker registered, duplicate, or tenant not found", body = ApiResponse<Value>),
        (status = 400, description = "Missing fields"),
    ),
    tag = "Auth"
)]
pub async fn register_delivery(
    State(state): State<AppState>,
    Json(payload): Json<RegisterMemberRequest>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let resp = auth_service::register_member(&state, MemberRole::Delivery, payload).await?;
    Ok(Json(resp))
}
