use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterAdminRequest {
    pub tenant: Option<String>,
    pub admin_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckPasswordRequest {
    pub tenant: Option<String>,
    pub password: Option<String>,
}

/// Shared body for partner, customer, and delivery registration.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterMemberRequest {
    pub tenant: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}
