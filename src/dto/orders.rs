use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfirmOrderRequest {
    pub tenant: Option<String>,
    pub customer: Option<String>,
    pub order_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfirmOrderResponse {
    pub order_id: String,
    /// Partners that received a notification, in name order.
    pub notified_partners: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnreadQuery {
    pub tenant: Option<String>,
    pub partner: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationDto {
    pub id: String,
    pub order_id: String,
    pub customer: String,
    pub item_ids: Vec<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkReadRequest {
    pub tenant: Option<String>,
    pub partner: Option<String>,
    pub notification_id: Option<String>,
}
