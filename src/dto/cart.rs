use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActiveOrderRequest {
    pub tenant: Option<String>,
    pub customer: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActiveOrderResponse {
    pub order_id: String,
    pub order: Order,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub tenant: Option<String>,
    pub customer: Option<String>,
    pub order_id: Option<String>,
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub partner: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddItemResponse {
    pub item_id: String,
}

/// Addresses one item of one order for quantity changes and removal.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemRef {
    pub tenant: Option<String>,
    pub customer: Option<String>,
    pub order_id: Option<String>,
    pub item_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuantityResponse {
    pub item_id: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveItemResponse {
    pub item_count: i64,
}
