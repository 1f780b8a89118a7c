//! Preorder cart state machine: `no-active-order` → `draft` →
//! `orderconfirmed` (confirmation lives in `order_service`).
//!
//! A customer holds at most one draft order, cached on the customer
//! record as `active_order_id`. Two concurrent first requests can each
//! open a draft before either pointer write lands; the later write wins
//! and the earlier order is orphaned. This race is accepted, same as a
//! stale pointer left by an out-of-band order deletion.

use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    audit::log_audit,
    dto::{
        MissingFields,
        cart::{
            ActiveOrderRequest, ActiveOrderResponse, AddItemRequest, AddItemResponse, ItemRef,
            QuantityResponse, RemoveItemResponse,
        },
    },
    error::{AppError, AppResult},
    models::{Customer, Order, OrderItem, OrderStatus},
    response::{ApiResponse, Meta},
    state::AppState,
    store::paths,
};

/// Returns the customer's draft order, creating the customer record and
/// a fresh draft as needed. After this call exactly one order is active
/// and it is in state `draft`; calling again returns the same order.
pub async fn active_order(
    state: &AppState,
    payload: ActiveOrderRequest,
) -> AppResult<ApiResponse<ActiveOrderResponse>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let customer = missing.require_str("customer", &payload.customer);
    missing.finish()?;

    let customer_path = paths::customer(&tenant, &customer);
    let customer_doc = state.store.get(&customer_path).await?;

    if customer_doc.is_none() {
        let record = Customer {
            name: customer.clone(),
            address: None,
            phone: None,
            password_hash: None,
            active_order_id: None,
            created_at: Utc::now(),
        };
        state
            .store
            .set(&customer_path, serde_json::to_value(&record)?, true)
            .await?;
    }

    // follow the cached pointer while it still resolves to an order
    if let Some(doc) = &customer_doc {
        if let Some(order_id) = doc.fields.get("active_order_id").and_then(Value::as_str) {
            if let Some(order_doc) = state
                .store
                .get(&paths::order(&tenant, &customer, order_id))
                .await?
            {
                let order: Order = order_doc.decode()?;
                return Ok(ApiResponse::success(
                    "OK",
                    ActiveOrderResponse {
                        order_id: order_id.to_string(),
                        order,
                    },
                    None,
                ));
            }
        }
    }

    // no pointer, or it went stale: open a fresh draft
    let order_id = Utc::now().timestamp_millis().to_string();
    let order = Order {
        status: OrderStatus::Draft,
        item_count: 0,
        created_at: Utc::now(),
        confirmed_at: None,
    };
    state
        .store
        .set(
            &paths::order(&tenant, &customer, &order_id),
            serde_json::to_value(&order)?,
            false,
        )
        .await?;
    state
        .store
        .update(&customer_path, json!({ "active_order_id": order_id }))
        .await?;

    Ok(ApiResponse::success(
        "Draft order created",
        ActiveOrderResponse { order_id, order },
        None,
    ))
}

pub async fn add_item(
    state: &AppState,
    payload: AddItemRequest,
) -> AppResult<ApiResponse<AddItemResponse>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let customer = missing.require_str("customer", &payload.customer);
    let order_id = missing.require_str("order_id", &payload.order_id);
    let product_name = missing.require_str("product_name", &payload.product_name);
    missing.finish()?;

    let order_path = paths::order(&tenant, &customer, &order_id);
    if state.store.get(&order_path).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let item = OrderItem {
        product_name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
        partner: payload.partner,
        quantity: 1,
        status: OrderStatus::Draft,
        created_at: Utc::now(),
    };
    let item_id = state
        .store
        .add(
            &paths::items(&tenant, &customer, &order_id),
            serde_json::to_value(&item)?,
        )
        .await?;
    state.store.adjust_field(&order_path, "item_count", 1, 0).await?;

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&tenant),
        "cart_add",
        Some("items"),
        Some(json!({ "order_id": order_id, "item_id": item_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Item added",
        AddItemResponse { item_id },
        None,
    ))
}

pub async fn increase_quantity(
    state: &AppState,
    payload: ItemRef,
) -> AppResult<ApiResponse<QuantityResponse>> {
    change_quantity(state, payload, 1).await
}

pub async fn decrease_quantity(
    state: &AppState,
    payload: ItemRef,
) -> AppResult<ApiResponse<QuantityResponse>> {
    change_quantity(state, payload, -1).await
}

/// Quantity changes go through the store's atomic adjust with a floor of
/// 1 unit, so concurrent increments and decrements never lose updates
/// and an item can never drop below a single unit.
async fn change_quantity(
    state: &AppState,
    payload: ItemRef,
    delta: i64,
) -> AppResult<ApiResponse<QuantityResponse>> {
    let (tenant, customer, order_id, item_id) = validate_item_ref(&payload)?;

    let quantity = state
        .store
        .adjust_field(
            &paths::item(&tenant, &customer, &order_id, &item_id),
            "quantity",
            delta,
            1,
        )
        .await?;

    Ok(ApiResponse::success(
        "Quantity updated",
        QuantityResponse { item_id, quantity },
        None,
    ))
}

pub async fn remove_item(
    state: &AppState,
    payload: ItemRef,
) -> AppResult<ApiResponse<RemoveItemResponse>> {
    let (tenant, customer, order_id, item_id) = validate_item_ref(&payload)?;

    let item_path = paths::item(&tenant, &customer, &order_id, &item_id);
    if state.store.get(&item_path).await?.is_none() {
        return Err(AppError::NotFound);
    }
    state.store.delete(&item_path).await?;

    let item_count = state
        .store
        .adjust_field(&paths::order(&tenant, &customer, &order_id), "item_count", -1, 0)
        .await?;

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&tenant),
        "cart_remove",
        Some("items"),
        Some(json!({ "order_id": order_id, "item_id": item_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Item removed",
        RemoveItemResponse { item_count },
        Some(Meta::empty()),
    ))
}

fn validate_item_ref(payload: &ItemRef) -> AppResult<(String, String, String, String)> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let customer = missing.require_str("customer", &payload.customer);
    let order_id = missing.require_str("order_id", &payload.order_id);
    let item_id = missing.require_str("item_id", &payload.item_id);
    missing.finish()?;
    Ok((tenant, customer, order_id, item_id))
}
