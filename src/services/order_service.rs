//! Draft-to-confirmed transition and the per-partner notification fan-out.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    audit::log_audit,
    dto::{
        MissingFields,
        orders::{
            ConfirmOrderRequest, ConfirmOrderResponse, MarkReadRequest, NotificationDto,
            UnreadQuery,
        },
    },
    error::{AppError, AppResult},
    models::{OrderStatus, PartnerNotification},
    response::{ApiResponse, Meta},
    state::AppState,
    store::{Filter, paths},
};

/// Confirms the order and notifies every partner that owns at least one
/// of its items. An order with no items is reported as `no_items` before
/// anything is written: the draft stays a draft and the customer keeps
/// their active pointer.
pub async fn confirm_order(
    state: &AppState,
    payload: ConfirmOrderRequest,
) -> AppResult<ApiResponse<ConfirmOrderResponse>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let customer = missing.require_str("customer", &payload.customer);
    let order_id = missing.require_str("order_id", &payload.order_id);
    missing.finish()?;

    let order_path = paths::order(&tenant, &customer, &order_id);
    if state.store.get(&order_path).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let item_docs = state
        .store
        .query(&paths::items(&tenant, &customer, &order_id), Filter::All, None)
        .await?;
    if item_docs.is_empty() {
        return Err(AppError::EmptyOrder);
    }

    let confirmed_at = Utc::now();
    state
        .store
        .update(
            &order_path,
            json!({
                "status": OrderStatus::OrderConfirmed,
                "item_count": 0,
                "confirmed_at": confirmed_at,
            }),
        )
        .await?;
    state
        .store
        .update(
            &paths::customer(&tenant, &customer),
            json!({ "active_order_id": null }),
        )
        .await?;

    let mut by_partner: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for doc in &item_docs {
        if let Some(partner) = doc.fields.get("partner").and_then(Value::as_str) {
            by_partner
                .entry(partner.to_string())
                .or_default()
                .push(doc.id.clone());
        }
    }

    let mut notified_partners = Vec::with_capacity(by_partner.len());
    for (partner, item_ids) in by_partner {
        let notification = PartnerNotification {
            order_id: order_id.clone(),
            customer: customer.clone(),
            item_ids,
            read: false,
            created_at: confirmed_at,
        };
        state
            .store
            .add(
                &paths::notifications(&tenant, &partner),
                serde_json::to_value(&notification)?,
            )
            .await?;
        notified_partners.push(partner);
    }

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&tenant),
        "order_confirm",
        Some("orders"),
        Some(json!({ "order_id": order_id, "partners": notified_partners.len() })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Order confirmed",
        ConfirmOrderResponse {
            order_id,
            notified_partners,
        },
        Some(Meta::empty()),
    ))
}

/// First unread notification for the partner, or `not_found` when the
/// partner has none waiting.
pub async fn unread_notification(
    state: &AppState,
    query: UnreadQuery,
) -> AppResult<ApiResponse<NotificationDto>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &query.tenant);
    let partner = missing.require_str("partner", &query.partner);
    missing.finish()?;

    let docs = state
        .store
        .query(
            &paths::notifications(&tenant, &partner),
            Filter::Eq("read", json!(false)),
            Some(1),
        )
        .await?;
    let Some(doc) = docs.into_iter().next() else {
        return Err(AppError::NotFound);
    };

    let notification: PartnerNotification = doc.decode()?;
    Ok(ApiResponse::success(
        "Unread notification",
        NotificationDto {
            id: doc.id,
            order_id: notification.order_id,
            customer: notification.customer,
            item_ids: notification.item_ids,
            read: notification.read,
            created_at: notification.created_at,
        },
        None,
    ))
}

pub async fn mark_notification_read(
    state: &AppState,
    payload: MarkReadRequest,
) -> AppResult<ApiResponse<Value>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let partner = missing.require_str("partner", &payload.partner);
    let notification_id = missing.require_str("notification_id", &payload.notification_id);
    missing.finish()?;

    state
        .store
        .update(
            &paths::notification(&tenant, &partner, &notification_id),
            json!({ "read": true }),
        )
        .await?;

    Ok(ApiResponse::success(
        "Notification read",
        json!({ "notification_id": notification_id }),
        Some(Meta::empty()),
    ))
}
