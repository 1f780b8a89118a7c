use std::sync::Arc;

use ofm_marketplace_api::{
    blob::memory::MemoryBlobStore,
    dto::cart::{ActiveOrderRequest, AddItemRequest, ItemRef},
    dto::orders::{ConfirmOrderRequest, UnreadQuery},
    error::AppError,
    models::{Order, OrderStatus},
    services::{cart_service, order_service},
    state::AppState,
    store::{memory::MemoryStore, paths},
};

const TENANT: &str = "market";
const CUSTOMER: &str = "somchai";

fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        blobs: Arc::new(MemoryBlobStore::new()),
    }
}

fn active_order_request() -> ActiveOrderRequest {
    ActiveOrderRequest {
        tenant: Some(TENANT.into()),
        customer: Some(CUSTOMER.into()),
    }
}

fn add_item_request(product: &str, partner: &str) -> AddItemRequest {
    AddItemRequest {
        tenant: Some(TENANT.into()),
        customer: Some(CUSTOMER.into()),
        order_id: None,
        product_name: Some(product.into()),
        description: None,
        price: Some(4500),
        image_url: None,
        partner: Some(partner.into()),
    }
}

fn item_ref(order_id: &str, item_id: &str) -> ItemRef {
    ItemRef {
        tenant: Some(TENANT.into()),
        customer: Some(CUSTOMER.into()),
        order_id: Some(order_id.into()),
        item_id: Some(item_id.into()),
    }
}

fn confirm_request(order_id: &str) -> ConfirmOrderRequest {
    ConfirmOrderRequest {
        tenant: Some(TENANT.into()),
        customer: Some(CUSTOMER.into()),
        order_id: Some(order_id.into()),
    }
}

async fn open_draft(state: &AppState) -> String {
    let resp = cart_service::active_order(state, active_order_request())
        .await
        .expect("active order");
    resp.data.expect("order data").order_id
}

async fn add_item(state: &AppState, order_id: &str, product: &str, partner: &str) -> String {
    let mut request = add_item_request(product, partner);
    request.order_id = Some(order_id.into());
    let resp = cart_service::add_item(state, request).await.expect("add item");
    resp.data.expect("item data").item_id
}

async fn read_order(state: &AppState, order_id: &str) -> Order {
    state
        .store
        .get(&paths::order(TENANT, CUSTOMER, order_id))
        .await
        .expect("store get")
        .expect("order doc")
        .decode()
        .expect("order decode")
}

#[tokio::test]
async fn active_order_is_created_once_and_stays_draft() {
    let state = test_state();

    let first = cart_service::active_order(&state, active_order_request())
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(first.order.status, OrderStatus::Draft);
    assert_eq!(first.order.item_count, 0);

    let second = cart_service::active_order(&state, active_order_request())
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(second.order_id, first.order_id);
    assert_eq!(second.order.status, OrderStatus::Draft);
}

#[tokio::test]
async fn stale_pointer_opens_a_fresh_draft() {
    let state = test_state();
    let order_id = open_draft(&state).await;

    // the pointed-at order disappears out-of-band
    state
        .store
        .delete(&paths::order(TENANT, CUSTOMER, &order_id))
        .await
        .unwrap();

    // order ids are millisecond timestamps; step past the old one
    std::thread::sleep(std::time::Duration::from_millis(2));

    let replacement = cart_service::active_order(&state, active_order_request())
        .await
        .unwrap()
        .data
        .unwrap();
    assert_ne!(replacement.order_id, order_id);
    assert_eq!(replacement.order.status, OrderStatus::Draft);
}

#[tokio::test]
async fn add_item_requires_an_existing_order() {
    let state = test_state();
    let mut request = add_item_request("Pad Thai", "noodles");
    request.order_id = Some("1234".into());

    let result = cart_service::add_item(&state, request).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn add_item_reports_every_missing_field() {
    let state = test_state();
    let request = AddItemRequest {
        tenant: Some(TENANT.into()),
        customer: None,
        order_id: None,
        product_name: Some("Pad Thai".into()),
        description: None,
        price: None,
        image_url: None,
        partner: None,
    };

    match cart_service::add_item(&state, request).await {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields, vec!["customer".to_string(), "order_id".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn decrease_never_drops_below_one_unit() {
    let state = test_state();
    let order_id = open_draft(&state).await;
    let item_id = add_item(&state, &order_id, "Pad Thai", "noodles").await;

    let resp = cart_service::decrease_quantity(&state, item_ref(&order_id, &item_id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(resp.quantity, 1);

    let resp = cart_service::increase_quantity(&state, item_ref(&order_id, &item_id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(resp.quantity, 2);

    let resp = cart_service::decrease_quantity(&state, item_ref(&order_id, &item_id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(resp.quantity, 1);
}

#[tokio::test]
async fn quantity_change_on_missing_item_is_not_found() {
    let state = test_state();
    let order_id = open_draft(&state).await;

    let result = cart_service::increase_quantity(&state, item_ref(&order_id, "ghost")).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn item_count_tracks_adds_and_removals() {
    let state = test_state();
    let order_id = open_draft(&state).await;

    let first = add_item(&state, &order_id, "Pad Thai", "noodles").await;
    add_item(&state, &order_id, "Boat Noodles", "noodles").await;
    add_item(&state, &order_id, "Green Curry", "curry").await;
    assert_eq!(read_order(&state, &order_id).await.item_count, 3);

    cart_service::remove_item(&state, item_ref(&order_id, &first))
        .await
        .unwrap();
    assert_eq!(read_order(&state, &order_id).await.item_count, 2);
}

#[tokio::test]
async fn confirm_fans_out_one_notification_per_partner() {
    let state = test_state();
    let order_id = open_draft(&state).await;

    let noodle_a = add_item(&state, &order_id, "Pad Thai", "noodles").await;
    let noodle_b = add_item(&state, &order_id, "Boat Noodles", "noodles").await;
    let curry = add_item(&state, &order_id, "Green Curry", "curry").await;

    let resp = order_service::confirm_order(&state, confirm_request(&order_id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(resp.notified_partners, vec!["curry", "noodles"]);

    let order = read_order(&state, &order_id).await;
    assert_eq!(order.status, OrderStatus::OrderConfirmed);
    assert_eq!(order.item_count, 0);
    assert!(order.confirmed_at.is_some());

    // the customer no longer points at the confirmed order
    let customer = state
        .store
        .get(&paths::customer(TENANT, CUSTOMER))
        .await
        .unwrap()
        .unwrap();
    assert!(customer.fields["active_order_id"].is_null());

    let noodles = order_service::unread_notification(
        &state,
        UnreadQuery {
            tenant: Some(TENANT.into()),
            partner: Some("noodles".into()),
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();
    assert!(!noodles.read);
    assert_eq!(noodles.order_id, order_id);
    let mut ids = noodles.item_ids.clone();
    ids.sort();
    let mut expected = vec![noodle_a, noodle_b];
    expected.sort();
    assert_eq!(ids, expected);

    let curry_note = order_service::unread_notification(
        &state,
        UnreadQuery {
            tenant: Some(TENANT.into()),
            partner: Some("curry".into()),
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();
    assert_eq!(curry_note.item_ids, vec![curry]);
}

#[tokio::test]
async fn confirm_order_with_no_items_leaves_state_untouched() {
    let state = test_state();
    let order_id = open_draft(&state).await;

    let result = order_service::confirm_order(&state, confirm_request(&order_id)).await;
    assert!(matches!(result, Err(AppError::EmptyOrder)));

    // the draft and the customer's pointer both survive the failed confirm
    let order = read_order(&state, &order_id).await;
    assert_eq!(order.status, OrderStatus::Draft);
    assert!(order.confirmed_at.is_none());

    let customer = state
        .store
        .get(&paths::customer(TENANT, CUSTOMER))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        customer.fields["active_order_id"].as_str(),
        Some(order_id.as_str())
    );
}

#[tokio::test]
async fn confirm_missing_order_is_not_found() {
    let state = test_state();

    let result = order_service::confirm_order(&state, confirm_request("99999")).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn mark_notification_read_clears_unread_probe() {
    let state = test_state();
    let order_id = open_draft(&state).await;
    add_item(&state, &order_id, "Pad Thai", "noodles").await;
    order_service::confirm_order(&state, confirm_request(&order_id))
        .await
        .unwrap();

    let unread_query = || UnreadQuery {
        tenant: Some(TENANT.into()),
        partner: Some("noodles".into()),
    };
    let note = order_service::unread_notification(&state, unread_query())
        .await
        .unwrap()
        .data
        .unwrap();

    order_service::mark_notification_read(
        &state,
        ofm_marketplace_api::dto::orders::MarkReadRequest {
            tenant: Some(TENANT.into()),
            partner: Some("noodles".into()),
            notification_id: Some(note.id),
        },
    )
    .await
    .unwrap();

    let result = order_service::unread_notification(&state, unread_query()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
