use std::sync::Arc;

use ofm_marketplace_api::{
    blob::{BlobStore, memory::MemoryBlobStore},
    dto::browse::{ImagesQuery, ModesQuery, ShopsQuery, SignedImageQuery},
    services::browse_service,
    state::AppState,
    store::memory::MemoryStore,
};

fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        blobs: Arc::new(MemoryBlobStore::new()),
    }
}

async fn upload_fixture(state: &AppState) {
    let keys = [
        "market/.keep",
        "market/grill/preorder/a.jpg",
        "market/noodles/preorder/1.jpg",
        "market/noodles/preorder/2.JPG",
        "market/noodles/preorder/3.jpg",
        "market/noodles/preorder/notes.txt",
        "market/noodles/walkin/4.jpg",
    ];
    for key in keys {
        state
            .blobs
            .upload(key, Vec::new(), "application/octet-stream")
            .await
            .unwrap();
    }
}

fn images_query(page: Option<i64>, page_size: Option<i64>) -> ImagesQuery {
    ImagesQuery {
        tenant: Some("market".into()),
        shop: Some("noodles".into()),
        mode: Some("preorder".into()),
        page,
        page_size,
    }
}

#[tokio::test]
async fn shops_are_derived_from_key_segments() {
    let state = test_state();
    upload_fixture(&state).await;

    let shops = browse_service::shops(
        &state,
        ShopsQuery {
            tenant: Some("market".into()),
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();

    // sorted, distinct, and the .keep marker is not a shop
    assert_eq!(shops.shops, vec!["grill", "noodles"]);
}

#[tokio::test]
async fn modes_are_derived_one_level_deeper() {
    let state = test_state();
    upload_fixture(&state).await;

    let modes = browse_service::modes(
        &state,
        ModesQuery {
            tenant: Some("market".into()),
            shop: Some("noodles".into()),
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();

    assert_eq!(modes.modes, vec!["preorder", "walkin"]);
}

#[tokio::test]
async fn images_filter_jpgs_and_slice_pages_in_memory() {
    let state = test_state();
    upload_fixture(&state).await;

    let first = browse_service::images(&state, images_query(Some(1), Some(2)))
        .await
        .unwrap()
        .data
        .unwrap();
    // the .JPG key matches case-insensitively, notes.txt does not
    assert_eq!(first.total, 3);
    assert_eq!(first.images.len(), 2);
    assert!(first.has_more);
    assert!(first.images.iter().all(|url| url.starts_with("memory://")));

    let second = browse_service::images(&state, images_query(Some(2), Some(2)))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(second.images.len(), 1);
    assert!(!second.has_more);

    let past_the_end = browse_service::images(&state, images_query(Some(9), Some(2)))
        .await
        .unwrap()
        .data
        .unwrap();
    assert!(past_the_end.images.is_empty());
    assert!(!past_the_end.has_more);
    assert_eq!(past_the_end.total, 3);
}

#[tokio::test]
async fn signed_image_builds_the_key_from_the_folder_path() {
    let state = test_state();
    upload_fixture(&state).await;

    let resp = browse_service::signed_image(
        &state,
        SignedImageQuery {
            tenant: Some("market".into()),
            shop: Some("noodles".into()),
            mode: Some("preorder".into()),
            name: Some("1.jpg".into()),
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();

    assert!(resp.url.starts_with("memory://market/noodles/preorder/1.jpg"));
}

#[tokio::test]
async fn defaults_apply_when_paging_params_are_absent() {
    let state = test_state();
    upload_fixture(&state).await;

    let page = browse_service::images(&state, images_query(None, None))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.images.len(), 3);
    assert!(!page.has_more);
}
