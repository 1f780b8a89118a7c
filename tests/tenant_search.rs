use std::sync::Arc;

use ofm_marketplace_api::{
    blob::memory::MemoryBlobStore,
    dto::tenants::{RegisterTenantRequest, TenantSearchQuery},
    error::AppError,
    models::Tenant,
    services::tenant_service,
    state::AppState,
    store::{memory::MemoryStore, paths},
};

fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        blobs: Arc::new(MemoryBlobStore::new()),
    }
}


fn register(name: &str) -> RegisterTenantRequest {
    RegisterTenantRequest {
        name: Some(name.into()),
    }
}

fn search(term: &str) -> TenantSearchQuery {
    TenantSearchQuery {
        q: Some(term.into()),
    }
}

#[tokio::test]
async fn registration_stores_the_full_prefix_index() {
    let state = test_state();
    tenant_service::register_tenant(&state, register("Fresh Market"))
        .await
        .unwrap();

    let tenant: Tenant = state
        .store
        .get(&paths::tenant("Fresh Market"))
        .await
        .unwrap()
        .expect("tenant doc")
        .decode()
        .unwrap();

    assert_eq!(tenant.name_lower, "fresh market");
    assert!(tenant.search_prefix.contains(&"fresh market".to_string()));
    assert_eq!(tenant.search_prefix.len(), "fresh market".chars().count());
}

#[tokio::test]
async fn registration_creates_the_storage_folder_marker() {
    let state = test_state();
    tenant_service::register_tenant(&state, register("Fresh Market"))
        .await
        .unwrap();

    let keys = state.blobs.list("Fresh Market/").await.unwrap();
    assert_eq!(keys, vec!["Fresh Market/.keep".to_string()]);
}

#[tokio::test]
async fn duplicate_tenant_name_is_rejected() {
    let state = test_state();
    tenant_service::register_tenant(&state, register("Fresh Market"))
        .await
        .unwrap();

    let result = tenant_service::register_tenant(&state, register("Fresh Market")).await;
    assert!(matches!(result, Err(AppError::Duplicate("tenant"))));
}

#[tokio::test]
async fn whitespace_only_name_fails_validation() {
    let state = test_state();
    let result = tenant_service::register_tenant(&state, register("   ")).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn every_prefix_of_the_name_finds_the_tenant() {
    let state = test_state();
    tenant_service::register_tenant(&state, register("Fresh Market"))
        .await
        .unwrap();

    for term in ["f", "fre", "Fresh", "FRESH MA", "fresh market", " fresh "] {
        let found = tenant_service::search_tenants(&state, search(term))
            .await
            .unwrap()
            .data
            .unwrap();
        assert_eq!(found.items, vec!["Fresh Market".to_string()], "term {term:?}");
    }
}

#[tokio::test]
async fn non_prefix_terms_find_nothing() {
    let state = test_state();
    tenant_service::register_tenant(&state, register("Fresh Market"))
        .await
        .unwrap();

    for term in ["market", "resh", "fresh markets"] {
        let found = tenant_service::search_tenants(&state, search(term))
            .await
            .unwrap()
            .data
            .unwrap();
        assert!(found.items.is_empty(), "term {term:?}");
    }
}

#[tokio::test]
async fn search_matches_across_tenants() {
    let state = test_state();
    tenant_service::register_tenant(&state, register("Fresh Market"))
        .await
        .unwrap();
    tenant_service::register_tenant(&state, register("Friendly Mart"))
        .await
        .unwrap();

    let found = tenant_service::search_tenants(&state, search("fr"))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(
        found.items,
        vec!["Fresh Market".to_string(), "Friendly Mart".to_string()]
    );
}
