use std::sync::Arc;

use ofm_marketplace_api::{
    blob::memory::MemoryBlobStore,
    dto::auth::{CheckPasswordRequest, RegisterAdminRequest, RegisterMemberRequest},
    dto::tenants::RegisterTenantRequest,
    error::AppError,
    services::auth_service::{self, MemberRole},
    services::tenant_service,
    state::AppState,
    store::memory::MemoryStore,
};

const TENANT: &str = "Fresh Market";

fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        blobs: Arc::new(MemoryBlobStore::new()),
    }
}

async fn with_tenant() -> AppState {
    let state = test_state();
    tenant_service::register_tenant(
        &state,
        RegisterTenantRequest {
            name: Some(TENANT.into()),
        },
    )
    .await
    .unwrap();
    state
}

fn admin_request(password: &str) -> RegisterAdminRequest {
    RegisterAdminRequest {
        tenant: Some(TENANT.into()),
        admin_name: Some("manager".into()),
        address: Some("1 Market Road".into()),
        phone: Some("0812345678".into()),
        password: Some(password.into()),
    }
}

fn check_request(tenant: &str, password: &str) -> CheckPasswordRequest {
    CheckPasswordRequest {
        tenant: Some(tenant.into()),
        password: Some(password.into()),
    }
}

fn member_request(name: &str) -> RegisterMemberRequest {
    RegisterMemberRequest {
        tenant: Some(TENANT.into()),
        name: Some(name.into()),
        address: None,
        phone: None,
        password: Some("secret123".into()),
    }
}

#[tokio::test]
async fn password_check_distinguishes_all_three_outcomes() {
    let state = with_tenant().await;
    auth_service::register_admin(&state, admin_request("hunter2"))
        .await
        .unwrap();

    let ok = auth_service::check_password(&state, check_request(TENANT, "hunter2"))
        .await
        .unwrap();
    assert_eq!(ok.status, "success");

    let wrong = auth_service::check_password(&state, check_request(TENANT, "hunter3")).await;
    assert!(matches!(wrong, Err(AppError::WrongPassword)));

    let unknown =
        auth_service::check_password(&state, check_request("Nowhere Market", "hunter2")).await;
    assert!(matches!(unknown, Err(AppError::NotFound)));
}

#[tokio::test]
async fn admin_registration_requires_an_existing_tenant() {
    let state = test_state();
    let result = auth_service::register_admin(&state, admin_request("hunter2")).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn several_admins_may_share_a_tenant() {
    let state = with_tenant().await;
    auth_service::register_admin(&state, admin_request("hunter2"))
        .await
        .unwrap();
    // same admin name again: allowed, records are append-only
    auth_service::register_admin(&state, admin_request("hunter2"))
        .await
        .unwrap();
}

#[tokio::test]
async fn member_registration_rejects_duplicates_per_role() {
    let state = with_tenant().await;

    auth_service::register_member(&state, MemberRole::Partner, member_request("Noodle Stand"))
        .await
        .unwrap();
    let duplicate =
        auth_service::register_member(&state, MemberRole::Partner, member_request("Noodle Stand"))
            .await;
    assert!(matches!(duplicate, Err(AppError::Duplicate("partner"))));

    // the same name is free under a different role
    auth_service::register_member(&state, MemberRole::Customer, member_request("Noodle Stand"))
        .await
        .unwrap();
}

#[tokio::test]
async fn registration_lists_every_missing_field() {
    let state = with_tenant().await;
    let request = RegisterMemberRequest {
        tenant: Some(TENANT.into()),
        name: None,
        address: None,
        phone: None,
        password: Some("  ".into()),
    };

    match auth_service::register_member(&state, MemberRole::Delivery, request).await {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields, vec!["name".to_string(), "password".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
