use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    audit::log_audit,
    dto::{
        MissingFields,
        tenants::{RegisterTenantRequest, TenantList, TenantSearchQuery},
    },
    error::{AppError, AppResult},
    models::Tenant,
    response::{ApiResponse, Meta},
    search::{build_prefixes, normalize},
    state::AppState,
    store::{Filter, paths},
};

pub async fn register_tenant(
    state: &AppState,
    payload: RegisterTenantRequest,
) -> AppResult<ApiResponse<Value>> {
    let mut missing = MissingFields::new();
    let name = missing.require_str("name", &payload.name);
    missing.finish()?;

    let path = paths::tenant(&name);
    if state.store.get(&path).await?.is_some() {
        return Err(AppError::Duplicate("tenant"));
    }

    let tenant = Tenant {
        name: name.clone(),
        name_lower: name.to_lowercase(),
        search_prefix: build_prefixes(&name),
        created_at: Utc::now(),
    };
    state.store.set(&path, serde_json::to_value(&tenant)?, false).await?;

    // marker object so the tenant's storage folder exists before any upload
    state
        .blobs
        .upload(&format!("{name}/.keep"), Vec::new(), "application/octet-stream")
        .await?;

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&name),
        "tenant_register",
        Some("tenants"),
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Tenant registered",
        json!({ "name": name }),
        Some(Meta::empty()),
    ))
}

/// Starts-with search: the normalized term must equal one of the stored
/// prefixes of some tenant name.
pub async fn search_tenants(
    state: &AppState,
    query: TenantSearchQuery,
) -> AppResult<ApiResponse<TenantList>> {
    let mut missing = MissingFields::new();
    let term = missing.require_str("q", &query.q);
    missing.finish()?;

    let term = normalize(&term);
    let docs = state
        .store
        .query(
            paths::TENANTS,
            Filter::ArrayContains("search_prefix", json!(term)),
            None,
        )
        .await?;

    let mut items = Vec::with_capacity(docs.len());
    for doc in docs {
        let tenant: Tenant = doc.decode()?;
        items.push(tenant.name);
    }

    Ok(ApiResponse::success("OK", TenantList { items }, None))
}
