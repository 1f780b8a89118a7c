use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use serde_json::{Value, json};

use crate::{
    audit::log_audit,
    dto::{
        MissingFields,
        auth::{CheckPasswordRequest, RegisterAdminRequest, RegisterMemberRequest},
    },
    error::{AppError, AppResult},
    models::{AdminCredential, Customer, DeliveryWorker, Partner},
    response::{ApiResponse, Meta},
    state::AppState,
    store::{Filter, paths},
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(stored_hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Admin records are append-only and deliberately not unique per tenant:
/// one tenant may have several admins.
pub async fn register_admin(
    state: &AppState,
    payload: RegisterAdminRequest,
) -> AppResult<ApiResponse<Value>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let admin_name = missing.require_str("admin_name", &payload.admin_name);
    let password = missing.require_str("password", &payload.password);
    missing.finish()?;

    if state.store.get(&paths::tenant(&tenant)).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let credential = AdminCredential {
        tenant_name: tenant.clone(),
        admin_name,
        address: payload.address,
        phone: payload.phone,
        password_hash: hash_password(&password)?,
        created_at: Utc::now(),
    };
    state
        .store
        .add(paths::ADMINS, serde_json::to_value(&credential)?)
        .await?;

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&tenant),
        "admin_register",
        Some("admins"),
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Admin registered",
        json!({ "tenant": tenant }),
        Some(Meta::empty()),
    ))
}

/// Three-way outcome: `not_found` when the tenant has no admin record,
/// `wrong_password` on a hash mismatch, `success` otherwise.
pub async fn check_password(
    state: &AppState,
    payload: CheckPasswordRequest,
) -> AppResult<ApiResponse<Value>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let password = missing.require_str("password", &payload.password);
    missing.finish()?;

    let docs = state
        .store
        .query(
            paths::ADMINS,
            Filter::Eq("tenant_name", json!(tenant)),
            Some(1),
        )
        .await?;
    let Some(doc) = docs.into_iter().next() else {
        return Err(AppError::NotFound);
    };

    let admin: AdminCredential = doc.decode()?;
    if !verify_password(&admin.password_hash, &password)? {
        return Err(AppError::WrongPassword);
    }

    Ok(ApiResponse::success(
        "Password accepted",
        json!({}),
        Some(Meta::empty()),
    ))
}

#[derive(Debug, Clone, Copy)]
pub enum MemberRole {
    Partner,
    Customer,
    Delivery,
}

impl MemberRole {
    fn noun(self) -> &'static str {
        match self {
            MemberRole::Partner => "partner",
            MemberRole::Customer => "customer",
            MemberRole::Delivery => "delivery",
        }
    }

    fn collection(self, tenant: &str) -> String {
        match self {
            MemberRole::Partner => paths::partners(tenant),
            MemberRole::Customer => paths::customers(tenant),
            MemberRole::Delivery => paths::deliveries(tenant),
        }
    }
}

/// One registration routine for partners, customers, and delivery workers;
/// each role only differs in its collection and extra fields.
pub async fn register_member(
    state: &AppState,
    role: MemberRole,
    payload: RegisterMemberRequest,
) -> AppResult<ApiResponse<Value>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let name = missing.require_str("name", &payload.name);
    let password = missing.require_str("password", &payload.password);
    missing.finish()?;

    if state.store.get(&paths::tenant(&tenant)).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let path = format!("{}/{}", role.collection(&tenant), name);
    if state.store.get(&path).await?.is_some() {
        return Err(AppError::Duplicate(role.noun()));
    }

    let password_hash = hash_password(&password)?;
    let created_at = Utc::now();
    let fields = match role {
        MemberRole::Partner => serde_json::to_value(Partner {
            name: name.clone(),
            address: payload.address,
            phone: payload.phone,
            password_hash,
            created_at,
        })?,
        MemberRole::Customer => serde_json::to_value(Customer {
            name: name.clone(),
            address: payload.address,
            phone: payload.phone,
            password_hash: Some(password_hash),
            active_order_id: None,
            created_at,
        })?,
        MemberRole::Delivery => serde_json::to_value(DeliveryWorker {
            name: name.clone(),
            address: payload.address,
            phone: payload.phone,
            password_hash,
            status: "available".to_string(),
            created_at,
        })?,
    };
    state.store.set(&path, fields, false).await?;

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&tenant),
        "member_register",
        Some(role.noun()),
        Some(json!({ "name": name })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Registered",
        json!({ "tenant": tenant, "name": name }),
        Some(Meta::empty()),
    ))
}
