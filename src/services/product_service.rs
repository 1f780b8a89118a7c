use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    audit::log_audit,
    dto::{
        MissingFields,
        products::{ProductList, ProductListQuery, SaveProductRequest},
    },
    error::AppResult,
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
    store::{Filter, paths},
};

/// Upsert: saving an existing product name overwrites the document.
pub async fn save_product(
    state: &AppState,
    payload: SaveProductRequest,
) -> AppResult<ApiResponse<Value>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &payload.tenant);
    let partner = missing.require_str("partner", &payload.partner);
    let mode = missing.require_str("mode", &payload.mode);
    let name = missing.require_str("name", &payload.name);
    missing.finish()?;

    let product = Product {
        name: name.clone(),
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
        partner: partner.clone(),
        mode: mode.clone(),
        created_at: Utc::now(),
    };
    state
        .store
        .set(
            &paths::product(&tenant, &partner, &mode, &name),
            serde_json::to_value(&product)?,
            false,
        )
        .await?;

    if let Err(err) = log_audit(
        state.store.as_ref(),
        Some(&tenant),
        "product_save",
        Some("products"),
        Some(json!({ "partner": partner, "mode": mode, "name": name })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product saved",
        json!({ "name": name }),
        Some(Meta::empty()),
    ))
}

pub async fn list_products(
    state: &AppState,
    query: ProductListQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &query.tenant);
    let partner = missing.require_str("partner", &query.partner);
    let mode = missing.require_str("mode", &query.mode);
    missing.finish()?;

    let docs = state
        .store
        .query(&paths::products(&tenant, &partner, &mode), Filter::All, None)
        .await?;

    let mut items = Vec::with_capacity(docs.len());
    for doc in docs {
        items.push(doc.decode::<Product>()?);
    }

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(Meta::new(1, total.max(1), total)),
    ))
}
