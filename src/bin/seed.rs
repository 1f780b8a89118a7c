use chrono::Utc;
use ofm_marketplace_api::{
    config::AppConfig,
    db::create_pool,
    models::{AdminCredential, Partner, Product, Tenant},
    search::build_prefixes,
    services::auth_service::hash_password,
    store::{DocumentStore, paths, postgres::PostgresStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store = PostgresStore::new(pool);

    let tenant = "Demo Market";
    ensure_tenant(&store, tenant).await?;
    ensure_admin(&store, tenant, "admin", "admin123").await?;
    ensure_partner(&store, tenant, "Noodle Stand").await?;
    seed_products(&store, tenant, "Noodle Stand", "preorder").await?;

    println!("Seed completed for tenant {tenant}");
    Ok(())
}

async fn ensure_tenant(store: &PostgresStore, name: &str) -> anyhow::Result<()> {
    let record = Tenant {
        name: name.to_string(),
        name_lower: name.to_lowercase(),
        search_prefix: build_prefixes(name),
        created_at: Utc::now(),
    };
    store
        .set(&paths::tenant(name), serde_json::to_value(&record)?, false)
        .await?;
    println!("Ensured tenant {name}");
    Ok(())
}

async fn ensure_admin(
    store: &PostgresStore,
    tenant: &str,
    admin_name: &str,
    password: &str,
) -> anyhow::Result<()> {
    let credential = AdminCredential {
        tenant_name: tenant.to_string(),
        admin_name: admin_name.to_string(),
        address: None,
        phone: None,
        password_hash: hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?,
        created_at: Utc::now(),
    };
    store
        .add(paths::ADMINS, serde_json::to_value(&credential)?)
        .await?;
    println!("Ensured admin {admin_name} for {tenant}");
    Ok(())
}

async fn ensure_partner(store: &PostgresStore, tenant: &str, name: &str) -> anyhow::Result<()> {
    let partner = Partner {
        name: name.to_string(),
        address: None,
        phone: None,
        password_hash: hash_password("partner123").map_err(|e| anyhow::anyhow!(e.to_string()))?,
        created_at: Utc::now(),
    };
    store
        .set(
            &paths::partner(tenant, name),
            serde_json::to_value(&partner)?,
            false,
        )
        .await?;
    println!("Ensured partner {name}");
    Ok(())
}

async fn seed_products(
    store: &PostgresStore,
    tenant: &str,
    partner: &str,
    mode: &str,
) -> anyhow::Result<()> {
    let products = vec![
        ("Pad Thai", "Stir-fried rice noodles", 6000),
        ("Boat Noodles", "Rich broth, small bowl", 2000),
        ("Green Curry", "With roti", 7500),
    ];

    for (name, description, price) in products {
        let product = Product {
            name: name.to_string(),
            description: Some(description.to_string()),
            price: Some(price),
            image_url: None,
            partner: partner.to_string(),
            mode: mode.to_string(),
            created_at: Utc::now(),
        };
        store
            .set(
                &paths::product(tenant, partner, mode, name),
                serde_json::to_value(&product)?,
                false,
            )
            .await?;
    }

    println!("Seeded products");
    Ok(())
}
