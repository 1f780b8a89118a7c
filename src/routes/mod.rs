use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod browse;
pub mod cart;
pub mod doc;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod tenants;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/tenants", tenants::router())
        .nest("/auth", auth::router())
        .nest("/products", products::router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
        .nest("/notifications", notifications::router())
        .nest("/browse", browse::router())
}
