pub mod auth_service;
pub mod browse_service;
pub mod cart_service;
pub mod order_service;
pub mod product_service;
pub mod tenant_service;
