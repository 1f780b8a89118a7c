//! Path layout of the document store. Every record lives under its tenant,
//! except the admin credentials and audit trail which are top-level.

pub const TENANTS: &str = "tenants";
pub const ADMINS: &str = "admins";
pub const AUDIT_LOGS: &str = "audit_logs";

pub fn tenant(name: &str) -> String {
    format!("tenants/{name}")
}

pub fn partners(tenant: &str) -> String {
    format!("tenants/{tenant}/partners")
}

pub fn partner(tenant: &str, name: &str) -> String {
    format!("tenants/{tenant}/partners/{name}")
}

pub fn deliveries(tenant: &str) -> String {
    format!("tenants/{tenant}/deliveries")
}

pub fn customers(tenant: &str) -> String {
    format!("tenants/{tenant}/customers")
}

pub fn customer(tenant: &str, name: &str) -> String {
    format!("tenants/{tenant}/customers/{name}")
}

pub fn orders(tenant: &str, customer: &str) -> String {
    format!("tenants/{tenant}/customers/{customer}/orders")
}

pub fn order(tenant: &str, customer: &str, order_id: &str) -> String {
    format!("tenants/{tenant}/customers/{customer}/orders/{order_id}")
}

pub fn items(tenant: &str, customer: &str, order_id: &str) -> String {
    format!("tenants/{tenant}/customers/{customer}/orders/{order_id}/items")
}

pub fn item(tenant: &str, customer: &str, order_id: &str, item_id: &str) -> String {
    format!("tenants/{tenant}/customers/{customer}/orders/{order_id}/items/{item_id}")
}

pub fn products(tenant: &str, partner: &str, mode: &str) -> String {
    format!("tenants/{tenant}/partners/{partner}/modes/{mode}/products")
}

pub fn product(tenant: &str, partner: &str, mode: &str, name: &str) -> String {
    format!("tenants/{tenant}/partners/{partner}/modes/{mode}/products/{name}")
}

pub fn notifications(tenant: &str, partner: &str) -> String {
    format!("tenants/{tenant}/partners/{partner}/notifications")
}

pub fn notification(tenant: &str, partner: &str, id: &str) -> String {
    format!("tenants/{tenant}/partners/{partner}/notifications/{id}")
}
