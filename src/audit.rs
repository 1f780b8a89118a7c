use serde_json::{Value, json};

use crate::store::{DocumentStore, StoreResult, paths};

/// Best-effort audit trail. Callers log a warning on failure and carry on;
/// an audit write must never fail the request it describes.
pub async fn log_audit(
    store: &dyn DocumentStore,
    tenant: Option<&str>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> StoreResult<()> {
    store
        .add(
            paths::AUDIT_LOGS,
            json!({
                "tenant": tenant,
                "action": action,
                "resource": resource,
                "metadata": metadata,
                "created_at": chrono::Utc::now(),
            }),
        )
        .await?;
    Ok(())
}
