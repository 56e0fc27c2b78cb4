use serde_json::Value;

use crate::{db::DbPool, error::AppResult};

pub async fn log_audit(
    pool: &DbPool,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO audit_logs (action, resource, metadata)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(action)
    .bind(resource)
    .bind(metadata.map(|m| m.to_string()))
    .execute(pool)
    .await?;

    Ok(())
}
