//! PostgreSQL reachability probe.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::StorageHealth;

/// Health probe issuing `SELECT 1` against the pool.
pub struct PgStorageHealth {
    pool: Arc<PgPool>,
}

impl PgStorageHealth {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageHealth for PgStorageHealth {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
