//! Storage backend reachability probe.

use async_trait::async_trait;

/// Reports whether the storage backend behind the repositories is reachable.
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Short backend name for health reports (e.g. `postgres`).
    fn backend(&self) -> &'static str;

    /// Returns `true` when the backend answers a trivial query.
    async fn health_check(&self) -> bool;
}
