//! Repository trait for order data access.

use crate::domain::entities::{NewOrder, Order};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing orders.
///
/// Orders always belong to one customer. Implementations must refuse to
/// create an order for a customer that does not exist.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryOrderRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owning customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError>;

    /// Finds an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError>;

    /// Lists all orders ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Lists the orders of one customer, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>, AppError>;

    /// Deletes an order.
    ///
    /// Returns `Ok(true)` if the order existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
