//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer, UpdateCustomer};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persists a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a customer with the same id already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError>;

    /// Lists all customers ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;

    /// Replaces the mutable fields of a customer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Customer))` with the updated record
    /// - `Ok(None)` if no customer has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: Uuid, update: UpdateCustomer)
    -> Result<Option<Customer>, AppError>;

    /// Deletes a customer together with its orders.
    ///
    /// Returns `Ok(true)` if the customer existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
