//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer CRUD operations
//! - [`OrderRepository`] - Order CRUD operations
//! - [`StorageHealth`] - Backend reachability for health checks

pub mod customer_repository;
pub mod order_repository;
pub mod storage_health;

pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use storage_health::StorageHealth;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
