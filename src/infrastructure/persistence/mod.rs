//! Repository implementations.
//!
//! PostgreSQL implementations use SQLx with bound parameters; the in-memory
//! implementations back the service when no database is configured.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] / [`InMemoryCustomerRepository`] - Customer storage
//! - [`PgOrderRepository`] / [`InMemoryOrderRepository`] - Order storage
//! - [`PgStorageHealth`] / [`MemoryStore`] - Storage health probes

pub mod memory;
pub mod pg_customer_repository;
pub mod pg_order_repository;
pub mod pg_storage_health;

pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository, MemoryStore};
pub use pg_customer_repository::PgCustomerRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_storage_health::PgStorageHealth;
