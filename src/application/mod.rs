//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! expose DTO-level operations to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customer registration and maintenance
//! - [`services::order_service::OrderService`] - Order placement and removal

pub mod services;
