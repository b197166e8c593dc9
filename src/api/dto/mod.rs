//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. The derives are the only JSON codec in the crate.

pub mod customer;
pub mod health;
pub mod order;

pub use customer::CustomerDto;
pub use order::OrderDto;
