//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. They mirror the
//! persisted shape of records and are converted to DTOs by the service layer.
//!
//! # Entity Types
//!
//! - [`Customer`] - A registered customer
//! - [`Order`] - An order placed by exactly one customer
//! - [`Address`] - Delivery address value object embedded in an order
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewCustomer`, `NewOrder` - For creating new records
//! - `UpdateCustomer` - For full replacement of mutable fields

pub mod address;
pub mod customer;
pub mod order;

pub use address::Address;
pub use customer::{Customer, NewCustomer, UpdateCustomer};
pub use order::{NewOrder, Order};
