//! Business logic services for the application layer.

pub mod customer_service;
pub mod order_service;

pub use customer_service::{CustomerService, DefaultCustomerService};
pub use order_service::{DefaultOrderService, OrderService};

#[cfg(test)]
pub use customer_service::MockCustomerService;
#[cfg(test)]
pub use order_service::MockOrderService;
