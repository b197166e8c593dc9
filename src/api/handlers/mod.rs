//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod customers;
pub mod health;
pub mod orders;

pub use customers::{
    delete_customer_handler, find_all_customers_handler, find_customer_handler,
    insert_customer_handler, update_customer_handler,
};
pub use health::health_handler;
pub use orders::{
    delete_order_handler, find_all_orders_handler, find_order_handler, insert_order_handler,
};
